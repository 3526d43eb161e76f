use std::collections::HashSet;

use super::node::NodeId;
use super::palette::PaletteColor;

/// Color assignment for all nodes of the current graph.
/// Always exactly one entry per node; `None` is the uncolored sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring(Vec<Option<PaletteColor>>);

impl Coloring {
    /// Create an all-uncolored assignment for `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        Coloring(vec![None; node_count])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the color of a node, `None` if uncolored
    pub fn get(&self, node: NodeId) -> Option<PaletteColor> {
        self.0[node.index()]
    }

    /// Set the color of a node, overwriting any prior color
    pub fn set(&mut self, node: NodeId, color: PaletteColor) {
        self.0[node.index()] = Some(color);
    }

    pub fn is_colored(&self, node: NodeId) -> bool {
        self.0[node.index()].is_some()
    }

    /// Whether every node has a color
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|c| c.is_some())
    }

    /// First uncolored node in ascending id order, if any
    pub fn first_uncolored(&self) -> Option<NodeId> {
        self.0.iter().position(|c| c.is_none()).map(NodeId)
    }

    /// Number of distinct colors currently in use
    pub fn distinct_colors(&self) -> usize {
        self.0
            .iter()
            .flatten()
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_uncolored() {
        let coloring = Coloring::new(5);

        assert_eq!(coloring.len(), 5);
        for i in 0..5 {
            assert_eq!(coloring.get(NodeId(i)), None);
        }
        assert!(!coloring.is_complete());
    }

    #[test]
    fn test_set_and_overwrite() {
        let mut coloring = Coloring::new(3);

        coloring.set(NodeId(1), PaletteColor::Red);
        assert_eq!(coloring.get(NodeId(1)), Some(PaletteColor::Red));
        assert!(coloring.is_colored(NodeId(1)));

        coloring.set(NodeId(1), PaletteColor::Blue);
        assert_eq!(coloring.get(NodeId(1)), Some(PaletteColor::Blue));
    }

    #[test]
    fn test_first_uncolored_ascending() {
        let mut coloring = Coloring::new(4);
        coloring.set(NodeId(0), PaletteColor::Green);
        coloring.set(NodeId(2), PaletteColor::Green);

        assert_eq!(coloring.first_uncolored(), Some(NodeId(1)));

        coloring.set(NodeId(1), PaletteColor::Red);
        coloring.set(NodeId(3), PaletteColor::Red);
        assert_eq!(coloring.first_uncolored(), None);
        assert!(coloring.is_complete());
    }

    #[test]
    fn test_distinct_colors() {
        let mut coloring = Coloring::new(4);
        assert_eq!(coloring.distinct_colors(), 0);

        coloring.set(NodeId(0), PaletteColor::Red);
        coloring.set(NodeId(1), PaletteColor::Red);
        assert_eq!(coloring.distinct_colors(), 1);

        coloring.set(NodeId(2), PaletteColor::Blue);
        coloring.set(NodeId(3), PaletteColor::Black);
        assert_eq!(coloring.distinct_colors(), 3);
    }
}
