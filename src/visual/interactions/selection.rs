use bevy::prelude::Resource;

use crate::graph::{NodeId, PaletteColor};

/// Cyclic successor over `0..n`
pub fn cycle_next(index: usize, n: usize) -> usize {
    (index + 1) % n
}

/// Cyclic predecessor over `0..n`
pub fn cycle_prev(index: usize, n: usize) -> usize {
    (index + n - 1) % n
}

/// The player's current node/color pick. Pure UI state: the core never
/// sees it, and it deliberately survives new games, so a stale node
/// index is possible and surfaces as an invalid-node move.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Selection {
    pub node: usize,
    pub color: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Selection { node: 0, color: 0 }
    }
}

impl Selection {
    pub fn selected_node(&self) -> NodeId {
        NodeId(self.node)
    }

    pub fn selected_color(&self) -> PaletteColor {
        PaletteColor::ALL[self.color]
    }

    pub fn next_node(&mut self, node_count: usize) {
        if node_count > 0 {
            self.node = cycle_next(self.node, node_count);
        }
    }

    pub fn prev_node(&mut self, node_count: usize) {
        if node_count > 0 {
            self.node = cycle_prev(self.node, node_count);
        }
    }

    pub fn next_color(&mut self) {
        self.color = cycle_next(self.color, PaletteColor::ALL.len());
    }

    pub fn prev_color(&mut self) {
        self.color = cycle_prev(self.color, PaletteColor::ALL.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(cycle_next(3, 5), 4);
        assert_eq!(cycle_next(4, 5), 0);
        assert_eq!(cycle_prev(1, 5), 0);
        assert_eq!(cycle_prev(0, 5), 4);
    }

    #[test]
    fn test_node_navigation() {
        let mut selection = Selection::default();

        selection.next_node(5);
        assert_eq!(selection.node, 1);
        selection.prev_node(5);
        selection.prev_node(5);
        assert_eq!(selection.node, 4);
    }

    #[test]
    fn test_stale_index_recovers_into_range() {
        // A Hard -> Easy switch can leave the selection beyond the new
        // node range; one navigation step lands back inside it
        let mut selection = Selection { node: 9, color: 0 };

        selection.next_node(5);
        assert_eq!(selection.node, 0);

        let mut selection = Selection { node: 9, color: 0 };
        selection.prev_node(5);
        assert_eq!(selection.node, 3);
    }

    #[test]
    fn test_color_navigation_follows_palette_order() {
        let mut selection = Selection::default();
        assert_eq!(selection.selected_color(), PaletteColor::Green);

        selection.next_color();
        assert_eq!(selection.selected_color(), PaletteColor::Red);

        selection.prev_color();
        selection.prev_color();
        assert_eq!(selection.selected_color(), PaletteColor::Black);
    }
}
