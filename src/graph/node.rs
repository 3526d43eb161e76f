use std::fmt;

/// Node identifier, an index into the current graph's node range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(7).to_string(), "7");
    }

    #[test]
    fn test_node_id_ordering() {
        assert!(NodeId(2) < NodeId(5));
        assert_eq!(NodeId(3), NodeId(3));
    }
}
