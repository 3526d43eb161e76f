use std::fmt;

/// Difficulty tier selected by the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Everything a tier controls: puzzle size, edge density, and the
/// multiplier applied to the score on a win
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    pub node_count: usize,
    pub edge_probability: f64,
    pub score_multiplier: i32,
}

const EASY: DifficultyConfig = DifficultyConfig {
    node_count: 5,
    edge_probability: 0.4,
    score_multiplier: 1,
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    node_count: 8,
    edge_probability: 0.5,
    score_multiplier: 2,
};

const HARD: DifficultyConfig = DifficultyConfig {
    node_count: 10,
    edge_probability: 0.6,
    score_multiplier: 3,
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_counts() {
        assert_eq!(Difficulty::Easy.config().node_count, 5);
        assert_eq!(Difficulty::Medium.config().node_count, 8);
        assert_eq!(Difficulty::Hard.config().node_count, 10);
    }

    #[test]
    fn test_edge_probabilities() {
        assert_eq!(Difficulty::Easy.config().edge_probability, 0.4);
        assert_eq!(Difficulty::Medium.config().edge_probability, 0.5);
        assert_eq!(Difficulty::Hard.config().edge_probability, 0.6);
    }

    #[test]
    fn test_score_multipliers() {
        assert_eq!(Difficulty::Easy.config().score_multiplier, 1);
        assert_eq!(Difficulty::Medium.config().score_multiplier, 2);
        assert_eq!(Difficulty::Hard.config().score_multiplier, 3);
    }

    #[test]
    fn test_default_is_medium() {
        // The game opens with a medium puzzle
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
