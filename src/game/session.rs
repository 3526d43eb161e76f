use bevy::prelude::Resource;
use log::debug;
use rand::Rng;

use crate::graph::{
    Coloring, GameState, HintResult, MoveResult, NodeId, PaletteColor, RandomGraph,
};

use super::difficulty::Difficulty;

/// A game session: the puzzle in play plus the run-scoped pieces that
/// survive regeneration (high score) and the generation counter the
/// shell watches to rebuild the board.
#[derive(Debug, Resource)]
pub struct GameSession {
    state: GameState,
    difficulty: Difficulty,
    high_score: i32,
    generation: u64,
}

impl GameSession {
    /// Create a session with a freshly generated puzzle
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        GameSession {
            state: generate_state(difficulty, rng),
            difficulty,
            high_score: 0,
            generation: 0,
        }
    }

    // === Query methods (for shell systems to read state) ===

    pub fn score(&self) -> i32 {
        self.state.score()
    }

    pub fn high_score(&self) -> i32 {
        self.high_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn graph(&self) -> &RandomGraph {
        self.state.graph()
    }

    pub fn coloring(&self) -> &Coloring {
        self.state.coloring()
    }

    pub fn node_count(&self) -> usize {
        self.state.graph().node_count()
    }

    pub fn solved(&self) -> bool {
        self.state.solved()
    }

    /// Bumped on every new puzzle; the board rebuilds when it changes
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // === Mutation methods (for handling user commands) ===

    /// Discard the current puzzle and start a new one at the given
    /// difficulty. Score resets with the puzzle; the high score stays.
    pub fn new_game<R: Rng + ?Sized>(&mut self, difficulty: Difficulty, rng: &mut R) {
        self.state = generate_state(difficulty, rng);
        self.difficulty = difficulty;
        self.generation += 1;

        debug!(
            "new {} game: {} nodes, {} edges",
            difficulty,
            self.state.graph().node_count(),
            self.state.graph().edge_count()
        );
    }

    /// Try to color a node, then refresh the high score
    pub fn apply_move(&mut self, node: NodeId, color: PaletteColor) -> MoveResult {
        let result = self.state.apply_move(node, color);
        self.update_high_score();
        result
    }

    /// Ask for a hint, then refresh the high score
    pub fn give_hint(&mut self) -> HintResult {
        let result = self.state.give_hint();
        self.update_high_score();
        result
    }

    fn update_high_score(&mut self) {
        if self.state.score() > self.high_score {
            self.high_score = self.state.score();
        }
    }
}

fn generate_state<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> GameState {
    let config = difficulty.config();
    let graph = RandomGraph::generate(config.node_count, config.edge_probability, rng);
    GameState::new(graph, config.score_multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(difficulty: Difficulty) -> GameSession {
        GameSession::new(difficulty, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_node_count_tracks_difficulty() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(GameSession::new(Difficulty::Easy, &mut rng).node_count(), 5);
        assert_eq!(GameSession::new(Difficulty::Medium, &mut rng).node_count(), 8);
        assert_eq!(GameSession::new(Difficulty::Hard, &mut rng).node_count(), 10);
    }

    #[test]
    fn test_new_game_resets_puzzle_and_score() {
        let mut session = session(Difficulty::Easy);
        session.give_hint();
        assert_eq!(session.score(), -5);

        let mut rng = StdRng::seed_from_u64(2);
        session.new_game(Difficulty::Hard, &mut rng);

        assert_eq!(session.score(), 0);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.node_count(), 10);
        for i in 0..10 {
            assert_eq!(session.coloring().get(NodeId(i)), None);
        }
    }

    #[test]
    fn test_generation_counter() {
        let mut session = session(Difficulty::Medium);
        assert_eq!(session.generation(), 0);

        let mut rng = StdRng::seed_from_u64(3);
        session.new_game(Difficulty::Medium, &mut rng);
        session.new_game(Difficulty::Easy, &mut rng);
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_high_score_rises_only_on_strictly_greater_score() {
        // An edgeless puzzle keeps every move valid; the fourth node
        // stays uncolored so no win finalization interferes
        let mut session = GameSession {
            state: GameState::new(RandomGraph::from_edges(4, &[]), 1),
            difficulty: Difficulty::Easy,
            high_score: 0,
            generation: 0,
        };

        session.apply_move(NodeId(0), PaletteColor::Red);
        assert_eq!(session.high_score(), 10);

        // A hint drops the score but never the high score
        session.give_hint();
        assert_eq!(session.score(), 5);
        assert_eq!(session.high_score(), 10);

        // A recoloring that leaves the score below the record changes nothing
        session.apply_move(NodeId(0), PaletteColor::Blue);
        assert_eq!(session.score(), 5);
        assert_eq!(session.high_score(), 10);

        // Passing the record raises it again
        session.apply_move(NodeId(2), PaletteColor::Red);
        assert_eq!(session.score(), 15);
        assert_eq!(session.high_score(), 15);
    }

    #[test]
    fn test_high_score_survives_new_game() {
        let mut session = GameSession {
            state: GameState::new(RandomGraph::from_edges(2, &[]), 1),
            difficulty: Difficulty::Easy,
            high_score: 0,
            generation: 0,
        };
        session.apply_move(NodeId(0), PaletteColor::Red);
        assert_eq!(session.high_score(), 10);

        let mut rng = StdRng::seed_from_u64(4);
        session.new_game(Difficulty::Easy, &mut rng);

        assert_eq!(session.score(), 0);
        assert_eq!(session.high_score(), 10);
    }
}
