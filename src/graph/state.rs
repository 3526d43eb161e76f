use std::fmt;

use log::debug;

use super::coloring::Coloring;
use super::node::NodeId;
use super::palette::PaletteColor;
use super::random_graph::RandomGraph;

/// Score delta for the first valid coloring of a node
const REWARD_FIRST_COLORING: i32 = 10;
/// Score delta for a rejected conflicting move
const PENALTY_CONFLICT: i32 = 5;
/// Score delta for using a hint
const PENALTY_HINT: i32 = 5;

/// Error types for move validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidNode(NodeId),
    AdjacentConflict { node: NodeId, color: PaletteColor },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidNode(n) => {
                write!(f, "Node {} does not exist in the current graph", n)
            }
            MoveError::AdjacentConflict { node, color } => {
                write!(f, "A neighbor of node {} already has the color {}", node, color)
            }
        }
    }
}

/// Result of attempting to color a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The node took the color; `first_fill` is true when it was
    /// previously uncolored (and the reward applied)
    Colored {
        node: NodeId,
        color: PaletteColor,
        first_fill: bool,
    },
    /// The move completed a proper coloring of the whole graph
    Won(WinSummary),
    /// The move was rejected (a conflict still costs points)
    Invalid(MoveError),
}

/// Breakdown of the one-time win finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinSummary {
    pub multiplier: i32,
    pub distinct_colors: usize,
    pub color_bonus: i32,
    pub final_score: i32,
}

/// Result of a hint request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintResult {
    /// One node was colored at the flat hint penalty
    Applied { node: NodeId, color: PaletteColor },
    /// No uncolored node has any legal color; nothing changed
    NoMoves,
}

/// Whether the assignment is a complete proper coloring: every node
/// colored, no edge joining two same-colored nodes.
pub fn is_proper_coloring(graph: &RandomGraph, coloring: &Coloring) -> bool {
    if !coloring.is_complete() {
        return false;
    }
    graph
        .edges()
        .iter()
        .all(|edge| coloring.get(edge.from) != coloring.get(edge.to))
}

/// Bonus for finishing with few distinct colors, narrowest tier first
fn color_count_bonus(distinct: usize) -> i32 {
    match distinct {
        0..=2 => 50,
        3 => 20,
        4 => 10,
        _ => 0,
    }
}

/// State of one puzzle: topology, color assignment, score, and the
/// one-shot solved flag guarding win finalization.
#[derive(Debug, Clone)]
pub struct GameState {
    graph: RandomGraph,
    coloring: Coloring,
    score: i32,
    score_multiplier: i32,
    solved: bool,
}

impl GameState {
    /// Create a fresh puzzle over the given topology. The multiplier is
    /// fixed per difficulty and applied once on the winning move.
    pub fn new(graph: RandomGraph, score_multiplier: i32) -> Self {
        let coloring = Coloring::new(graph.node_count());
        GameState {
            graph,
            coloring,
            score: 0,
            score_multiplier,
            solved: false,
        }
    }

    pub fn graph(&self) -> &RandomGraph {
        &self.graph
    }

    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Validate a move without applying it
    pub fn check_move(&self, node: NodeId, color: PaletteColor) -> Result<(), MoveError> {
        if !self.graph.contains(node) {
            return Err(MoveError::InvalidNode(node));
        }

        let conflict = self
            .graph
            .neighbors(node)
            .iter()
            .any(|&neighbor| self.coloring.get(neighbor) == Some(color));
        if conflict {
            return Err(MoveError::AdjacentConflict { node, color });
        }

        Ok(())
    }

    /// Apply a coloring move.
    ///
    /// An unknown node leaves the state untouched. A conflicting color is
    /// rejected but still costs points: the penalty is a game mechanic,
    /// not a pure validation failure. A legal color always overwrites the
    /// node; only the first fill of a node earns the reward.
    pub fn apply_move(&mut self, node: NodeId, color: PaletteColor) -> MoveResult {
        match self.check_move(node, color) {
            Err(err @ MoveError::InvalidNode(_)) => MoveResult::Invalid(err),
            Err(err @ MoveError::AdjacentConflict { .. }) => {
                self.score -= PENALTY_CONFLICT;
                MoveResult::Invalid(err)
            }
            Ok(()) => {
                let first_fill = !self.coloring.is_colored(node);
                if first_fill {
                    self.score += REWARD_FIRST_COLORING;
                }
                self.coloring.set(node, color);

                if !self.solved && self.check_win() {
                    MoveResult::Won(self.finalize_win())
                } else {
                    MoveResult::Colored {
                        node,
                        color,
                        first_fill,
                    }
                }
            }
        }
    }

    /// Read-only win check; never mutates
    pub fn check_win(&self) -> bool {
        is_proper_coloring(&self.graph, &self.coloring)
    }

    /// One-time score finalization: difficulty multiplier, then the
    /// distinct-color bonus. The solved flag keeps a board that stays
    /// interactive after the win from re-applying either.
    fn finalize_win(&mut self) -> WinSummary {
        self.solved = true;
        self.score *= self.score_multiplier;

        let distinct_colors = self.coloring.distinct_colors();
        let color_bonus = color_count_bonus(distinct_colors);
        self.score += color_bonus;

        debug!(
            "puzzle solved: x{} multiplier, {} distinct colors, +{} bonus, final score {}",
            self.score_multiplier, distinct_colors, color_bonus, self.score
        );

        WinSummary {
            multiplier: self.score_multiplier,
            distinct_colors,
            color_bonus,
            final_score: self.score,
        }
    }

    /// Greedy first-fit hint: the first uncolored node (ascending id)
    /// that admits a palette color unused by its neighbors gets that
    /// color, at the flat penalty and with no first-fill reward.
    ///
    /// No lookahead: a node is skipped when every palette color appears
    /// on a neighbor, even if a full coloring of the rest still exists.
    /// Hints never evaluate the win condition.
    pub fn give_hint(&mut self) -> HintResult {
        for index in 0..self.graph.node_count() {
            let node = NodeId(index);
            if self.coloring.is_colored(node) {
                continue;
            }

            for color in PaletteColor::ALL {
                if self.check_move(node, color).is_ok() {
                    self.coloring.set(node, color);
                    self.score -= PENALTY_HINT;
                    return HintResult::Applied { node, color };
                }
            }
        }

        HintResult::NoMoves
    }
}
