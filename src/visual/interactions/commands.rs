use bevy::prelude::*;
use rand::rng;

use crate::game::session::GameSession;
use crate::graph::{HintResult, MoveError, MoveResult, NodeId};
use crate::input::GameCommand;
use crate::visual::board::BoardMetrics;
use crate::visual::nodes::GraphNode;
use crate::visual::physics::NodePhysics;
use crate::visual::ui::StatusLine;

use super::selection::Selection;

/// How hard a rejected node gets knocked sideways, relative to its size
const SHAKE_IMPULSE_FACTOR: f32 = 15.0;

/// System: drain the frame's player commands into the session. This is
/// the only place game state mutates, so every trigger runs to
/// completion before the next one is seen.
pub fn handle_game_commands(
    mut commands_in: MessageReader<GameCommand>,
    mut session: ResMut<GameSession>,
    mut selection: ResMut<Selection>,
    mut status: ResMut<StatusLine>,
    metrics: Option<Res<BoardMetrics>>,
    mut nodes: Query<(&GraphNode, &mut NodePhysics)>,
) {
    for command in commands_in.read() {
        match command {
            GameCommand::NewGame(difficulty) => {
                session.new_game(*difficulty, &mut rng());
                status.set(format!(
                    "New {} game: {} nodes, {} edges",
                    difficulty,
                    session.node_count(),
                    session.graph().edge_count()
                ));
                info!(
                    "new {} game with {} nodes",
                    difficulty,
                    session.node_count()
                );
            }

            GameCommand::SelectColor(color) => selection.color = color.index(),
            GameCommand::NextNode => selection.next_node(session.node_count()),
            GameCommand::PrevNode => selection.prev_node(session.node_count()),
            GameCommand::NextColor => selection.next_color(),
            GameCommand::PrevColor => selection.prev_color(),

            GameCommand::ColorSelectedNode => {
                let node = selection.selected_node();
                let color = selection.selected_color();

                match session.apply_move(node, color) {
                    MoveResult::Colored { node, color, .. } => {
                        status.set(format!("Node {} is now {}", node, color));
                        info!("colored node {} {}", node, color);
                    }
                    MoveResult::Won(summary) => {
                        status.set(format!(
                            "You've colored the graph! Final score: {} (x{}, +{} for {} colors)",
                            summary.final_score,
                            summary.multiplier,
                            summary.color_bonus,
                            summary.distinct_colors
                        ));
                        info!("puzzle solved with final score {}", summary.final_score);
                    }
                    MoveResult::Invalid(err) => {
                        status.set(err.to_string());
                        warn!("rejected move: {}", err);
                        if let MoveError::AdjacentConflict { node, .. } = err {
                            shake_node(node, metrics.as_deref(), &mut nodes);
                        }
                    }
                }
            }

            GameCommand::Hint => match session.give_hint() {
                HintResult::Applied { node, color } => {
                    status.set(format!("Hint: node {} takes {}", node, color));
                    info!("hint colored node {} {}", node, color);
                }
                HintResult::NoMoves => {
                    status.set("No possible moves detected");
                    info!("hint requested but no legal move exists");
                }
            },
        }
    }
}

/// Knock the offending node sideways; the rest spring pulls it back
fn shake_node(
    node: NodeId,
    metrics: Option<&BoardMetrics>,
    nodes: &mut Query<(&GraphNode, &mut NodePhysics)>,
) {
    let Some(metrics) = metrics else {
        return;
    };

    for (graph_node, mut physics) in nodes {
        if graph_node.node_id == node {
            physics.apply_impulse(Vec2::new(metrics.node_radius * SHAKE_IMPULSE_FACTOR, 0.0));
        }
    }
}
