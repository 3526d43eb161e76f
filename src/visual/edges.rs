use bevy::prelude::*;

use crate::game::session::GameSession;

use super::board::BoardMetrics;
use super::interactions::Selection;
use super::nodes::{GraphNode, assignment_to_color, vec4_to_color};
use super::physics::NodePhysics;

/// System: draw every edge of the current graph as a line between the
/// live (physics) positions of its endpoints
pub fn draw_edges(
    mut gizmos: Gizmos,
    session: Res<GameSession>,
    nodes: Query<(&GraphNode, &NodePhysics)>,
) {
    let node_count = session.node_count();
    let mut positions: Vec<Option<Vec2>> = vec![None; node_count];
    for (graph_node, physics) in &nodes {
        if graph_node.node_id.index() < node_count {
            positions[graph_node.node_id.index()] = Some(physics.position);
        }
    }

    let edge_color = Color::srgb(0.45, 0.45, 0.52);
    for edge in session.graph().edges() {
        if let (Some(a), Some(b)) = (positions[edge.from.index()], positions[edge.to.index()]) {
            gizmos.line_2d(a, b, edge_color);
        }
    }
}

/// System: ring the selected node with the currently selected palette
/// color so the next move is visible before it happens
pub fn draw_selection_ring(
    mut gizmos: Gizmos,
    metrics: Option<Res<BoardMetrics>>,
    selection: Res<Selection>,
    nodes: Query<(&GraphNode, &NodePhysics)>,
) {
    let Some(metrics) = metrics else {
        return;
    };

    let ring_color = vec4_to_color(assignment_to_color(Some(selection.selected_color())));
    for (graph_node, physics) in &nodes {
        if graph_node.node_id.index() == selection.node {
            gizmos.circle_2d(physics.position, metrics.node_radius * 1.35, ring_color);
        }
    }
}
