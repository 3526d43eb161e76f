use bevy::prelude::*;

use crate::game::session::GameSession;
use crate::graph::{NodeId, PaletteColor};

#[derive(Component)]
pub struct GraphNode {
    pub node_id: NodeId,
}

/// Visual animation state for a node
#[derive(Component, Debug)]
pub struct NodeVisual {
    /// Displayed color, trailing the assignment for a smooth transition
    pub current_color: Vec4,
}

/// Render color for an assignment; the uncolored sentinel is dark gray
pub fn assignment_to_color(color: Option<PaletteColor>) -> Vec4 {
    match color {
        None => Vec4::new(0.25, 0.25, 0.28, 1.0),
        Some(PaletteColor::Green) => Vec4::new(0.15, 0.78, 0.30, 1.0),
        Some(PaletteColor::Red) => Vec4::new(0.92, 0.15, 0.14, 1.0),
        Some(PaletteColor::Blue) => Vec4::new(0.20, 0.47, 0.95, 1.0),
        Some(PaletteColor::Yellow) => Vec4::new(0.95, 0.85, 0.16, 1.0),
        Some(PaletteColor::Black) => Vec4::new(0.07, 0.07, 0.09, 1.0),
    }
}

pub fn vec4_to_color(v: Vec4) -> Color {
    Color::srgba(v.x, v.y, v.z, v.w)
}

/// System: ease each node's displayed color toward its assignment and
/// push it into the node's material
pub fn update_node_visuals(
    time: Res<Time>,
    session: Res<GameSession>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut nodes: Query<(&GraphNode, &mut NodeVisual, &MeshMaterial2d<ColorMaterial>)>,
) {
    let dt = time.delta_secs();
    let coloring = session.coloring();

    for (graph_node, mut visual, material_handle) in &mut nodes {
        // A board rebuild can leave entities from the previous graph
        // alive for one frame
        if graph_node.node_id.index() >= coloring.len() {
            continue;
        }

        let target = assignment_to_color(coloring.get(graph_node.node_id));
        visual.current_color = visual.current_color.lerp(target, (dt * 8.0).min(1.0));

        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.color = vec4_to_color(visual.current_color);
        }
    }
}
