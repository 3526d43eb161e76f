use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::input::PointerEvent;
use crate::visual::board::BoardMetrics;
use crate::visual::nodes::GraphNode;
use crate::visual::physics::NodePhysics;

use super::selection::Selection;

/// System: a click near a node makes it the selected node
pub fn handle_pointer_select(
    mut pointer_events: MessageReader<PointerEvent>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    nodes: Query<(&GraphNode, &NodePhysics)>,
    metrics: Option<Res<BoardMetrics>>,
    mut selection: ResMut<Selection>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(metrics) = metrics else {
        return;
    };

    for event in pointer_events.read() {
        let Some(world_pos) = event.to_world_position(camera, camera_transform) else {
            continue;
        };

        let picked = nodes
            .iter()
            .min_by(|(_, physics_a), (_, physics_b)| {
                let dist_a = world_pos.distance(physics_a.position);
                let dist_b = world_pos.distance(physics_b.position);
                dist_a.partial_cmp(&dist_b).unwrap()
            })
            .filter(|(_, physics)| {
                world_pos.distance(physics.position) < metrics.node_radius * 2.0
            })
            .map(|(graph_node, _)| graph_node.node_id);

        if let Some(node_id) = picked {
            selection.node = node_id.index();
            debug!("selected node {} via pointer", node_id);
        }
    }
}
