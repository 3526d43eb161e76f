use bevy::prelude::*;

use crate::camera::GameCamera;
use crate::game::session::GameSession;
use crate::graph::NodeId;
use crate::layout::{LAYOUT_SEED, compute_layout};

use super::nodes::{GraphNode, NodeVisual, assignment_to_color, vec4_to_color};
use super::physics::NodePhysics;

/// Node radius as a fraction of the smaller board-region dimension
const NODE_RADIUS_FRACTION: f32 = 0.045;
/// Label glyph size in text pixels; scaled down into world units
const LABEL_FONT_SIZE: f32 = 32.0;

/// Board bookkeeping: hit-test radius plus the session generation the
/// spawned entities belong to
#[derive(Resource, Debug, Clone, Copy)]
pub struct BoardMetrics {
    pub node_radius: f32,
    pub generation: u64,
}

/// System: spawn the initial board
pub fn setup_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    game_camera: Res<GameCamera>,
    session: Res<GameSession>,
) {
    let metrics = spawn_board(&mut commands, &mut meshes, &mut materials, &game_camera, &session);
    commands.insert_resource(metrics);
}

/// System: throw away and respawn every node entity when a new puzzle
/// was generated
pub fn rebuild_board(
    mut commands: Commands,
    metrics: Option<Res<BoardMetrics>>,
    existing: Query<Entity, With<GraphNode>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    game_camera: Res<GameCamera>,
    session: Res<GameSession>,
) {
    let Some(metrics) = metrics else {
        return;
    };
    if metrics.generation == session.generation() {
        return;
    }

    info!(
        "rebuilding board for generation {} ({} nodes)",
        session.generation(),
        session.node_count()
    );

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    let metrics = spawn_board(&mut commands, &mut meshes, &mut materials, &game_camera, &session);
    commands.insert_resource(metrics);
}

/// Lay out the current graph and spawn one circle + id label per node
fn spawn_board(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    game_camera: &GameCamera,
    session: &GameSession,
) -> BoardMetrics {
    // Central band of the view; HUD text owns the top, help the bottom
    let board_region = game_camera.bounds.region((0.05, 0.95), (0.10, 0.76), 0.0);

    let graph = session.graph();
    let positions = compute_layout(graph, LAYOUT_SEED);
    let node_radius = board_region.width().min(board_region.height()) * NODE_RADIUS_FRACTION;
    let circle = meshes.add(Circle::new(node_radius));

    for (index, unit_position) in positions.iter().enumerate() {
        let node_id = NodeId(index);
        let position = Vec2::new(
            board_region.left + unit_position.x * board_region.width(),
            board_region.bottom + unit_position.y * board_region.height(),
        );
        let color = assignment_to_color(session.coloring().get(node_id));

        commands
            .spawn((
                GraphNode { node_id },
                NodePhysics::at_rest(position),
                NodeVisual {
                    current_color: color,
                },
                Mesh2d(circle.clone()),
                MeshMaterial2d(materials.add(ColorMaterial::from_color(vec4_to_color(color)))),
                Transform::from_translation(position.extend(1.0)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text2d::new(node_id.to_string()),
                    TextFont {
                        font_size: LABEL_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, 0.0, 0.5)
                        .with_scale(Vec3::splat(node_radius * 1.2 / LABEL_FONT_SIZE)),
                ));
            });
    }

    BoardMetrics {
        node_radius,
        generation: session.generation(),
    }
}
