use bevy::prelude::*;
use rand::rng;

use crate::game::difficulty::Difficulty;
use crate::game::session::GameSession;
use crate::visual::board::{rebuild_board, setup_board};
use crate::visual::edges::{draw_edges, draw_selection_ring};
use crate::visual::interactions::{Selection, handle_game_commands, handle_pointer_select};
use crate::visual::nodes::update_node_visuals;
use crate::visual::physics::simulate_node_physics;
use crate::visual::ui::{StatusLine, spawn_hud, update_hud};

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .init_resource::<StatusLine>()
            // Session first, then the board built from it, then the HUD
            .add_systems(Startup, (setup_session, setup_board, spawn_hud).chain())
            .add_systems(
                Update,
                (
                    // Input
                    handle_pointer_select,
                    handle_game_commands,
                    rebuild_board,
                    // Motion and visuals
                    simulate_node_physics,
                    update_node_visuals,
                    draw_edges,
                    draw_selection_ring,
                    // HUD
                    update_hud,
                )
                    .chain(),
            );
    }
}

/// System: create the session; the game opens on a medium puzzle
fn setup_session(mut commands: Commands) {
    let session = GameSession::new(Difficulty::Medium, &mut rng());

    info!(
        "starting {} game: {} nodes, {} edges",
        session.difficulty(),
        session.node_count(),
        session.graph().edge_count()
    );

    commands.insert_resource(session);
}
