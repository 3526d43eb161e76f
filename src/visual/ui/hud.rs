//! World-space HUD: score, high score, difficulty, current selection,
//! a status line for move feedback, and the static hotkey help.

use bevy::prelude::*;

use crate::camera::GameCamera;
use crate::game::session::GameSession;
use crate::visual::interactions::Selection;

/// Text pixels per world unit for HUD glyphs
const HUD_FONT_SIZE: f32 = 32.0;
const HUD_TEXT_SCALE: f32 = 0.011;
const HELP_TEXT_SCALE: f32 = 0.0075;

const HELP_TEXT: &str = "Hotkeys:\n\
E / M / H: new Easy / Medium / Hard game\n\
Left / Right: select node   Up / Down: select color   1-5: pick color\n\
Enter: color selected node   N: hint   Click: pick node";

/// Feedback line driven by the command handler (move errors, hint
/// results, win announcements)
#[derive(Resource, Default)]
pub struct StatusLine {
    pub text: String,
}

impl StatusLine {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Which live value a HUD text entity displays
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Score,
    HighScore,
    Difficulty,
    Selection,
    Status,
}

/// System: spawn the HUD text entities around the board
pub fn spawn_hud(mut commands: Commands, game_camera: Res<GameCamera>) {
    let bounds = &game_camera.bounds;

    let fields = [
        (HudField::Difficulty, 0.08, 0.96),
        (HudField::HighScore, 0.62, 0.96),
        (HudField::Score, 0.90, 0.96),
        (HudField::Selection, 0.08, 0.90),
        (HudField::Status, 0.50, 0.84),
    ];

    for (field, horizontal, vertical) in fields {
        commands.spawn((
            field,
            Text2d::new(String::new()),
            TextFont {
                font_size: HUD_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_translation(
                bounds.position_with_padding(horizontal, vertical, 0.02).extend(5.0),
            )
            .with_scale(Vec3::splat(HUD_TEXT_SCALE)),
        ));
    }

    // Static hotkey help in the bottom-left corner
    commands.spawn((
        Text2d::new(HELP_TEXT),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.75)),
        Transform::from_translation(bounds.position_with_padding(0.14, 0.05, 0.02).extend(5.0))
            .with_scale(Vec3::splat(HELP_TEXT_SCALE)),
    ));

    info!("HUD spawned");
}

/// System: refresh every HUD field from the live game state
pub fn update_hud(
    session: Res<GameSession>,
    selection: Res<Selection>,
    status: Res<StatusLine>,
    mut texts: Query<(&mut Text2d, &HudField)>,
) {
    for (mut text, field) in &mut texts {
        let value = match field {
            HudField::Score => format!("Score: {}", session.score()),
            HudField::HighScore => format!("High Score: {}", session.high_score()),
            HudField::Difficulty => format!("Difficulty: {}", session.difficulty()),
            HudField::Selection => format!(
                "Node {} | Color {}",
                selection.node,
                selection.selected_color()
            ),
            HudField::Status => status.text.clone(),
        };

        if text.0 != value {
            text.0 = value;
        }
    }
}
