use bevy::prelude::*;
use bevy::window::CursorMoved;

use crate::game::difficulty::Difficulty;
use crate::graph::PaletteColor;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<GameCommand>()
            .add_message::<PointerEvent>()
            .add_systems(
                Update,
                (track_cursor_pos, collect_keyboard_commands, collect_pointer_events),
            );
    }
}

/// One discrete player action. Every keyboard trigger maps to exactly
/// one command; the board systems drain them in order each frame.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    NewGame(Difficulty),
    SelectColor(PaletteColor),
    NextNode,
    PrevNode,
    NextColor,
    PrevColor,
    ColorSelectedNode,
    Hint,
}

const KEY_BINDINGS: [(KeyCode, GameCommand); 14] = [
    (KeyCode::KeyE, GameCommand::NewGame(Difficulty::Easy)),
    (KeyCode::KeyM, GameCommand::NewGame(Difficulty::Medium)),
    (KeyCode::KeyH, GameCommand::NewGame(Difficulty::Hard)),
    (KeyCode::Digit1, GameCommand::SelectColor(PaletteColor::Green)),
    (KeyCode::Digit2, GameCommand::SelectColor(PaletteColor::Red)),
    (KeyCode::Digit3, GameCommand::SelectColor(PaletteColor::Blue)),
    (KeyCode::Digit4, GameCommand::SelectColor(PaletteColor::Yellow)),
    (KeyCode::Digit5, GameCommand::SelectColor(PaletteColor::Black)),
    (KeyCode::ArrowRight, GameCommand::NextNode),
    (KeyCode::ArrowLeft, GameCommand::PrevNode),
    (KeyCode::ArrowUp, GameCommand::NextColor),
    (KeyCode::ArrowDown, GameCommand::PrevColor),
    (KeyCode::Enter, GameCommand::ColorSelectedNode),
    (KeyCode::KeyN, GameCommand::Hint),
];

/// A mouse click in window coordinates
#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    pub position: Vec2,
}

impl PointerEvent {
    /// Convert window coords to world space using a camera
    pub fn to_world_position(
        &self,
        camera: &Camera,
        camera_transform: &GlobalTransform,
    ) -> Option<Vec2> {
        camera
            .viewport_to_world_2d(camera_transform, self.position)
            .ok()
    }
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct CursorPos(pub Option<Vec2>);

fn track_cursor_pos(mut ev_cursor: MessageReader<CursorMoved>, mut pos: ResMut<CursorPos>) {
    for e in ev_cursor.read() {
        // last event wins
        pos.0 = Some(e.position);
    }
}

fn collect_keyboard_commands(
    keys: Res<ButtonInput<KeyCode>>,
    mut out: MessageWriter<GameCommand>,
) {
    for (key, command) in KEY_BINDINGS {
        if keys.just_pressed(key) {
            out.write(command);
        }
    }
}

fn collect_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPos>,
    mut out: MessageWriter<PointerEvent>,
) {
    if mouse_buttons.just_pressed(MouseButton::Left)
        && let Some(p) = cursor.0
    {
        out.write(PointerEvent { position: p });
    }
}
