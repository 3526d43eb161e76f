pub mod hud;

pub use hud::{StatusLine, spawn_hud, update_hud};
