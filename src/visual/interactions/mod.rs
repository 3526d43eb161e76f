pub mod commands;
pub mod pointer;
pub mod selection;

pub use commands::handle_game_commands;
pub use pointer::handle_pointer_select;
pub use selection::Selection;
