mod coloring;
mod node;
mod palette;
mod random_graph;
mod state;

pub use coloring::Coloring;
pub use node::NodeId;
pub use palette::PaletteColor;
pub use random_graph::{Edge, RandomGraph};
pub use state::{GameState, HintResult, MoveError, MoveResult, WinSummary, is_proper_coloring};
