mod session;
mod painter;
mod layout;
mod game_state;

pub use session::{AutomatonSession, SessionConfig};
pub use painter::DragPainter;
pub use layout::GridLayout;
pub use game_state::GameState;
