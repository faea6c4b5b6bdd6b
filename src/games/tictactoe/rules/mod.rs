//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](super::Board). The game loop decides
//! the order they run in: a mark's win check always comes before the
//! draw check.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, has_won};
