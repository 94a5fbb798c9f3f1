//! Game rules for tic-tac-toe.
//!
//! Pure functions and tables for evaluating a board. Rules are kept apart
//! from the state they judge so invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::WinningLines;
