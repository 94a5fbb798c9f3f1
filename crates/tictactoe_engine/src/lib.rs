//! Pure tic-tac-toe game logic.
//!
//! The engine owns nothing but rules: a caller creates a [`GameState`] through
//! an [`Engine`], threads it back into [`Engine::apply_move`] one index at a
//! time, and renders whatever the state reports. No I/O happens here.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, MoveClassification, Outcome, Player};
//!
//! let engine = Engine::new(3)?;
//! let mut state = engine.new_game();
//!
//! for index in [0, 3, 1, 4, 2] {
//!     let report = engine.apply_move(&mut state, index)?;
//!     assert_eq!(report.classification(), MoveClassification::Accepted);
//! }
//!
//! assert_eq!(state.outcome(), Outcome::Win(Player::PlayerOne));
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
pub mod rules;
mod state;
mod types;

pub use action::{EngineError, MoveClassification, MoveReport};
pub use engine::Engine;
pub use rules::WinningLines;
pub use state::GameState;
pub use types::{
    Board, BoardSize, Cell, MAX_BOARD_SIZE, MAX_PADDING, MIN_BOARD_SIZE, Outcome, Player,
};
