//! Core Connect Four logic: the board engine that applies drops and detects
//! wins, and the move sequencer that replays recorded move tokens.

mod board;
mod moves;
mod observer;
mod player;
mod sequencer;
mod state;

pub use board::{column_letter, Board, Cell, COLS, COMBO_LENGTH, ROWS};
pub use moves::{parse_move, Move};
pub use observer::{Observer, ObserverId, Observers};
pub use player::{Player, UnknownPlayer};
pub use sequencer::MoveSequencer;
pub use state::GameState;
