//! Console output: an observer that prints the outcome of a replay and,
//! optionally, the grid after every move.

mod console_view;

pub use console_view::{render_board, ConsoleView, ViewConfig};
