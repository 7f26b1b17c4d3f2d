use std::io::{self, Write};

use crate::game::{column_letter, Board, Cell, GameState, Move, Observer, COLS, ROWS};

/// Console rendering options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Print the grid on every notification, not just the final outcome.
    pub show_board: bool,
    pub red_symbol: char,
    pub yellow_symbol: char,
    pub empty_symbol: char,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            show_board: false,
            red_symbol: 'R',
            yellow_symbol: 'Y',
            empty_symbol: '.',
        }
    }
}

impl ViewConfig {
    fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty_symbol,
            Cell::Red => self.red_symbol,
            Cell::Yellow => self.yellow_symbol,
        }
    }
}

/// Render the grid top row first, followed by the column letters.
pub fn render_board(board: &Board, config: &ViewConfig) -> String {
    let mut out = String::new();
    for row in (0..ROWS).rev() {
        out.push('|');
        for col in 0..COLS {
            out.push(config.symbol(board.get(row, col)));
            out.push('|');
        }
        out.push('\n');
    }
    out.push(' ');
    for col in 0..COLS {
        out.push(column_letter(col));
        out.push(' ');
    }
    out.push('\n');
    out
}

/// Observer that writes the game to a console-like sink.
///
/// Terminal states are always printed by name; `Ongoing` prints nothing unless
/// `show_board` is set.
pub struct ConsoleView<W: Write = io::Stdout> {
    out: W,
    config: ViewConfig,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout(config: ViewConfig) -> Self {
        ConsoleView::new(io::stdout(), config)
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, config: ViewConfig) -> Self {
        ConsoleView { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_update(
        &mut self,
        last_move: Option<Move>,
        board: &Board,
        state: GameState,
    ) -> io::Result<()> {
        if self.config.show_board {
            if let Some(mv) = last_move {
                writeln!(self.out, "{} -> {}", mv.player, column_letter(mv.column))?;
            }
            write!(self.out, "{}", render_board(board, &self.config))?;
        }
        if state.is_terminal() {
            writeln!(self.out, "{state}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Observer for ConsoleView<W> {
    fn notify(&mut self, last_move: Option<Move>, board: &Board, state: GameState) {
        if let Err(e) = self.write_update(last_move, board, state) {
            log::warn!("console view failed to write: {e}");
        }
    }
}
