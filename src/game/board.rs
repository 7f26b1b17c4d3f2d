use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of adjacent markers needed to win.
pub const COMBO_LENGTH: usize = 4;

/// Scan directions as (row step, column step). Each is walked on its own.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// One-character encoding used for grid snapshots.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Letter identifying a column in move tokens (`0` is `A`).
pub fn column_letter(col: usize) -> char {
    if col < COLS {
        (b'A' + col as u8) as char
    } else {
        '?'
    }
}

/// The 6x7 grid together with the fill height of every column.
///
/// Row 0 is the bottom row. Pieces in a column always occupy rows
/// `0..heights[col]` with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Get the cell at a specific position
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of pieces in a column
    ///
    /// Panics if `col >= COLS`.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || self.heights[col] == ROWS
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Total number of pieces on the board
    pub fn move_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Drop a piece for `cell` into `col`.
    ///
    /// Returns `true` when the placed piece completes a line of
    /// [`COMBO_LENGTH`] for its owner.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<bool, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.heights[col] == ROWS {
            return Err(MoveError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.cells[row][col] = cell;
        self.heights[col] += 1;

        Ok(self.check_win(row, col))
    }

    /// Check whether the piece at (row, col) starts a run of [`COMBO_LENGTH`]
    /// in any single direction.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(row, col, dr, dc, cell) == COMBO_LENGTH)
    }

    /// Count matching cells from (row, col) along one direction, capped at
    /// [`COMBO_LENGTH`].
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 1; // the placed piece itself
        for step in 1..COMBO_LENGTH as isize {
            let r = row as isize + step * dr;
            let c = col as isize + step * dc;
            if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
                break;
            }
            if self.cells[r as usize][c as usize] != cell {
                break;
            }
            count += 1;
        }
        count
    }

    /// One string per row, top row first, using [`Cell::symbol`].
    pub fn rows(&self) -> Vec<String> {
        (0..ROWS)
            .rev()
            .map(|row| self.cells[row].iter().map(|c| c.symbol()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_drop_piece_fills_from_bottom() {
        let mut board = Board::new();

        assert_eq!(board.drop_piece(3, Cell::Red), Ok(false));
        assert_eq!(board.get(0, 3), Cell::Red);
        assert_eq!(board.height(3), 1);

        assert_eq!(board.drop_piece(3, Cell::Yellow), Ok(false));
        assert_eq!(board.get(1, 3), Cell::Yellow);
        assert_eq!(board.height(3), 2);
    }

    #[test]
    fn test_heights_match_filled_cells() {
        let mut board = Board::new();
        for (i, col) in [0, 0, 1, 4, 4, 4, 6].into_iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.drop_piece(col, cell).unwrap();
        }
        for col in 0..COLS {
            let filled = (0..ROWS)
                .filter(|&row| board.get(row, col) != Cell::Empty)
                .count();
            assert_eq!(board.height(col), filled);
            // no gaps below the top piece
            for row in 0..board.height(col) {
                assert_ne!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.move_count(), 7);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.drop_piece(0, cell).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.height(0), ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                let _ = board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.move_count(), ROWS * COLS);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..3 {
            assert!(!board.drop_piece(col, Cell::Red).unwrap());
        }
        assert!(board.drop_piece(3, Cell::Red).unwrap());
    }

    #[test]
    fn test_run_must_extend_from_placed_piece() {
        let mut board = Board::new();
        // R R _ R: filling the gap leaves runs of 3 and 2 from the new piece
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        assert!(!board.drop_piece(2, Cell::Red).unwrap());

        // extending the outer end does complete a line
        assert!(board.drop_piece(4, Cell::Red).unwrap());
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..3 {
            assert!(!board.drop_piece(3, Cell::Yellow).unwrap());
        }
        assert!(board.drop_piece(3, Cell::Yellow).unwrap());
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert!(board.drop_piece(3, Cell::Red).unwrap());
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert!(board.drop_piece(3, Cell::Red).unwrap());
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.check_win(0, 1));
        assert!(!board.check_win(0, 2));
    }

    #[test]
    fn test_opponent_piece_breaks_run() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        assert!(!board.drop_piece(4, Cell::Red).unwrap());
    }

    #[test]
    fn test_check_win_is_repeatable() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(5, Cell::Yellow).unwrap();
        }
        let first = board.check_win(3, 5);
        let second = board.check_win(3, 5);
        assert!(first);
        assert_eq!(first, second);
        assert!(!board.check_win(0, 0));
        assert!(!board.check_win(0, 0));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!board.check_win(0, 0));
    }

    #[test]
    fn test_rows_snapshot() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(6, Cell::Yellow).unwrap();

        let rows = board.rows();
        assert_eq!(rows.len(), ROWS);
        assert_eq!(rows[ROWS - 1], "R     Y");
        assert_eq!(rows[0], "       ");
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        Board::new().get(ROWS, 0);
    }

    #[test]
    #[should_panic]
    fn test_height_out_of_range_panics() {
        Board::new().height(COLS);
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), 'A');
        assert_eq!(column_letter(6), 'G');
        assert_eq!(column_letter(7), '?');
    }
}
