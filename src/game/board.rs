use std::fmt;

use super::moves::{ValidMoves, MAX_COLS};
use super::{Outcome, Player};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Signed cell value: `0` empty, `+1` Red, `-1` Yellow.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Yellow => -1,
        }
    }

    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn flipped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Red => Cell::Yellow,
            Cell::Yellow => Cell::Red,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'X',
            Cell::Yellow => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Red),
            'O' | 'o' => Some(Cell::Yellow),
            _ => None,
        }
    }
}

/// Row/column steps of the four line families: horizontal, vertical, and
/// the two diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A Connect Four position of configurable size.
///
/// Row 0 is the top of the board; pieces settle at the highest free row
/// index of their column, so a column never has a gap below a piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize, win_length: usize) -> Self {
        debug_assert!(width <= MAX_COLS, "boards are limited to {MAX_COLS} columns");
        Board {
            height,
            width,
            win_length,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of contiguous pieces needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Side to move, derived from piece parity. Only meaningful for boards
    /// in absolute (non-canonical) form, where Red always moves first.
    pub fn player_to_move(&self) -> Player {
        if self.piece_count() % 2 == 0 {
            Player::Red
        } else {
            Player::Yellow
        }
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Columns whose top cell is still empty.
    pub fn valid_moves(&self) -> ValidMoves {
        let mut moves = ValidMoves::empty(self.width);
        for col in (0..self.width).filter(|&col| !self.is_column_full(col)) {
            moves.insert(col);
        }
        moves
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        if col >= self.width {
            return Err(GameError::IllegalMove {
                column: col,
                width: self.width,
            });
        }

        // Find the lowest empty row in this column
        let row = (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(GameError::ColumnFull { column: col })?;
        self.cells[row * self.width + col] = cell;
        Ok(row)
    }

    /// Copy of this board with `player`'s piece dropped into `col`. The
    /// receiver is left untouched.
    pub fn with_move(&self, player: Player, col: usize) -> Result<Board, GameError> {
        let mut next = self.clone();
        next.drop_piece(col, player.to_cell())?;
        Ok(next)
    }

    /// Every run of `win_length` contiguous cells along rows, columns and
    /// both diagonals.
    pub fn windows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        DIRECTIONS.iter().flat_map(move |&(dr, dc)| {
            (0..self.height).flat_map(move |row| {
                (0..self.width).filter_map(move |col| self.window_at(row, col, dr, dc))
            })
        })
    }

    fn window_at(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Vec<Cell>> {
        let span = self.win_length as isize - 1;
        let end_row = row as isize + dr * span;
        let end_col = col as isize + dc * span;
        if end_row < 0 || end_row >= self.height as isize || end_col >= self.width as isize {
            return None;
        }
        let window = (0..self.win_length as isize)
            .map(|i| self.get((row as isize + dr * i) as usize, (col as isize + dc * i) as usize))
            .collect();
        Some(window)
    }

    /// Scan all four line families for a winning run, then check for a
    /// full board.
    pub fn win_state(&self) -> Outcome {
        for window in self.windows() {
            let first = window[0];
            if let Some(player) = first.player() {
                if window.iter().all(|&cell| cell == first) {
                    return Outcome::Win(player);
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// The board as seen by `player`: their pieces become Red (`+1`).
    pub fn canonical(&self, player: Player) -> Board {
        match player {
            Player::Red => self.clone(),
            Player::Yellow => Board {
                cells: self.cells.iter().map(|cell| cell.flipped()).collect(),
                ..self.clone()
            },
        }
    }

    /// Left-right mirror image of this board.
    pub fn mirrored(&self) -> Board {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.cells.chunks(self.width) {
            cells.extend(row.iter().rev());
        }
        Board { cells, ..self.clone() }
    }

    /// Parse the text form produced by `Display`: one line per row, top row
    /// first, with `.`, `X` and `O` cells. Whitespace inside a row is ignored.
    pub fn parse(text: &str, win_length: usize) -> Result<Board, GameError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Cell::from_symbol(c)
                        .ok_or_else(|| GameError::InvalidBoard(format!("unknown cell symbol '{c}'")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GameError::InvalidBoard("board is empty".into()));
        }
        if win_length == 0 {
            return Err(GameError::InvalidBoard("win length must be at least 1".into()));
        }
        if width > MAX_COLS {
            return Err(GameError::InvalidBoard(format!(
                "board has {width} columns, at most {MAX_COLS} are supported"
            )));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != width) {
            return Err(GameError::InvalidBoard(format!(
                "row {bad} has {} cells, expected {width}",
                rows[bad].len()
            )));
        }

        let board = Board {
            height,
            width,
            win_length,
            cells: rows.into_iter().flatten().collect(),
        };

        for col in 0..width {
            let first_piece = (0..height).find(|&row| board.get(row, col) != Cell::Empty);
            if let Some(top) = first_piece {
                if (top..height).any(|row| board.get(row, col) == Cell::Empty) {
                    return Err(GameError::InvalidBoard(format!(
                        "column {col} has an empty cell below a piece"
                    )));
                }
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
