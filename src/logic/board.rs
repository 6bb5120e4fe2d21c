use crate::engine::Move;
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use std::fmt;

pub const BOARD_SIZE: usize = 12;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The 8 neighbour offsets, in fixed scan order.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidBoardDimensions { rows: usize, cols: usize },
    InvalidCellValue(char),
    InvalidPlayerSymbol(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Dark => 'X',
            Self::Light => 'O',
        }
    }

    pub const fn from_symbol(symbol: char) -> Result<Self, BoardError> {
        match symbol {
            'X' => Ok(Self::Dark),
            'O' => Ok(Self::Light),
            other => Err(BoardError::InvalidPlayerSymbol(other)),
        }
    }
}

/// A bounds-checked board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Steps one cell along a direction, `None` past the board edge.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = offset_component(self.row, dr)?;
        let col = offset_component(self.col, dc)?;
        Self::new(row, col)
    }
}

fn offset_component(base: usize, delta: i32) -> Option<usize> {
    let base = i32::try_from(base).ok()?;
    let shifted = base.checked_add(delta)?;
    usize::try_from(shifted).ok()
}

/// Progress of a game, measured by how much of the board is still empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

/// A 12x12 grid of discs with value semantics: every transformation
/// produces a fresh board and the input is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "BigArray")]
    grid: [Option<Player>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening position: two diagonal pairs in the centre.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        let mid = BOARD_SIZE / 2;
        board.set_at(mid - 1, mid - 1, Some(Player::Light));
        board.set_at(mid - 1, mid, Some(Player::Dark));
        board.set_at(mid, mid - 1, Some(Player::Dark));
        board.set_at(mid, mid, Some(Player::Light));
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            grid: [None; CELL_COUNT],
        }
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Player> {
        self.grid.get(at.index()).copied().flatten()
    }

    pub fn set(&mut self, at: Coord, piece: Option<Player>) {
        if let Some(slot) = self.grid.get_mut(at.index()) {
            *slot = piece;
        }
    }

    fn set_at(&mut self, row: usize, col: usize, piece: Option<Player>) {
        if let Some(at) = Coord::new(row, col) {
            self.set(at, piece);
        }
    }

    /// All coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).filter_map(move |col| Coord::new(row, col)))
    }

    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.grid.iter().filter(|&&cell| cell == Some(player)).count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_none()).count()
    }

    /// Early above 75% empty, Late at or below 25% empty, Mid between.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        let empty = self.empty_count();
        if empty * 4 > CELL_COUNT * 3 {
            GamePhase::Early
        } else if empty * 4 > CELL_COUNT {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }

    /// Places `mover` on the destination and turns every captured cell over
    /// to `mover`, on a fresh board. The capture set is taken at face value;
    /// callers are expected to pass moves generated against this board.
    #[must_use]
    pub fn apply(&self, mv: &Move, mover: Player) -> Self {
        let mut next = self.clone();
        next.set(mv.to, Some(mover));
        for &flip in &mv.flips {
            next.set(flip, Some(mover));
        }
        next
    }

    /// Parses the 12-line text form: one row per line, `.`/`X`/`O` cells.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text.lines().map(str::trim_end).collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::InvalidBoardDimensions {
                rows: rows.len(),
                cols: BOARD_SIZE,
            });
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cols = line.chars().count();
            if cols != BOARD_SIZE {
                return Err(BoardError::InvalidBoardDimensions {
                    rows: rows.len(),
                    cols,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = if symbol == '.' {
                    None
                } else {
                    match Player::from_symbol(symbol) {
                        Ok(player) => Some(player),
                        Err(_) => return Err(BoardError::InvalidCellValue(symbol)),
                    }
                };
                board.set_at(row, col, cell);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = Coord::new(row, col)
                    .and_then(|at| self.get(at))
                    .map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
