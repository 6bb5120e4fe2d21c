use crate::logic::board::{Board, Coord, Player};
use crate::logic::game::GameState;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod move_list;
pub mod search;

/// A disc placement together with the opponent cells it flips. Only
/// meaningful for the `(board, mover)` pair it was generated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub to: Coord,
    pub flips: Vec<Coord>,
}

impl Move {
    /// Text form of the destination: column letter plus 1-indexed row,
    /// `a1` being the top-left corner.
    #[must_use]
    pub fn notation(&self) -> String {
        let col = u8::try_from(self.to.col)
            .ok()
            .and_then(|c| c.checked_add(b'a'))
            .map_or('?', char::from);
        format!("{col}{}", self.to.row + 1)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SearchLimit {
    /// Fixed search depth in plies.
    Depth(u8),
    /// Remaining time budget in seconds, mapped to a depth before the
    /// search starts. The budget is not enforced while searching.
    Time(f32),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
}

/// Outcome of a search. `best_move` is `None` only when the side to move
/// has no legal move at the root; `score` then falls back to the static
/// evaluation of the root board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

pub trait Evaluator {
    fn evaluate(&self, board: &Board, perspective: Player) -> f64;
}

pub trait Searcher {
    fn search(&mut self, state: &GameState, limit: SearchLimit) -> SearchResult;
}
