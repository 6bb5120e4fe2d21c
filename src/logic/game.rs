use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, Coord, Player};
use crate::logic::rules::{legal_moves, validate_move, MoveError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// `None` means a drawn final count.
    Finished(Option<Player>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Dark,
            status: GameStatus::Playing,
        }
    }

    #[must_use]
    pub const fn from_parts(board: Board, turn: Player) -> Self {
        Self {
            board,
            turn,
            status: GameStatus::Playing,
        }
    }

    /// Plays a disc for the side to move. The turn passes to the opponent
    /// unless the opponent has no reply, in which case it stays; when
    /// neither side can move the game is over.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        let to = Coord::new(row, col).ok_or(MoveError::OutOfBounds)?;
        let mv = validate_move(&self.board, self.turn, to)?;
        self.board = self.board.apply(&mv, self.turn);
        self.advance_turn();
        Ok(mv)
    }

    fn advance_turn(&mut self) {
        let opponent = self.turn.opposite();
        if !legal_moves(&self.board, opponent).is_empty() {
            self.turn = opponent;
        } else if legal_moves(&self.board, self.turn).is_empty() {
            self.status = GameStatus::Finished(self.leader());
        }
        // Otherwise the opponent passes and the turn stays.
    }

    fn leader(&self) -> Option<Player> {
        let dark = self.board.count(Player::Dark);
        let light = self.board.count(Player::Light);
        match dark.cmp(&light) {
            Ordering::Greater => Some(Player::Dark),
            Ordering::Less => Some(Player::Light),
            Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.board, self.turn)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }
}
