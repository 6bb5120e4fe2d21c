use crate::engine::Move;
use crate::logic::board::Coord;

/// The legal moves of one `(board, mover)` pair, in generation order.
/// Every contained move carries a non-empty capture set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn push(&mut self, mv: Move) {
        debug_assert!(!mv.flips.is_empty(), "a legal move must capture");
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Looks up the move landing on `to`, if that destination is legal.
    #[must_use]
    pub fn find(&self, to: Coord) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.to == to)
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
