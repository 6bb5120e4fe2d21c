use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::{Board, Coord, Player, BOARD_SIZE, DIRECTIONS};
use crate::logic::rules::legal_moves;
use std::sync::Arc;

const LAST: usize = BOARD_SIZE - 1;

/// Weighted-feature static evaluator: piece difference, corner and edge
/// control, mobility and potential mobility, each scored as a
/// perspective-minus-opponent difference and combined with the configured
/// weights.
pub struct HeuristicEvaluator {
    config: Arc<EngineConfig>,
}

impl HeuristicEvaluator {
    #[must_use]
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, board: &Board, perspective: Player) -> f64 {
        let config = &self.config;
        // Stability is a declared feature that always scores 0 for now;
        // the term stays so the weight layout keeps its shape.
        let stability = 0.0;

        config.weight_board_control * board_control(board, perspective)
            + config.weight_corner_control * corner_control(board, perspective)
            + config.weight_edge_control * edge_control(board, perspective)
            + config.weight_stability * stability
            + config.weight_mobility * mobility(board, perspective)
            + config.weight_potential_mobility * potential_mobility(board, perspective)
    }
}

fn signed_presence(board: &Board, at: Coord, perspective: Player) -> f64 {
    match board.get(at) {
        Some(piece) if piece == perspective => 1.0,
        Some(_) => -1.0,
        None => 0.0,
    }
}

#[allow(clippy::cast_precision_loss)]
fn board_control(board: &Board, perspective: Player) -> f64 {
    board.count(perspective) as f64 - board.count(perspective.opposite()) as f64
}

fn corner_control(board: &Board, perspective: Player) -> f64 {
    let mut score = 0.0;
    for (row, col) in [(0, 0), (0, LAST), (LAST, 0), (LAST, LAST)] {
        if let Some(at) = Coord::new(row, col) {
            score += signed_presence(board, at, perspective);
        }
    }
    score
}

/// Border cells excluding the four corners, so corner control is not
/// counted twice.
fn edge_control(board: &Board, perspective: Player) -> f64 {
    let mut score = 0.0;
    for i in 1..LAST {
        for (row, col) in [(i, 0), (i, LAST), (0, i), (LAST, i)] {
            if let Some(at) = Coord::new(row, col) {
                score += signed_presence(board, at, perspective);
            }
        }
    }
    score
}

#[allow(clippy::cast_precision_loss)]
fn mobility(board: &Board, perspective: Player) -> f64 {
    let mine = legal_moves(board, perspective).len();
    let theirs = legal_moves(board, perspective.opposite()).len();
    mine as f64 - theirs as f64
}

#[allow(clippy::cast_precision_loss)]
fn potential_mobility(board: &Board, perspective: Player) -> f64 {
    frontier(board, perspective) as f64 - frontier(board, perspective.opposite()) as f64
}

/// Counts empty cells adjacent to at least one `side` piece. Each empty
/// cell counts once for the side, however many neighbours it touches.
fn frontier(board: &Board, side: Player) -> usize {
    Board::coords()
        .filter(|&at| board.get(at).is_none())
        .filter(|&at| {
            DIRECTIONS
                .iter()
                .any(|&(dr, dc)| at.offset(dr, dc).is_some_and(|next| board.get(next) == Some(side)))
        })
        .count()
}
