//! Core engine for a 12x12 Reversi variant.
//!
//! `logic` holds the board model and the capture rules; `engine` holds the
//! heuristic evaluator and the alpha-beta searcher built on top of them.

pub mod engine;
pub mod logic;
