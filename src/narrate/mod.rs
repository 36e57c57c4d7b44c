//! Narrators for whole boards and single moves.

pub mod action;
pub mod board;
pub mod geometry;

pub use action::{ActionNarrator, MoveNarration};
pub use board::{BoardNarration, BoardNarrator, NamedPiece, DEFAULT_CACHE_CAPACITY};
