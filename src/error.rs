//! Error type shared by every narration stage.

use crate::lang::grammar::MoveKind;
use crate::moves::{Direction, PieceKind, Side, Square};

/// Everything that can go wrong while loading tables or narrating.
///
/// None of these are recoverable for the request that raised them: the
/// caller gets the error instead of a partial or fabricated sentence.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A FEN symbol with no entry in the piece name table.
    #[error("no piece name recorded for symbol '{0}'")]
    UnknownSymbol(char),

    /// A starting square with no entry in the home name table.
    #[error("no home name recorded for square {0}")]
    MissingHomeName(Square),

    /// The grammar table has no row for this movement description.
    #[error("no template for {side} {piece} moving {direction} ({move_kind})")]
    MissingTemplate {
        side: Side,
        piece: PieceKind,
        direction: Direction,
        move_kind: MoveKind,
    },

    /// A move whose start and end square are the same.
    #[error("move {0} does not leave its starting square")]
    NullMove(String),

    /// A move that starts on a square the position leaves empty.
    #[error("move {code} starts on empty square {square} in position '{position}'")]
    EmptyStartSquare {
        code: String,
        square: Square,
        position: String,
    },

    /// A position string the FEN parser rejected.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A coordinate move code that does not name two squares.
    #[error("invalid move code '{code}': {reason}")]
    InvalidMove { code: String, reason: String },

    /// A language table that fails validation on load.
    #[error("invalid {table} table: {reason}")]
    InvalidTable {
        table: &'static str,
        reason: String,
    },

    /// A template whose slot markers cannot be parsed or filled.
    #[error("malformed template '{template}': {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// Numbers below zero cannot be spelled out.
    #[error("cannot spell a negative number: {0}")]
    NegativeNumber(i64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
