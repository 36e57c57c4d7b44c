//! Narrates chess positions and coordinate moves as English sentences.
//!
//! A FEN position becomes a square-by-square description using traditional
//! descriptive names ("White Queen's Knight"), and a coordinate move such
//! as `e2e4` becomes both a positional phrase ("White King's Pawn from e2
//! to e4") and a grammatical sentence ("White Pawn at e2 moves 2 squares
//! forwards"). The same inputs always narrate to the same words.

pub mod actions;
pub mod error;
pub mod lang;
pub mod moves;
pub mod narrate;

pub use error::{Error, Result};
pub use lang::{int_to_english, GrammarTable, LanguageInfo, MoveKind, NameTable, SlotValues};
pub use moves::{CoordMove, Direction, PieceKind, Side, Square};
pub use narrate::{ActionNarrator, BoardNarration, BoardNarrator, MoveNarration, NamedPiece};
