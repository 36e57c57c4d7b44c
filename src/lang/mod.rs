//! English-language tables: piece names, grammar templates and numbers.

pub mod grammar;
pub mod info;
pub mod names;
pub mod numbers;

pub use grammar::{GrammarTable, MoveKind, SlotValues, Template};
pub use info::LanguageInfo;
pub use names::NameTable;
pub use numbers::int_to_english;
