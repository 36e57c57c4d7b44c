//! Loading the language tables from disk or from the bundled copies.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::lang::grammar::GrammarTable;
use crate::lang::names::NameTable;

/// File name of the piece name table inside a table directory.
pub const NAMES_FILE: &str = "piece_names.json";
/// File name of the grammar table inside a table directory.
pub const GRAMMAR_FILE: &str = "piece_logics.csv";

/// The two language tables the narrators draw from.
#[derive(Debug, Clone)]
pub struct LanguageInfo {
    pub names: NameTable,
    pub grammar: GrammarTable,
}

impl LanguageInfo {
    /// Loads the table copies compiled into the binary.
    pub fn builtin() -> Result<LanguageInfo> {
        let names = NameTable::from_json(include_str!("../../language_info/piece_names.json"))?;
        let grammar = GrammarTable::from_csv(include_str!("../../language_info/piece_logics.csv"))?;
        Ok(LanguageInfo { names, grammar })
    }

    /// Loads both tables from a directory, checking each file exists
    /// before reading it.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<LanguageInfo> {
        let dir = dir.as_ref();
        let names_path = dir.join(NAMES_FILE);
        let grammar_path = dir.join(GRAMMAR_FILE);

        if !names_path.exists() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Name table not found: {}", names_path.display()),
            )));
        }
        if !grammar_path.exists() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Grammar table not found: {}", grammar_path.display()),
            )));
        }

        let names = NameTable::from_json(&fs::read_to_string(&names_path)?)?;
        let grammar = GrammarTable::from_csv(&fs::read_to_string(&grammar_path)?)?;
        Ok(LanguageInfo { names, grammar })
    }
}
