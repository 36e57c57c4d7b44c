//! Piece naming tables loaded from `piece_names.json`.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::moves::{PieceKind, Side, Square};

/// Symbol standing for an empty square in board narrations.
pub const EMPTY_SYMBOL: char = '.';

/// On-disk layout of `piece_names.json`.
#[derive(Debug, Deserialize)]
struct NameFile {
    piece_names: HashMap<String, String>,
    home_names: HashMap<String, String>,
}

/// ## Name Table
///
/// Two lookups drive all piece naming:
///
/// - `piece_names` maps FEN symbols to flat names, "N" to "White Knight".
/// - `home_names` maps the 32 starting squares to traditional descriptive
///   names, "b1" to "White Queen's Knight" and "f2" to "White King
///   Bishop's Pawn".
///
/// A piece standing on the board is named by [`NameTable::descriptive_name`]:
/// pawns take the home name of whichever file they currently stand on, and
/// officers keep their home name only while standing on their own starting
/// square. Everything else falls back to the flat name.
#[derive(Debug, Clone)]
pub struct NameTable {
    by_symbol: HashMap<char, String>,
    by_home: HashMap<Square, String>,
}

impl NameTable {
    /// Parses the JSON name file and checks that every symbol and home
    /// square the narrators rely on is present.
    pub fn from_json(data: &str) -> Result<NameTable> {
        let file: NameFile = serde_json::from_str(data)?;

        let mut by_symbol = HashMap::new();
        for (key, name) in file.piece_names {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(symbol), None) => symbol,
                _ => {
                    return Err(Error::InvalidTable {
                        table: "piece name",
                        reason: format!("symbol key '{}' is not a single character", key),
                    })
                }
            };
            by_symbol.insert(symbol, name);
        }

        let mut by_home = HashMap::new();
        for (key, name) in file.home_names {
            let square = Square::from_algebraic(&key).ok_or_else(|| Error::InvalidTable {
                table: "piece name",
                reason: format!("home square key '{}' is not a board square", key),
            })?;
            by_home.insert(square, name);
        }

        let table = NameTable { by_symbol, by_home };
        table.check_complete()?;
        Ok(table)
    }

    fn check_complete(&self) -> Result<()> {
        for side in [Side::White, Side::Black] {
            for kind in PieceKind::ALL {
                let symbol = kind.symbol(side);
                if !self.by_symbol.contains_key(&symbol) {
                    return Err(Error::InvalidTable {
                        table: "piece name",
                        reason: format!("missing name for symbol '{}'", symbol),
                    });
                }
            }
            for file in 0..8 {
                for rank in [side.back_rank(), side.pawn_rank()] {
                    let square = Square::at(file, rank);
                    if !self.by_home.contains_key(&square) {
                        return Err(Error::InvalidTable {
                            table: "piece name",
                            reason: format!("missing home name for square {}", square),
                        });
                    }
                }
            }
        }
        if !self.by_symbol.contains_key(&EMPTY_SYMBOL) {
            return Err(Error::InvalidTable {
                table: "piece name",
                reason: format!("missing name for symbol '{}'", EMPTY_SYMBOL),
            });
        }
        Ok(())
    }

    /// Flat name for a FEN symbol.
    pub fn base_name(&self, symbol: char) -> Result<&str> {
        self.by_symbol
            .get(&symbol)
            .map(String::as_str)
            .ok_or(Error::UnknownSymbol(symbol))
    }

    /// Descriptive name of the piece that starts the game on `square`.
    pub fn home_name(&self, square: Square) -> Result<&str> {
        self.by_home
            .get(&square)
            .map(String::as_str)
            .ok_or(Error::MissingHomeName(square))
    }

    /// Spoken name for a piece of `kind` standing on `square`.
    ///
    /// A pawn is named after the file it stands on, so a pawn that has
    /// captured its way onto the d-file becomes the Queen's Pawn. Officers
    /// answer to their home name only on their own starting square; a
    /// knight on f3 is plain "White Knight".
    pub fn descriptive_name(&self, side: Side, kind: PieceKind, square: Square) -> Result<String> {
        if kind == PieceKind::Pawn {
            let home = Square::at(square.file(), side.pawn_rank());
            return Ok(self.home_name(home)?.to_string());
        }
        if square.rank() == side.back_rank() && PieceKind::for_home_file(square.file()) == Some(kind)
        {
            Ok(self.home_name(square)?.to_string())
        } else {
            Ok(self.base_name(kind.symbol(side))?.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NameTable {
        let data = include_str!("../../language_info/piece_names.json");
        NameTable::from_json(data).expect("bundled name table parses")
    }

    fn square(notation: &str) -> Square {
        Square::from_algebraic(notation).expect("test square is on the board")
    }

    #[test]
    fn test_base_names() {
        let table = table();
        assert_eq!(table.base_name('N').expect("N is named"), "White Knight");
        assert_eq!(table.base_name('p').expect("p is named"), "Black Pawn");
        assert_eq!(table.base_name('.').expect(". is named"), ".");
        assert!(matches!(
            table.base_name('x'),
            Err(Error::UnknownSymbol('x'))
        ));
    }

    #[test]
    fn test_home_names() {
        let table = table();
        assert_eq!(
            table.home_name(square("b1")).expect("b1 has a home name"),
            "White Queen's Knight"
        );
        assert_eq!(
            table.home_name(square("f2")).expect("f2 has a home name"),
            "White King Bishop's Pawn"
        );
        assert_eq!(
            table.home_name(square("d7")).expect("d7 has a home name"),
            "Black Queen's Pawn"
        );
        assert!(matches!(
            table.home_name(square("e4")),
            Err(Error::MissingHomeName(_))
        ));
    }

    #[test]
    fn test_pawns_are_named_after_their_file() {
        let table = table();
        let on_e4 = table
            .descriptive_name(Side::White, PieceKind::Pawn, square("e4"))
            .expect("pawn on e4 is named");
        assert_eq!(on_e4, "White King's Pawn");

        // Named after the file it stands on, not the file it came from.
        let on_d5 = table
            .descriptive_name(Side::White, PieceKind::Pawn, square("d5"))
            .expect("pawn on d5 is named");
        assert_eq!(on_d5, "White Queen's Pawn");

        let black_on_d2 = table
            .descriptive_name(Side::Black, PieceKind::Pawn, square("d2"))
            .expect("black pawn on d2 is named");
        assert_eq!(black_on_d2, "Black Queen's Pawn");
    }

    #[test]
    fn test_officers_keep_home_names_only_at_home() {
        let table = table();
        let at_home = table
            .descriptive_name(Side::White, PieceKind::Knight, square("g1"))
            .expect("knight on g1 is named");
        assert_eq!(at_home, "White King's Knight");

        let developed = table
            .descriptive_name(Side::White, PieceKind::Knight, square("f3"))
            .expect("knight on f3 is named");
        assert_eq!(developed, "White Knight");

        // Back rank, but the wrong kind for the square: a rook on f1 after
        // castling is not the King's Bishop.
        let castled_rook = table
            .descriptive_name(Side::White, PieceKind::Rook, square("f1"))
            .expect("rook on f1 is named");
        assert_eq!(castled_rook, "White Rook");

        let black_queen = table
            .descriptive_name(Side::Black, PieceKind::Queen, square("d8"))
            .expect("queen on d8 is named");
        assert_eq!(black_queen, "Black Queen");
    }

    #[test]
    fn test_incomplete_table_is_rejected() {
        let data = r#"{
            "piece_names": {"K": "White King"},
            "home_names": {"e1": "White King"}
        }"#;
        let err = NameTable::from_json(data).expect_err("missing entries are rejected");
        assert!(matches!(err, Error::InvalidTable { .. }));
    }

    #[test]
    fn test_bad_keys_are_rejected() {
        let data = r#"{
            "piece_names": {"KK": "White King"},
            "home_names": {}
        }"#;
        assert!(NameTable::from_json(data).is_err());

        let data = r#"{
            "piece_names": {},
            "home_names": {"z9": "nowhere"}
        }"#;
        assert!(NameTable::from_json(data).is_err());
    }
}
