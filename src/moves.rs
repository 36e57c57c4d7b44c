//! Board coordinates, piece identities and coordinate move codes.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A board square, stored as a rank-major index (0-63 for a1-h8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Builds a square from a zero-based file (0 = a-file) and rank
    /// (0 = rank 1). Both must be below 8.
    pub fn at(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8, "file={}, rank={}", file, rank);
        Square(rank * 8 + file)
    }

    /// Parses algebraic notation such as `e4`.
    pub fn from_algebraic(notation: &str) -> Option<Square> {
        let bytes = notation.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        Square::from_ascii(bytes[0], bytes[1])
    }

    /// Builds a square from the ASCII file and rank characters of a move
    /// code (`b'e'`, `b'4'`).
    pub(crate) fn from_ascii(file: u8, rank: u8) -> Option<Square> {
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::at(file - b'a', rank - b'1'))
    }

    /// Square at the given rank-major index, if it is on the board.
    pub fn from_index(index: usize) -> Option<Square> {
        if index < Square::COUNT {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Zero-based file, 0 = the a-file.
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank, 0 = rank 1.
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Rank-major index, the order board narrations list squares in.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates every square in rank-major order, a1 through h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{}{}", file, rank)
    }
}

/// The two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Name used in sentences and as the grammar table's Player key.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }

    pub fn parse(name: &str) -> Option<Side> {
        match name {
            "White" => Some(Side::White),
            "Black" => Some(Side::Black),
            _ => None,
        }
    }

    /// Zero-based rank this side's pawns start on.
    pub fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Zero-based rank this side's officers start on.
    pub fn back_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Zero-based rank this side's pawns promote on.
    pub fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The six piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Capitalised name used as the grammar table's Piece key.
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Lower-case word used inside sentences ("promoted to a queen").
    pub fn word(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    pub fn parse(name: &str) -> Option<PieceKind> {
        match name {
            "Pawn" => Some(PieceKind::Pawn),
            "Knight" => Some(PieceKind::Knight),
            "Bishop" => Some(PieceKind::Bishop),
            "Rook" => Some(PieceKind::Rook),
            "Queen" => Some(PieceKind::Queen),
            "King" => Some(PieceKind::King),
            _ => None,
        }
    }

    /// FEN symbol for this kind on the given side.
    pub fn symbol(self, side: Side) -> char {
        let symbol = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match side {
            Side::White => symbol.to_ascii_uppercase(),
            Side::Black => symbol,
        }
    }

    /// Splits a FEN symbol into side and kind.
    pub fn from_symbol(symbol: char) -> Option<(Side, PieceKind)> {
        let side = if symbol.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((side, kind))
    }

    /// Parses the promotion letter of a coordinate move (the `q` in
    /// `e7e8q`). Either case is accepted; pawns are not a promotion choice.
    pub fn from_promotion_code(code: char) -> Option<PieceKind> {
        match code.to_ascii_lowercase() {
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Letter appended to a coordinate move for this promotion choice.
    pub fn promotion_code(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Rook => Some('r'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
        }
    }

    /// Officer kind that starts the game on the given zero-based file.
    pub fn for_home_file(file: u8) -> Option<PieceKind> {
        match file {
            0 | 7 => Some(PieceKind::Rook),
            1 | 6 => Some(PieceKind::Knight),
            2 | 5 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Queen),
            4 => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of travel seen from the moving side, as spoken in sentences
/// and keyed in the grammar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forwards,
    Backwards,
    Left,
    Right,
    ForwardsLeft,
    ForwardsRight,
    BackwardsLeft,
    BackwardsRight,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forwards => "forwards",
            Direction::Backwards => "backwards",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::ForwardsLeft => "forwards and left",
            Direction::ForwardsRight => "forwards and right",
            Direction::BackwardsLeft => "backwards and left",
            Direction::BackwardsRight => "backwards and right",
        }
    }

    pub fn parse(name: &str) -> Option<Direction> {
        match name {
            "forwards" => Some(Direction::Forwards),
            "backwards" => Some(Direction::Backwards),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "forwards and left" => Some(Direction::ForwardsLeft),
            "forwards and right" => Some(Direction::ForwardsRight),
            "backwards and left" => Some(Direction::BackwardsLeft),
            "backwards and right" => Some(Direction::BackwardsRight),
            _ => None,
        }
    }

    /// True for pure sideways travel, where distance counts files instead
    /// of ranks.
    pub fn is_lateral(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the direction carries a left or right component.
    pub fn has_side_component(self) -> bool {
        !matches!(self, Direction::Forwards | Direction::Backwards)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A coordinate move code such as `e2e4` or `e7e8q`.
///
/// The code names a start square, an end square and an optional promotion
/// choice. It says nothing about the piece moving or what it finds on the
/// end square; the narrator reads that from the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordMove {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

impl CoordMove {
    /// Parses a 4 or 5 character move code.
    pub fn parse(code: &str) -> Result<CoordMove> {
        let bytes = code.as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return Err(Error::InvalidMove {
                code: code.to_string(),
                reason: format!("expected 4 or 5 characters, got {}", bytes.len()),
            });
        }
        let start = Square::from_ascii(bytes[0], bytes[1]).ok_or_else(|| Error::InvalidMove {
            code: code.to_string(),
            reason: "start is not a board square".to_string(),
        })?;
        let end = Square::from_ascii(bytes[2], bytes[3]).ok_or_else(|| Error::InvalidMove {
            code: code.to_string(),
            reason: "end is not a board square".to_string(),
        })?;
        let promotion = match bytes.get(4) {
            Some(&letter) => {
                Some(PieceKind::from_promotion_code(letter as char).ok_or_else(|| {
                    Error::InvalidMove {
                        code: code.to_string(),
                        reason: format!("unknown promotion piece '{}'", letter as char),
                    }
                })?)
            }
            None => None,
        };
        Ok(CoordMove {
            start,
            end,
            promotion,
        })
    }
}

impl fmt::Display for CoordMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(letter) = self.promotion.and_then(PieceKind::promotion_code) {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for CoordMove {
    type Err = Error;

    fn from_str(code: &str) -> Result<CoordMove> {
        CoordMove::parse(code)
    }
}

impl From<chess::Color> for Side {
    fn from(color: chess::Color) -> Side {
        match color {
            chess::Color::White => Side::White,
            chess::Color::Black => Side::Black,
        }
    }
}

impl From<chess::Piece> for PieceKind {
    fn from(piece: chess::Piece) -> PieceKind {
        match piece {
            chess::Piece::Pawn => PieceKind::Pawn,
            chess::Piece::Knight => PieceKind::Knight,
            chess::Piece::Bishop => PieceKind::Bishop,
            chess::Piece::Rook => PieceKind::Rook,
            chess::Piece::Queen => PieceKind::Queen,
            chess::Piece::King => PieceKind::King,
        }
    }
}

impl From<chess::Square> for Square {
    fn from(square: chess::Square) -> Square {
        // chess::Square uses the same rank-major indexing.
        Square(square.to_index() as u8)
    }
}

impl From<Square> for chess::Square {
    fn from(square: Square) -> chess::Square {
        chess::Square::make_square(
            chess::Rank::from_index(square.rank() as usize),
            chess::File::from_index(square.file() as usize),
        )
    }
}
