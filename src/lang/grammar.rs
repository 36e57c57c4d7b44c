//! Grammar templates loaded from `piece_logics.csv`.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::moves::{Direction, PieceKind, Side};

/// Manner of movement, the grammar table's Move_type key.
///
/// The capture keys carry the literal `[N]` marker the table has always
/// used for the captured piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Moves,
    MovesDiagonally,
    CapturesByMoving,
    CapturesByMovingDiagonally,
}

impl MoveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::Moves => "moves",
            MoveKind::MovesDiagonally => "moves diagonally",
            MoveKind::CapturesByMoving => "captures piece [N] by moving",
            MoveKind::CapturesByMovingDiagonally => "captures piece [N] by moving diagonally",
        }
    }

    pub fn parse(name: &str) -> Option<MoveKind> {
        match name {
            "moves" => Some(MoveKind::Moves),
            "moves diagonally" => Some(MoveKind::MovesDiagonally),
            "captures piece [N] by moving" => Some(MoveKind::CapturesByMoving),
            "captures piece [N] by moving diagonally" => {
                Some(MoveKind::CapturesByMovingDiagonally)
            }
            _ => None,
        }
    }

    pub fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::CapturesByMoving | MoveKind::CapturesByMovingDiagonally
        )
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named values a template can splice in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Square the piece moves from, in algebraic notation.
    Start,
    /// Squares travelled along the primary direction.
    Distance,
    /// Sideways squares of a knight move.
    SecondDistance,
    /// Lower-case word for the captured piece.
    Captured,
}

impl Slot {
    fn parse(name: &str) -> Option<Slot> {
        match name {
            "start" => Some(Slot::Start),
            "distance" => Some(Slot::Distance),
            "distance2" => Some(Slot::SecondDistance),
            "captured" => Some(Slot::Captured),
            _ => None,
        }
    }
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// Values filled into a template's slots when a move is narrated.
#[derive(Debug, Clone, Copy)]
pub struct SlotValues<'a> {
    /// Start square in algebraic notation.
    pub start: &'a str,
    /// Squares travelled along the primary direction.
    pub distance: u8,
    /// Sideways squares for knight moves, `None` for every other piece.
    pub second_distance: Option<u8>,
    /// Word for the captured piece, `None` when the end square was empty.
    pub captured: Option<&'a str>,
}

/// A sentence template with `{slot}` markers.
///
/// `White Pawn at {start} moves {distance} forwards` renders to
/// `White Pawn at e2 moves 2 squares forwards`.
#[derive(Debug, Clone)]
pub struct Template {
    raw: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses the `{slot}` markers out of raw template text.
    pub fn parse(raw: &str) -> Result<Template> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(Error::MalformedTemplate {
                                    template: raw.to_string(),
                                    reason: "unterminated slot marker".to_string(),
                                })
                            }
                        }
                    }
                    let slot = Slot::parse(&name).ok_or_else(|| Error::MalformedTemplate {
                        template: raw.to_string(),
                        reason: format!("unknown slot '{{{}}}'", name),
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(slot));
                }
                '}' => {
                    return Err(Error::MalformedTemplate {
                        template: raw.to_string(),
                        reason: "stray '}'".to_string(),
                    })
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Template {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Raw template text as written in the table.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True if the template splices in the second, sideways distance.
    pub fn wants_second_distance(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Slot(Slot::SecondDistance)))
    }

    /// Fills every slot and returns the finished sentence.
    pub fn render(&self, values: &SlotValues) -> Result<String> {
        let mut sentence = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => sentence.push_str(text),
                Segment::Slot(Slot::Start) => sentence.push_str(values.start),
                Segment::Slot(Slot::Distance) => {
                    sentence.push_str(&distance_phrase(values.distance))
                }
                Segment::Slot(Slot::SecondDistance) => {
                    let distance =
                        values
                            .second_distance
                            .ok_or_else(|| Error::MalformedTemplate {
                                template: self.raw.clone(),
                                reason: "template wants a second distance but the move has none"
                                    .to_string(),
                            })?;
                    sentence.push_str(&distance_phrase(distance));
                }
                Segment::Slot(Slot::Captured) => {
                    sentence.push_str(values.captured.unwrap_or("piece"))
                }
            }
        }
        Ok(sentence)
    }
}

/// Spells a distance with its unit, "1 square" or "3 squares".
fn distance_phrase(distance: u8) -> String {
    if distance == 1 {
        "1 square".to_string()
    } else {
        format!("{} squares", distance)
    }
}

/// One row of `piece_logics.csv` as written on disk.
#[derive(Debug, Deserialize)]
struct GrammarRow {
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "Piece")]
    piece: String,
    #[serde(rename = "Move_dir")]
    move_dir: String,
    #[serde(rename = "Move_type")]
    move_type: String,
    #[serde(rename = "Language")]
    language: String,
}

/// ## Grammar Table
///
/// Sentence templates keyed by player, piece, direction of travel and
/// manner of movement. Pieces do not carry every manner: the pawn has no
/// capture row without a sideways direction, and the bishop only knows the
/// diagonal manners, which is what the narrator's fallback lookup leans on.
#[derive(Debug, Clone)]
pub struct GrammarTable {
    templates: HashMap<(Side, PieceKind, Direction, MoveKind), Template>,
}

impl GrammarTable {
    /// Parses the grammar CSV, validating every key and template.
    pub fn from_csv(data: &str) -> Result<GrammarTable> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let mut templates = HashMap::new();
        for row in reader.deserialize() {
            let row: GrammarRow = row?;
            let side = Side::parse(&row.player)
                .ok_or_else(|| invalid_grammar(format!("unknown player '{}'", row.player)))?;
            let piece = PieceKind::parse(&row.piece)
                .ok_or_else(|| invalid_grammar(format!("unknown piece '{}'", row.piece)))?;
            let direction = Direction::parse(&row.move_dir)
                .ok_or_else(|| invalid_grammar(format!("unknown direction '{}'", row.move_dir)))?;
            let kind = MoveKind::parse(&row.move_type)
                .ok_or_else(|| invalid_grammar(format!("unknown move type '{}'", row.move_type)))?;
            let template = Template::parse(&row.language)?;
            if piece == PieceKind::Knight && !template.wants_second_distance() {
                return Err(invalid_grammar(format!(
                    "knight template '{}' has no second distance slot",
                    row.language
                )));
            }
            if piece != PieceKind::Knight && template.wants_second_distance() {
                return Err(invalid_grammar(format!(
                    "template '{}' takes a second distance but is not a knight row",
                    row.language
                )));
            }
            if templates
                .insert((side, piece, direction, kind), template)
                .is_some()
            {
                return Err(invalid_grammar(format!(
                    "duplicate row for {} {} moving {} ({})",
                    side, piece, direction, kind
                )));
            }
        }
        if templates.is_empty() {
            return Err(invalid_grammar("no rows".to_string()));
        }
        Ok(GrammarTable { templates })
    }

    /// Template for one movement description, when the table has it.
    pub fn get(
        &self,
        side: Side,
        piece: PieceKind,
        direction: Direction,
        kind: MoveKind,
    ) -> Option<&Template> {
        self.templates.get(&(side, piece, direction, kind))
    }

    /// Number of templates loaded.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterates every key the table holds.
    pub fn keys(&self) -> impl Iterator<Item = &(Side, PieceKind, Direction, MoveKind)> {
        self.templates.keys()
    }
}

fn invalid_grammar(reason: String) -> Error {
    Error::InvalidTable {
        table: "grammar",
        reason,
    }
}
