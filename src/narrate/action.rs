//! Narrating one coordinate move as an English sentence.

use crate::error::{Error, Result};
use crate::lang::grammar::{GrammarTable, MoveKind, SlotValues, Template};
use crate::lang::info::LanguageInfo;
use crate::moves::{CoordMove, Direction, PieceKind, Side, Square};
use crate::narrate::board::BoardNarrator;
use crate::narrate::geometry;

/// Everything the narrator worked out about one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveNarration {
    pub side: Side,
    pub kind: PieceKind,
    /// Descriptive name of the moving piece, "White King's Pawn".
    pub piece_name: String,
    pub start: Square,
    pub end: Square,
    /// Kind found on the end square, `None` when it was empty.
    pub captured: Option<PieceKind>,
    /// Promotion choice actually applied, `None` for ordinary moves.
    pub promotion: Option<PieceKind>,
    /// Positional phrase, "White King's Pawn from e2 to e4".
    pub phrase: String,
    /// Grammatical sentence, "White Pawn at e2 moves 2 squares forwards".
    pub sentence: String,
}

impl MoveNarration {
    /// True when the move promoted a pawn. Promotions keep the phrase form
    /// for both spoken outputs.
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

/// ## Action Narrator
///
/// Builds both spoken forms of a coordinate move played from a FEN
/// position:
///
/// 1. the positional phrase, naming the piece and its squares, and
/// 2. the grammatical sentence, rendered from the grammar table using the
///    move's side-relative direction and distance.
///
/// Promotion moves skip the grammar stage; their phrase describes the
/// promotion and doubles as the sentence. The narrator reads the moving
/// piece off the narrated board and never checks move legality, so a rook
/// can be asked to travel like a knight and the answer only depends on the
/// grammar table having a row for that movement.
#[derive(Debug)]
pub struct ActionNarrator {
    grammar: GrammarTable,
    boards: BoardNarrator,
}

impl ActionNarrator {
    /// Creates a narrator over the given language tables.
    pub fn new(info: LanguageInfo) -> ActionNarrator {
        ActionNarrator {
            grammar: info.grammar,
            boards: BoardNarrator::new(info.names),
        }
    }

    /// Replaces the board cache with one holding at most `capacity`
    /// positions.
    pub fn with_cache_capacity(mut self, capacity: usize) -> ActionNarrator {
        let names = self.boards.names().clone();
        self.boards = BoardNarrator::new(names).with_cache_capacity(capacity);
        self
    }

    /// Board narrator used for position lookups.
    pub fn board(&self) -> &BoardNarrator {
        &self.boards
    }

    /// Grammar table the sentences come from.
    pub fn grammar(&self) -> &GrammarTable {
        &self.grammar
    }

    /// Narrates `action` as played from `fen`.
    ///
    /// The promotion letter of the move code is honoured only when the
    /// moving piece really is a pawn stepping onto its promotion rank;
    /// anywhere else the move narrates as an ordinary one.
    pub fn narrate(&self, fen: &str, action: CoordMove) -> Result<MoveNarration> {
        let board = self.boards.narrate(fen)?;
        let mover = board
            .piece_at(action.start)
            .ok_or_else(|| Error::EmptyStartSquare {
                code: action.to_string(),
                square: action.start,
                position: fen.to_string(),
            })?;
        let side = mover.side;
        let kind = mover.kind;
        let piece_name = mover.name.clone();
        let captured = board.piece_at(action.end).map(|piece| piece.kind);

        let promotion = match (kind, action.promotion) {
            (PieceKind::Pawn, Some(choice)) if action.end.rank() == side.promotion_rank() => {
                Some(choice)
            }
            _ => None,
        };

        if let Some(choice) = promotion {
            let phrase = if action.start.file() == action.end.file() {
                format!(
                    "{} at {} promoted to a {}",
                    piece_name,
                    action.start,
                    choice.word()
                )
            } else {
                format!(
                    "{} at {} captures a piece on {} and is promoted to a {}",
                    piece_name,
                    action.start,
                    action.end,
                    choice.word()
                )
            };
            return Ok(MoveNarration {
                side,
                kind,
                piece_name,
                start: action.start,
                end: action.end,
                captured,
                promotion,
                sentence: phrase.clone(),
                phrase,
            });
        }

        let phrase = format!("{} from {} to {}", piece_name, action.start, action.end);
        let (direction, distance) = geometry::resolve(side, action)?;
        let template = self.select_template(side, kind, direction, captured.is_some())?;
        let second_distance = if template.wants_second_distance() {
            Some(geometry::file_distance(action.start, action.end))
        } else {
            None
        };
        let start_text = action.start.to_string();
        let sentence = template.render(&SlotValues {
            start: &start_text,
            distance,
            second_distance,
            captured: captured.map(PieceKind::word),
        })?;

        Ok(MoveNarration {
            side,
            kind,
            piece_name,
            start: action.start,
            end: action.end,
            captured,
            promotion: None,
            phrase,
            sentence,
        })
    }

    /// Picks the template for a movement description.
    ///
    /// Pawns choose by geometry alone: forwards means a plain move, any
    /// sideways component means a diagonal capture, which is how an en
    /// passant capture of an empty square still reads as a capture. Every
    /// other piece tries the plain manner first and falls back to the
    /// diagonal one, since pieces like the bishop only carry diagonal
    /// rows.
    fn select_template(
        &self,
        side: Side,
        piece: PieceKind,
        direction: Direction,
        is_capture: bool,
    ) -> Result<&Template> {
        let (primary, fallback) = if piece == PieceKind::Pawn {
            if direction == Direction::Forwards {
                (MoveKind::Moves, None)
            } else if direction.has_side_component() {
                (MoveKind::CapturesByMovingDiagonally, None)
            } else {
                (MoveKind::Moves, None)
            }
        } else if is_capture {
            (
                MoveKind::CapturesByMoving,
                Some(MoveKind::CapturesByMovingDiagonally),
            )
        } else {
            (MoveKind::Moves, Some(MoveKind::MovesDiagonally))
        };

        if let Some(template) = self.grammar.get(side, piece, direction, primary) {
            return Ok(template);
        }
        if let Some(second) = fallback {
            if let Some(template) = self.grammar.get(side, piece, direction, second) {
                return Ok(template);
            }
        }
        Err(Error::MissingTemplate {
            side,
            piece,
            direction,
            move_kind: fallback.unwrap_or(primary),
        })
    }
}
