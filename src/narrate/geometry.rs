//! Side-relative geometry of a coordinate move.

use crate::error::{Error, Result};
use crate::moves::{CoordMove, Direction, Side, Square};

/// Works out the spoken direction and distance of a move as seen by the
/// side playing it.
///
/// White's forwards runs up the ranks and White's right runs up the files;
/// both flip for Black, so `e7e5` is two squares forwards for Black. The
/// distance counts ranks travelled, except for pure sideways moves where
/// it counts files. Knight moves land on a compound direction and report
/// their rank distance here; the file distance comes from
/// [`file_distance`].
pub fn resolve(side: Side, action: CoordMove) -> Result<(Direction, u8)> {
    let file_delta = action.end.file() as i8 - action.start.file() as i8;
    let rank_delta = action.end.rank() as i8 - action.start.rank() as i8;
    if file_delta == 0 && rank_delta == 0 {
        return Err(Error::NullMove(action.to_string()));
    }

    let (forward, right) = match side {
        Side::White => (rank_delta, file_delta),
        Side::Black => (-rank_delta, -file_delta),
    };

    let direction = if forward > 0 {
        if right > 0 {
            Direction::ForwardsRight
        } else if right < 0 {
            Direction::ForwardsLeft
        } else {
            Direction::Forwards
        }
    } else if forward < 0 {
        if right > 0 {
            Direction::BackwardsRight
        } else if right < 0 {
            Direction::BackwardsLeft
        } else {
            Direction::Backwards
        }
    } else if right > 0 {
        Direction::Right
    } else {
        Direction::Left
    };

    let distance = if direction.is_lateral() {
        file_delta.unsigned_abs()
    } else {
        rank_delta.unsigned_abs()
    };
    Ok((direction, distance))
}

/// Files travelled, the second distance of a knight move.
pub fn file_distance(start: Square, end: Square) -> u8 {
    (end.file() as i8 - start.file() as i8).unsigned_abs()
}
