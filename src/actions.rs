//! The coordinate action universe.
//!
//! Every pairing of a start and end square, followed by the promotion
//! variants: straight pushes onto the last rank and captures onto a
//! neighbouring file, each with the five promotion choices for White and
//! then for Black. The order never changes between runs, so the list can
//! back a stable action index.

use once_cell::sync::Lazy;

/// Number of actions in the universe: 64 * 64 square pairings, 80 straight
/// promotions and 140 diagonal ones.
pub const ACTION_COUNT: usize = 4316;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANKS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];
const WHITE_PROMOTIONS: [char; 5] = ['R', 'N', 'B', 'Q', 'K'];
const BLACK_PROMOTIONS: [char; 5] = ['r', 'n', 'b', 'q', 'k'];

static ALL_ACTIONS: Lazy<Vec<String>> = Lazy::new(enumerate_actions);

/// Every coordinate action the narrator accepts, in a fixed order.
pub fn all_actions() -> &'static [String] {
    &ALL_ACTIONS
}

fn enumerate_actions() -> Vec<String> {
    let mut actions = Vec::with_capacity(ACTION_COUNT);

    for start_file in FILES {
        for start_rank in RANKS {
            for end_file in FILES {
                for end_rank in RANKS {
                    actions.push(format!(
                        "{}{}{}{}",
                        start_file, start_rank, end_file, end_rank
                    ));
                }
            }
        }
    }

    // Straight promotions, file by file.
    for file in FILES {
        for choice in WHITE_PROMOTIONS {
            actions.push(format!("{}7{}8{}", file, file, choice));
        }
        for choice in BLACK_PROMOTIONS {
            actions.push(format!("{}2{}1{}", file, file, choice));
        }
    }

    // Diagonal promotions onto each neighbouring file, lower neighbour
    // first.
    for (i, file) in FILES.iter().enumerate() {
        let mut neighbours = Vec::new();
        if i > 0 {
            neighbours.push(FILES[i - 1]);
        }
        if i + 1 < FILES.len() {
            neighbours.push(FILES[i + 1]);
        }
        for neighbour in neighbours {
            for choice in WHITE_PROMOTIONS {
                actions.push(format!("{}7{}8{}", file, neighbour, choice));
            }
            for choice in BLACK_PROMOTIONS {
                actions.push(format!("{}2{}1{}", file, neighbour, choice));
            }
        }
    }

    actions
}
