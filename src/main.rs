use clap::Parser;
use std::path::PathBuf;
use std::process;

use chesstolang::{actions, int_to_english, ActionNarrator, CoordMove, LanguageInfo, Square};

/// Chess narration tool
///
/// Reads a FEN position and speaks it square by square, or narrates a
/// coordinate move played from it as an English sentence.
///
/// ## Usage Examples:
/// ```bash
/// # Narrate a whole position, one line per square
/// ./chesstolang "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
///
/// # Narrate a move played from the position
/// ./chesstolang "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1" e2e4
///
/// # The positional phrase instead of the grammatical sentence
/// ./chesstolang -p "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1" e2e4
///
/// # List the whole coordinate action universe
/// ./chesstolang --actions
/// ```
#[derive(Parser)]
#[command(name = "chesstolang")]
#[command(about = "Narrate chess positions and coordinate moves in plain English")]
#[command(version = "0.1.0")]
struct Args {
    /// FEN of the position to narrate
    #[arg(value_name = "FEN", required_unless_present = "actions")]
    position: Option<String>,

    /// Coordinate move to narrate from the position, such as e2e4 or e7e8q
    #[arg(value_name = "MOVE")]
    action: Option<String>,

    /// Directory holding piece_names.json and piece_logics.csv (bundled
    /// tables are used if not specified)
    #[arg(short, long, value_name = "DIR")]
    tables: Option<PathBuf>,

    /// Print the positional phrase instead of the grammatical sentence
    #[arg(short, long)]
    phrase: bool,

    /// List every coordinate action the narrator accepts and exit
    #[arg(long)]
    actions: bool,
}

fn main() {
    let args = Args::parse();

    if args.actions {
        let all = actions::all_actions();
        for action in all {
            println!("{}", action);
        }
        match int_to_english(all.len() as i64) {
            Ok(spelled) => println!("{} possible actions", spelled),
            Err(e) => {
                eprintln!("Error spelling the action count: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let info = match load_tables(&args.tables) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Error loading language tables: {}", e);
            process::exit(1);
        }
    };
    let narrator = ActionNarrator::new(info);

    let fen = match &args.position {
        Some(fen) => fen,
        // clap enforces the FEN argument unless --actions is given.
        None => return,
    };

    match &args.action {
        Some(code) => {
            let action = match CoordMove::parse(code) {
                Ok(action) => action,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };
            match narrator.narrate(fen, action) {
                Ok(narration) => {
                    if args.phrase {
                        println!("{}", narration.phrase);
                    } else {
                        println!("{}", narration.sentence);
                    }
                }
                Err(e) => {
                    eprintln!("Error narrating move: {}", e);
                    process::exit(1);
                }
            }
        }
        None => match narrator.board().narrate(fen) {
            Ok(board) => {
                for square in Square::all() {
                    println!("{} {}", square, board.name_at(square));
                }
            }
            Err(e) => {
                eprintln!("Error narrating position: {}", e);
                process::exit(1);
            }
        },
    }
}

fn load_tables(tables: &Option<PathBuf>) -> chesstolang::Result<LanguageInfo> {
    match tables {
        Some(dir) => LanguageInfo::load_from_dir(dir),
        None => LanguageInfo::builtin(),
    }
}
