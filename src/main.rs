//! Terminal shell for the hexgame engine.
//!
//! Everything here is presentation: CLI parsing, console input, and board
//! rendering. The library core never touches stdin/stdout.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hexgame::{Board, Cell, Game, GameRng, GameState, MoveSource, Occupancy, PlayerId, RandomSource};

/// Glyphs for the two players: First is X (top <-> bottom), Second is O
/// (left <-> right).
fn glyph(occupancy: Occupancy) -> char {
    match occupancy {
        Occupancy::Empty => '.',
        Occupancy::Owned(PlayerId::First) => 'X',
        Occupancy::Owned(PlayerId::Second) => 'O',
    }
}

#[derive(Debug, Parser)]
#[command(name = "hexgame", about = "Play Hex against a random opponent")]
struct Cli {
    /// Board side length.
    #[arg(short, long, default_value_t = 14, value_parser = clap::value_parser!(u16).range(2..=26))]
    size: u16,

    /// Seed for the automated opponent; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

/// Interactive move source backed by stdin.
///
/// Accepts exactly two whitespace-separated 1-based integers; anything else
/// re-prompts with a fixed message. The literal `quit` (or `q`) exits the
/// process with status 0.
struct ConsoleSource {
    player: PlayerId,
}

impl ConsoleSource {
    fn new(player: PlayerId) -> Self {
        Self { player }
    }

    fn parse_line(line: &str) -> Option<Cell> {
        let mut fields = line.split_whitespace();
        let row: u16 = fields.next()?.parse().ok()?;
        let col: u16 = fields.next()?.parse().ok()?;
        if fields.next().is_some() || row == 0 || col == 0 {
            return None;
        }
        // 1-based on the console, 0-based internally.
        Some(Cell::new(row - 1, col - 1))
    }
}

impl MoveSource for ConsoleSource {
    fn propose_move(&mut self, _last_opponent_move: Option<Cell>) -> Cell {
        let stdin = io::stdin();
        loop {
            print!("{}, enter your move as 'row col' (or 'quit'): ", self.player);
            io::stdout().flush().expect("flush stdout");

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
                // EOF: treat like the quit sentinel.
                println!("\nThanks for playing!");
                std::process::exit(0);
            }

            let trimmed = line.trim();
            if trimmed == "quit" || trimmed == "q" {
                println!("Thanks for playing!");
                std::process::exit(0);
            }

            match Self::parse_line(trimmed) {
                Some(cell) => return cell,
                None => println!("Please enter two numbers, e.g. '3 5'."),
            }
        }
    }
}

fn render(board: &Board) {
    let size = board.size();

    print!("    ");
    for col in 1..=size {
        print!("{col:>3}");
    }
    println!("   X: top <-> bottom");

    for row in 0..size {
        // Indent grows with the row: the square index grid is a rhombus.
        print!("{:>3} {:indent$}", row + 1, "", indent = row as usize);
        for col in 0..size {
            print!("{:>3}", glyph(board.occupancy(Cell::new(row, col))));
        }
        if row == 0 {
            println!("   O: left <-> right");
        } else {
            println!();
        }
    }
    println!();
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = GameRng::new(seed);

    let mut game = Game::new(cli.size);
    let mut human = ConsoleSource::new(PlayerId::First);
    let mut bot = RandomSource::new(cli.size, PlayerId::Second, rng.fork());

    println!("Hex on a {0}x{0} board. You are X.", cli.size);

    loop {
        render(game.board());

        if let GameState::Won { winner } = game.play_turn(&mut human) {
            render(game.board());
            println!("{winner} wins!");
            break;
        }

        if let GameState::Won { winner } = game.play_turn(&mut bot) {
            render(game.board());
            println!("{winner} wins!");
            break;
        }
        if let Some(reply) = game.board().last_move() {
            println!(
                "{} plays {} {}.",
                reply.player,
                reply.cell.row + 1,
                reply.cell.col + 1
            );
        }
    }
}
