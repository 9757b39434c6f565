use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use salvo::render::{coord_to_string, parse_coord, render_board, status_line};
use salvo::{init_logging, FireOutcome, GameBoard, GameConfig, GameStatus};

#[derive(Parser)]
#[command(author, version, about = "Sink the hidden fleet before you run out of strikes", long_about = None)]
struct Cli {
    #[arg(long, help = "JSON file with game settings; flags below override it")]
    config: Option<PathBuf>,
    #[arg(long, help = "Play without strikes: the game ends only when the fleet is sunk")]
    simple: bool,
    #[arg(long, help = "Board edge length (at most 26 for lettered columns)")]
    board_size: Option<usize>,
    #[arg(long, value_delimiter = ',', help = "Ship lengths, e.g. --fleet 2,3,3,4,5")]
    fleet: Option<Vec<usize>>,
    #[arg(long, help = "Consecutive misses that make one strike")]
    miss_threshold: Option<u32>,
    #[arg(long, help = "Strikes that lose the game")]
    strike_limit: Option<u32>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show ship positions on the board")]
    reveal: bool,
}

impl Cli {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<GameConfig>(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::strikes(),
        };
        if self.simple {
            config = config
                .with_miss_strike_threshold(None)
                .with_strike_limit(None);
        }
        if let Some(size) = self.board_size {
            config = config.with_board_size(size);
        }
        if let Some(fleet) = &self.fleet {
            config = config.with_fleet(fleet);
        }
        if let Some(threshold) = self.miss_threshold {
            config = config.with_miss_strike_threshold(Some(threshold));
        }
        if let Some(limit) = self.strike_limit {
            config = config.with_strike_limit(Some(limit));
        }
        if config.board_size > 26 {
            anyhow::bail!("board size {} is wider than the column letters", config.board_size);
        }
        Ok(config)
    }
}

fn describe(outcome: FireOutcome, row: usize, col: usize) -> String {
    let at = coord_to_string(row, col);
    match outcome {
        FireOutcome::Sunk { length, .. } => format!("{}: you sank a ship of length {}!", at, length),
        FireOutcome::Strike { strikes } => {
            format!("{}: miss. Too many misses in a row, strike {}!", at, strikes)
        }
        other => format!("{}: {}", at, other),
    }
}

fn print_summary(board: &GameBoard) {
    let stats = board.stats();
    match board.status() {
        GameStatus::Won => println!("\nCongratulations! You sunk all ships!"),
        GameStatus::Lost => println!("\nGame over! You ran out of strikes."),
        GameStatus::InProgress => return,
    }
    println!(
        "Total shots: {}\nHits: {}\nMisses: {}\nStrikes: {}",
        stats.shots, stats.hits, stats.misses, stats.strikes
    );
    println!("{}", render_board(board, true));
    println!("Type 'reset' to play again or 'quit' to exit.");
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.game_config()?;

    let mut board = match cli.seed {
        Some(seed) => {
            println!("Using fixed seed: {} (game will be reproducible)", seed);
            GameBoard::seeded(config, seed)?
        }
        None => GameBoard::new(config)?,
    };

    println!(
        "{} ships are hiding on a {}x{} grid.",
        board.ship_count(),
        board.board_size(),
        board.board_size()
    );
    let stdin = io::stdin();
    loop {
        if !board.is_over() {
            println!("\n{}", render_board(&board, cli.reveal));
            println!("{}", status_line(&board));
        }
        print!("Fire at (e.g. B7), 'peek B7', 'reset' or 'quit': ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "q" => break,
            "reset" => {
                board.reset();
                println!("New fleet deployed: {} ships.", board.ship_count());
                continue;
            }
            _ => {}
        }

        if let Some(target) = line.strip_prefix("peek ") {
            match parse_coord(target) {
                Some((r, c)) => println!("peek -> {:?}", board.peek(r, c)),
                None => println!("Invalid coordinate"),
            }
            continue;
        }

        let Some((r, c)) = parse_coord(line) else {
            println!("Invalid coordinate");
            continue;
        };
        match board.fire(r, c) {
            Ok(outcome) if board.has_fired(r, c) => {
                println!("{}", describe(outcome, r as usize, c as usize));
                if board.is_over() {
                    print_summary(&board);
                }
            }
            Ok(_) => println!("That shot landed off the board."),
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
