use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use salvo::{init_logging, GameBoard, GameConfig};
use serde_json::json;

/// Fire at every cell in a seeded random order until the game ends and
/// print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    seed: u64,
    #[arg(long, help = "Play without strikes")]
    simple: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let (variant, config) = if args.simple {
        ("simple", GameConfig::simple())
    } else {
        ("strikes", GameConfig::strikes())
    };

    let mut board = GameBoard::seeded(config, args.seed)?;
    let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1));
    let size = board.board_size() as i32;
    let mut targets: Vec<(i32, i32)> = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .collect();
    targets.shuffle(&mut rng);

    for (r, c) in targets {
        board.fire(r, c)?;
        if board.is_over() {
            break;
        }
    }

    let stats = board.stats();
    let result = json!({
        "seed": args.seed,
        "variant": variant,
        "status": board.status(),
        "shots": stats.shots,
        "hits": stats.hits,
        "misses": stats.misses,
        "strikes": stats.strikes,
        "ships_sunk": stats.ships_sunk,
        "ships": board.fleet_snapshot(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
