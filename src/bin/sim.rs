use broadside::{place_fleet, take_turn, AiPlayer, Board, GuessResult, TOTAL_SHIP_CELLS};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

/// Shot statistics over a batch of computer hunts.
#[derive(Serialize)]
struct Summary {
    seed: u64,
    games: usize,
    min_shots: usize,
    max_shots: usize,
    mean_shots: f64,
    mean_hit_rate: f64,
}

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program = args.first().map(String::as_str).unwrap_or("sim");
        eprintln!("Usage: {} <seed> <games>", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    if games == 0 {
        anyhow::bail!("need at least one game");
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut shots = Vec::with_capacity(games);
    for _ in 0..games {
        let mut board = Board::human();
        place_fleet(&mut board, &mut rng)?;
        let mut hunter = AiPlayer::new();
        let mut fired = 0usize;
        let mut hits = 0usize;
        while !board.is_defeated() {
            let (_, result) = take_turn(&mut hunter, &mut board, &mut rng)?;
            fired += 1;
            if result == GuessResult::Hit {
                hits += 1;
            }
        }
        debug_assert_eq!(hits, TOTAL_SHIP_CELLS);
        shots.push(fired);
    }

    let total: usize = shots.iter().sum();
    let summary = Summary {
        seed,
        games,
        min_shots: shots.iter().copied().min().unwrap_or(0),
        max_shots: shots.iter().copied().max().unwrap_or(0),
        mean_shots: total as f64 / games as f64,
        mean_hit_rate: (TOTAL_SHIP_CELLS * games) as f64 / total as f64,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
