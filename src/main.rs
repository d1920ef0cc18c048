use broadside::{
    init_logging, print_player_view, print_revealed, take_turn, AiPlayer, CliPlayer, Game,
    GameStatus, Player,
};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Sink the computer's fleet on an 8×8 board before it sinks yours.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Let the computer take the first shot.
    #[arg(long)]
    computer_first: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new();
    let mut human = CliPlayer::new();
    let mut computer = AiPlayer::new();

    human.place_ships(&mut rng, game.human_board_mut())?;
    computer.place_ships(&mut rng, game.computer_board_mut())?;

    let mut human_turn = !cli.computer_first;
    while game.status() == GameStatus::InProgress {
        if human_turn {
            println!();
            print_player_view(&game);
            take_turn(&mut human, game.computer_board_mut(), &mut rng)?;
        } else {
            let (coord, result) = game.computer_turn(&mut rng)?;
            human.handle_opponent_guess(coord, result);
        }
        human_turn = !human_turn;
    }

    println!();
    print_revealed(&game);
    match game.status() {
        GameStatus::Won => println!("\nYou sank the whole enemy fleet. Victory!"),
        GameStatus::Lost => println!("\nYour fleet is at the bottom of the sea. Defeat."),
        GameStatus::InProgress => {}
    }
    Ok(())
}
