#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging, render, AiCombatant, HumanCombatant, MatchController, Resolution, Side,
    TurnState,
};

#[derive(Parser)]
#[command(author, version, about = "Naval battle on a 6x6 grid against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show the computer's vessels")]
    reveal: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("Welcome to Sea Battle!");
    println!("Sink all 7 enemy vessels before the computer sinks yours.");
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut game = MatchController::new(
        Box::new(HumanCombatant::stdio()),
        Box::new(AiCombatant::new()),
        rng,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    if cli.reveal {
        game.set_reveal(Side::Automated, true);
    }

    loop {
        let report = match game.play_turn() {
            Ok(Some(report)) => report,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Game ended: {}", e);
                return Ok(());
            }
        };
        if report.side == Side::Automated {
            match report.resolution {
                Resolution::Miss => println!("\nComputer fires at {} and misses.", report.target),
                Resolution::Hit => println!("\nComputer hits your vessel at {}!", report.target),
                Resolution::Sunk(v) => println!(
                    "\nComputer sinks your vessel of length {} at {}!",
                    v.length(),
                    report.target
                ),
                Resolution::OutOfBounds => {}
            }
        }
        if let TurnState::AwaitingShot(Side::Automated) = report.next {
            if report.side == Side::Human {
                println!("Computer's turn...");
            }
        }
    }

    println!("\nFinal grids:");
    println!("Computer:");
    game.set_reveal(Side::Automated, true);
    print!("{}", render(game.grid(Side::Automated)));
    println!("You:");
    print!("{}", render(game.grid(Side::Human)));

    match game.winner() {
        Some(Side::Human) => println!("\nYou win! All enemy vessels have been sunk."),
        Some(Side::Automated) => println!("\nThe computer wins! All your vessels have been sunk."),
        None => {}
    }
    Ok(())
}
