use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiCombatant, MatchController};
use serde_json::json;

/// Play computer-vs-computer matches and print one JSON summary per match.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Seed of the first match; later matches use seed+1, seed+2, ...")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let base = match args.seed {
        Some(s) => s,
        None => {
            let mut seed_rng = rand::rng();
            rand::Rng::random(&mut seed_rng)
        }
    };

    for game in 0..args.games {
        let seed = base.wrapping_add(game);
        let mut controller = MatchController::new(
            Box::new(AiCombatant::new()),
            Box::new(AiCombatant::new()),
            SmallRng::seed_from_u64(seed),
        )
        .map_err(|e| anyhow::anyhow!(e))?;
        let summary = controller.run()?;
        let result = json!({
            "seed": seed,
            "summary": summary,
        });
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
