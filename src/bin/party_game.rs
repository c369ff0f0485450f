//! Party game driver.
//!
//! Loads places and weapons from a JSON file and plays one game, printing
//! every event, or plays a batch of seeded games and prints a summary.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use party_assassin::core::DEFAULT_PLAYER_COUNT;
use party_assassin::{
    run_batch, BatchConfig, Game, GameConfig, GameEvent, GameOutcome, GameRng, RosterRule,
    Vocabulary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate the assassin party game", long_about = None)]
struct Args {
    /// JSON file with "places" and "weapons" lists
    #[arg(short, long, default_value = "game_config.json")]
    config: PathBuf,

    /// Number of players
    #[arg(short, long, default_value_t = DEFAULT_PLAYER_COUNT)]
    players: usize,

    /// RNG seed. Drawn from the OS when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many rounds
    #[arg(long, default_value_t = 10_000)]
    max_rounds: u32,

    /// What happens to wrongly accused players: "static" or "eliminate"
    #[arg(long, default_value_t = RosterRule::Static)]
    roster_rule: RosterRule,

    /// Play this many games and print statistics instead of events
    #[arg(short, long)]
    games: Option<u32>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn print_event(event: &GameEvent, json: bool) {
    if !json {
        println!("{}", event);
        return;
    }
    match serde_json::to_string(event) {
        Ok(line) => println!("{}", line),
        Err(err) => log::error!("failed to encode event: {}", err),
    }
}

fn run(args: &Args) -> Result<()> {
    let vocabulary = Vocabulary::load(&args.config)?;
    let config = GameConfig::new(args.players)
        .with_max_rounds(args.max_rounds)
        .with_roster_rule(args.roster_rule);
    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    log::info!("using seed {}", seed);

    if let Some(games) = args.games {
        let batch = BatchConfig::new().with_games(games).with_seed_offset(seed);
        let stats = run_batch(&vocabulary, &config, &batch)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("{}", stats);
        }
        return Ok(());
    }

    let mut game = Game::new(vocabulary, config, GameRng::new(seed))?;
    let json = args.json;
    let outcome = game.play(&mut |event: &GameEvent| print_event(event, json))?;

    if let GameOutcome::Unresolved { rounds } = outcome {
        bail!("no resolution after {} rounds (seed {})", rounds, seed);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
