//! Offline demo: plays one battle between two rosters with the automatic
//! action policy on both sides.
//!
//! Usage: `pokebat [player1,roster] [player2,roster]`

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use pokebat::battle::ai::GuardingAI;
use pokebat::battle::state::BattlePhase;
use pokebat::catalog::InMemoryCatalog;
use pokebat::config::ServerConfig;
use pokebat::session::BattleSession;
use pokebat::telemetry::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_TURNS: u32 = 500;
const DEFAULT_PLAYER1: &str = "pikachu,charmander,bulbasaur";
const DEFAULT_PLAYER2: &str = "squirtle,jigglypuff,meowth";

fn parse_roster(arg: Option<String>, default: &str) -> Vec<String> {
    arg.as_deref()
        .unwrap_or(default)
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let catalog = InMemoryCatalog::load(&config.catalog_path).with_context(|| {
        format!(
            "failed to load creature catalog from {}",
            config.catalog_path.display()
        )
    })?;
    println!("Loaded {} creatures", catalog.len());

    let mut args = std::env::args().skip(1);
    let player1 = parse_roster(args.next(), DEFAULT_PLAYER1);
    let player2 = parse_roster(args.next(), DEFAULT_PLAYER2);

    let session = BattleSession::from_config(&config, Arc::new(catalog));
    let mut snapshot = session.start_battle(&player1, &player2)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let ai = GuardingAI::default();

    println!("{} vs {}", player1.join(", "), player2.join(", "));
    println!();

    loop {
        let party = match snapshot.phase {
            BattlePhase::BattleOver { winner } => {
                println!();
                println!("Winner: {}", snapshot.party(winner).name);
                return Ok(());
            }
            BattlePhase::AwaitingAction { turn_owner } => turn_owner,
        };
        if snapshot.turn > MAX_TURNS {
            bail!("no winner after {} turns", MAX_TURNS);
        }

        let action = session.with_state(|state| ai.decide_action(party, state, &mut rng))?;
        snapshot = session.submit(party, action)?;
        for line in &snapshot.log {
            println!("{}", line);
        }
    }
}
