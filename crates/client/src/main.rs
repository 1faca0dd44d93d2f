//! Dungeon game client binary.
//!
//! Composition root: loads configuration from the environment, builds a
//! seeded encounter session and runs the line-oriented command loop on
//! stdin/stdout.
//!
//! # Examples
//!
//! ```bash
//! # Replay a specific fight against the shipped data files
//! GAME_SEED=42 CONTENT_DIR=data ENCOUNTER=spider_nest cargo run -p dungeon-client
//! ```

use std::io;

use anyhow::Result;
use runtime::{RuntimeConfig, Session};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = RuntimeConfig::from_env();
    let seed = config.resolve_seed();
    config.seed = Some(seed);

    tracing::info!("Starting Dungeon client");
    tracing::info!("Seed: {}", seed);
    tracing::info!("Encounter: {}", config.encounter);
    tracing::info!("Content: {:?}", config.content_dir);

    let mut session = Session::builder().config(config).build()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    dungeon_client::run(&mut session, stdin.lock(), &mut stdout)?;

    tracing::info!("Dungeon client exited");
    Ok(())
}
