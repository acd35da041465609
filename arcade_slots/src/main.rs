use std::io;

use anyhow::Context;
use arcade_core::{Console, EngineParams, GameRng, InputError};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut rng = match std::env::var("ARCADE_SEED") {
        Ok(seed) => GameRng::seeded(
            seed.parse()
                .context("ARCADE_SEED must be a decimal integer")?,
        ),
        Err(_) => GameRng::from_entropy(),
    };
    let params = EngineParams::default_3x3();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    match arcade_core::session::run(&mut console, &mut rng, &params) {
        Ok(_) | Err(InputError::Closed) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
