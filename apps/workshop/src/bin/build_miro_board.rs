use anyhow::{Context, Result};
use tracing::info;

use workshop::board::{board_zones, BoardSurface, MiroClient, BOARD_NAME, NEXT_STEPS};
use workshop::config::BoardConfig;
use workshop::{telemetry, Emitter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = BoardConfig::from_env()?;
    telemetry::init(&config.rust_log);

    info!("Creating board '{}'", BOARD_NAME);
    let client = MiroClient::new(config.access_token.clone()).context("Failed to build Miro client")?;
    let mut surface = BoardSurface::new(client, BOARD_NAME, config.team_id.clone());
    let zones = board_zones(&config.layout);

    let report = Emitter::throttled(config.throttle)
        .run(&mut surface, &zones)
        .await
        .context("Board build failed")?;

    println!();
    println!("Board ready: {}", report.artifact);
    println!("{} zones, {} items", report.regions, report.elements);
    println!();
    println!("Next steps:");
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    Ok(())
}
