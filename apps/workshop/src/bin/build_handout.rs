use anyhow::{Context, Result};

use workshop::config::OutputConfig;
use workshop::handout::{handout_regions, HandoutSurface, FOOTER, WORKBOOK_TITLE};
use workshop::{telemetry, Emitter, Theme};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = OutputConfig::from_env()?;
    telemetry::init(&config.rust_log);

    let path = config.handout_path();
    let mut surface = HandoutSurface::new(&path, WORKBOOK_TITLE, FOOTER, Theme::handout());
    let report = Emitter::new()
        .run(&mut surface, &handout_regions())
        .await
        .with_context(|| format!("Failed to build {}", path.display()))?;

    println!("PDF written to: {}", report.artifact);
    println!("{} sections, {} pages", report.regions, surface.pages().len());
    Ok(())
}
