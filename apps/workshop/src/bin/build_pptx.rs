use anyhow::{Context, Result};

use workshop::config::OutputConfig;
use workshop::deck::{deck_regions, DeckFormat, DeckSurface, DECK_TITLE};
use workshop::{telemetry, Emitter, Theme};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = OutputConfig::from_env()?;
    telemetry::init(&config.rust_log);

    let theme = Theme::slides();
    let path = config.slides_pptx_path();
    let mut surface = DeckSurface::new(&path, DECK_TITLE, theme, DeckFormat::Pptx);
    let report = Emitter::new()
        .run(&mut surface, &deck_regions(&theme))
        .await
        .with_context(|| format!("Failed to build {}", path.display()))?;

    println!("PPTX written to: {} ({} slides)", report.artifact, report.regions);
    Ok(())
}
