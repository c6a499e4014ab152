mod settings;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the report; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = settings::load_settings().context("failed to load configuration")?;

    let sampler = settings.sampler().context("invalid sampling region")?;
    let renderer = settings.renderer().context("invalid map parameters")?;

    let points = sampler
        .generate(settings.count)
        .context("failed to generate points")?;
    info!(
        count = points.len(),
        min_distance = settings.min_distance,
        "Generated points"
    );

    renderer.render(&points).context("failed to render map")?;
    Ok(())
}
