//! Fixture generator - regenerates every benchmark fixture
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin generate
//! ```
//!
//! `FIXTURE_DIR` changes the output directory (default `testdata`) and
//! `FIXTURE_SEED` makes the output reproducible.

use anyhow::Context;
use test_data::builders::FixtureSetBuilder;
use test_data::config::FixtureConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = FixtureConfig::from_env();
    match config.seed {
        Some(seed) => tracing::info!("Generating fixtures with seed {seed}"),
        None => tracing::info!("Generating fixtures with a random seed"),
    }

    let builder = FixtureSetBuilder::from_config(&config);
    let mut rng = builder.rng();

    let report = builder.write(&mut rng).with_context(|| {
        format!(
            "failed to generate fixtures in {}",
            builder.output_dir().display()
        )
    })?;

    // Summary output
    tracing::info!("Fixtures generated!");
    for file in &report.files {
        tracing::info!(
            "  {}: {} entities, {:.1} KB",
            file.path.display(),
            file.entities,
            file.file_size_bytes as f64 / 1024.0
        );
    }
    tracing::info!(
        "  Total: {} entities, {:.1} KB in {:?}",
        report.total_entities(),
        report.total_bytes() as f64 / 1024.0,
        report.total_duration
    );

    tracing::info!("Run the codec benchmarks with:");
    tracing::info!("  cargo bench -p json-bench --bench codec");

    Ok(())
}
