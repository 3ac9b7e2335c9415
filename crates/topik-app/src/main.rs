use anyhow::Context;
use topik_config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::new();
    tracing::info!(
        "Converting {} -> {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let summary = topik_core::convert(&config).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    tracing::info!(
        "Done: {} records in {}",
        summary.records,
        summary.output_path.display()
    );
    Ok(())
}
