use anyhow::Context;
use tracing_subscriber::EnvFilter;
use typing_config::TypingConfig;

const CONFIG_PATH: &str = "typing.toml";

fn main() -> anyhow::Result<()> {
    let config = TypingConfig::load_or_default(CONFIG_PATH)
        .with_context(|| format!("invalid config in {CONFIG_PATH}"))?;

    // Keep the subscriber on stderr so the game's console UI owns stdout.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    typing_engine::run(&config);
    Ok(())
}
