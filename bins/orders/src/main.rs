use anyhow::Context;
use orders_config::OrdersConfig;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "orders.toml";

fn main() -> anyhow::Result<()> {
    let config = OrdersConfig::load_or_default(CONFIG_PATH)
        .with_context(|| format!("invalid config in {CONFIG_PATH}"))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    orders_engine::run(&config);
    Ok(())
}
