use url_shortener::config::{self, Config};
use url_shortener::server;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
