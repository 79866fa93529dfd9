use color_eyre::Result;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pizza_bot::Config;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Load .env (optional). This allows reading GROQ_API_KEY from a local .env file.
    // If the file doesn't exist, ignore the error.
    let _ = dotenvy::dotenv();

    // Logs go to a rolling file only; stdout belongs to the conversation.
    let file_appender = rolling::daily("logs", "pizza_bot.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    let config = Config::from_env()?;
    pizza_bot::run(config)
}
