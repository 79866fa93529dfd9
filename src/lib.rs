pub mod config;
pub mod dataset;
pub mod error;
pub mod openai;
pub mod pricing;
pub mod session;

pub use config::Config;
pub use error::AgentError;

use color_eyre::Result;
use tokio::runtime::Runtime;

// Ensure .env is loaded for tests before anything else runs in the test process.
#[cfg(test)]
#[ctor::ctor]
fn load_dotenv_for_tests() {
    let _ = dotenvy::dotenv();
}

/// Run one interactive ordering session to completion.
///
/// Builds a Tokio runtime internally so callers (the binary) stay synchronous;
/// the session itself is strictly sequential anyway.
pub fn run(config: Config) -> Result<()> {
    let vocabulary = dataset::Vocabulary::load(&config.dataset_path)?;
    let rt = Runtime::new()?;
    rt.block_on(session::Session::new(config, &vocabulary).run())
}
