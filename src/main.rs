use clap::Parser;
use starter_template::utils::logger;
use starter_template::{CliConfig, TemplateEngine};
use std::io;

fn main() -> anyhow::Result<()> {
    // Arguments are accepted and ignored
    let config = CliConfig::parse();

    // Logs go to stderr, off unless RUST_LOG is set
    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    // Welcome, sum, message
    let stdout = io::stdout();
    let mut engine = TemplateEngine::new(stdout.lock());
    engine.run()?;

    Ok(())
}
