// relocate-submit-button - one-shot rewrite of the admin page source
// Moves the product form submit button below the Product Gallery section.

pub mod error;
pub mod file;
pub mod transform;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize the tool with custom logger configuration
///
/// @param ansi_colors - Whether to enable ANSI color codes in logs
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    info!("Initializing relocate-submit-button v{}", version());

    Ok(())
}
