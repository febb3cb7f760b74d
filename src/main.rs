use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use relocate_submit_button::transform::relocate_in_file;

/// Path of the admin page this tool was written to rewrite. An optional
/// positional argument overrides it, e.g. for running against a copy.
const DEFAULT_TARGET: &str = r"c:\Users\laptop solutions\Desktop\eyewearr\src\pages\AdminPage.js";

fn main() -> Result<()> {
    relocate_submit_button::init_with_logger(true).context("Failed to initialize logging")?;

    // Resolve the target path from the first argument, falling back to the
    // hard-coded admin page path
    let args: Vec<String> = std::env::args().collect();
    let target = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from(DEFAULT_TARGET)
    };

    info!(
        "Starting relocate-submit-button v{} against {}",
        relocate_submit_button::version(),
        target.display()
    );

    let report = relocate_in_file(&target)
        .with_context(|| format!("Failed to rewrite {}", target.display()))?;

    info!(
        "Removal pass deleted {} occurrence(s); insertion pass applied: {}",
        report.removed, report.inserted
    );

    println!("Successfully moved the submit button to after the Product Gallery section!");

    Ok(())
}
