// ABOUTME: Command implementations for the pagebuilder CLI
// ABOUTME: Handles execution of the build and validate commands

use anyhow::{bail, Result};
use tracing::info;

use super::config::Config;
use crate::builder::PageBuilder;

/// Render every template; individual page failures do not fail the command
pub fn build_pages(config: &Config) -> Result<()> {
    let options = config.build_options();
    info!(
        "Building pages from {} into {}",
        options.input_dir.display(),
        options.output_dir.display()
    );

    let mut builder = PageBuilder::new(options, config.site.clone())?;
    let summary = builder.build_all()?;

    info!(
        "Build completed: {} of {} pages built",
        summary.succeeded(),
        summary.discovered
    );

    Ok(())
}

/// Check every template compiles; fails if any does not
pub fn validate_pages(config: &Config) -> Result<()> {
    let options = config.build_options();
    info!("Validating templates in {}", options.input_dir.display());

    let builder = PageBuilder::new(options, config.site.clone())?;
    let summary = builder.validate_all()?;

    println!(
        "{} templates checked, {} invalid",
        summary.processed(),
        summary.failed()
    );

    if !summary.is_success() {
        bail!(
            "Invalid templates: {}",
            summary.failed_pages().join(", ")
        );
    }

    Ok(())
}
