// ABOUTME: Main library module for the pagebuilder batch renderer
// ABOUTME: Exports all core modules and provides the public API

pub mod builder;
pub mod cli;
pub mod template;

// Re-export commonly used types
pub use builder::{BuildOptions, BuildSummary, PageBuilder, PageOutcome, PageStatus};
pub use cli::{App, Args, Config};
pub use template::{PageContext, PageHelpers, SiteInfo, StandardHelpers, TemplateEngine};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
