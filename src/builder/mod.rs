// ABOUTME: Batch page building module
// ABOUTME: Discovers templates, renders each page and summarizes the run

pub mod batch;
pub mod error;
pub mod page;
pub mod report;
pub mod source;
pub mod summary;

pub use batch::{BuildOptions, PageBuilder};
pub use error::{BuildError, Result};
pub use page::{build_page, BuiltPage};
pub use source::{discover_pages, PageSource};
pub use summary::{BuildSummary, PageOutcome, PageStatus};
