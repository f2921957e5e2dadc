// ABOUTME: Page build outcomes and batch summary aggregation
// ABOUTME: Records what happened to each page so callers and reports can inspect a run

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PageStatus {
    /// Rendered and written to the output directory
    Built,
    /// Compiled successfully during validation, nothing written
    Valid,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageOutcome {
    pub page: String,
    pub status: PageStatus,
    pub output_path: Option<PathBuf>,
    pub duration: Option<Duration>,
    pub error: Option<String>,
}

impl PageOutcome {
    pub fn built(page: String, output_path: PathBuf, duration: Duration) -> Self {
        Self {
            page,
            status: PageStatus::Built,
            output_path: Some(output_path),
            duration: Some(duration),
            error: None,
        }
    }

    pub fn valid(page: String) -> Self {
        Self {
            page,
            status: PageStatus::Valid,
            output_path: None,
            duration: None,
            error: None,
        }
    }

    pub fn failed(page: String, error: String) -> Self {
        Self {
            page,
            status: PageStatus::Failed,
            output_path: None,
            duration: None,
            error: Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == PageStatus::Failed
    }
}

/// Result of one batch run over the input directory
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildSummary {
    pub discovered: usize,
    pub pages: Vec<PageOutcome>,
}

impl BuildSummary {
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            pages: Vec::with_capacity(discovered),
        }
    }

    /// Summary of a run that found nothing to do
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: PageOutcome) {
        self.pages.push(outcome);
    }

    /// Pages attempted, whatever their outcome
    pub fn processed(&self) -> usize {
        self.pages.len()
    }

    pub fn succeeded(&self) -> usize {
        self.pages.iter().filter(|p| !p.is_failed()).count()
    }

    pub fn failed(&self) -> usize {
        self.pages.iter().filter(|p| p.is_failed()).count()
    }

    pub fn failed_pages(&self) -> Vec<&str> {
        self.pages
            .iter()
            .filter(|p| p.is_failed())
            .map(|p| p.page.as_str())
            .collect()
    }

    pub fn outcome(&self, page: &str) -> Option<&PageOutcome> {
        self.pages.iter().find(|p| p.page == page)
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}
