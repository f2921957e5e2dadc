// ABOUTME: Batch page builder that renders every template in the input directory
// ABOUTME: Pages are processed one at a time; a failing page never stops the batch

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::error::{BuildError, Result};
use super::page::build_page;
use super::report;
use super::source::{discover_pages, normalize_extension};
use super::summary::{BuildSummary, PageOutcome};
use crate::template::{PageContext, SiteInfo, SystemInfo, TemplateEngine};

/// Where templates come from and where pages go
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_extension: String,
    pub output_extension: String,
}

impl BuildOptions {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        template_extension: &str,
        output_extension: &str,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            template_extension: normalize_extension(template_extension),
            output_extension: normalize_extension(output_extension),
        }
    }
}

pub struct PageBuilder {
    options: BuildOptions,
    site: SiteInfo,
    system: SystemInfo,
    engine: TemplateEngine,
}

impl PageBuilder {
    /// Create a builder using the standard template helpers.
    ///
    /// Fails if the template extension is empty, since it would match every file.
    pub fn new(options: BuildOptions, site: SiteInfo) -> Result<Self> {
        if matches!(options.template_extension.as_str(), "" | ".") {
            return Err(BuildError::InvalidExtension(
                options.template_extension.clone(),
            ));
        }

        let system = SystemInfo::collect();
        Ok(Self {
            options,
            site,
            system,
            engine: TemplateEngine::new(),
        })
    }

    /// Replace the template engine, e.g. one built with custom helpers
    pub fn with_engine(mut self, engine: TemplateEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Render every template in the input directory.
    ///
    /// Only directory-level problems are returned as errors. Per-page
    /// failures are reported and recorded in the summary.
    pub fn build_all(&mut self) -> Result<BuildSummary> {
        report::banner();

        let input_dir = self.options.input_dir.clone();
        let output_dir = self.options.output_dir.clone();
        let template_ext = self.options.template_extension.clone();

        if !input_dir.exists() {
            warn!("Input directory {} does not exist, creating it", input_dir.display());
            create_dir(&input_dir)?;
            report::missing_input_dir(&input_dir, &template_ext);
            return Ok(BuildSummary::empty());
        }

        let pages = discover_pages(&input_dir, &template_ext, &self.options.output_extension)?;
        if pages.is_empty() {
            report::no_templates(&input_dir, &template_ext);
            return Ok(BuildSummary::empty());
        }

        create_dir(&output_dir)?;
        info!(
            "Building {} pages from {} into {}",
            pages.len(),
            input_dir.display(),
            output_dir.display()
        );

        let mut summary = BuildSummary::new(pages.len());
        for page in &pages {
            report::page_started(page);
            let context = PageContext::new(&self.site, &self.system, &page.name);

            match build_page(&mut self.engine, &context, page, &output_dir) {
                Ok(built) => {
                    info!("Built {} in {:?}", built.name, built.elapsed);
                    report::page_built(&built);
                    summary.record(PageOutcome::built(
                        built.name,
                        built.output_path,
                        built.elapsed,
                    ));
                }
                Err(e) => {
                    error!("Failed to build {}: {}", page.name, e);
                    report::page_failed(&page.name, &e);
                    summary.record(PageOutcome::failed(page.name.clone(), e.to_string()));
                }
            }
        }

        report::finished(&summary);
        Ok(summary)
    }

    /// Compile every template without rendering or writing anything
    pub fn validate_all(&self) -> Result<BuildSummary> {
        let input_dir = &self.options.input_dir;
        let template_ext = &self.options.template_extension;

        if !input_dir.exists() {
            warn!("Input directory {} does not exist", input_dir.display());
            return Ok(BuildSummary::empty());
        }

        let pages = discover_pages(input_dir, template_ext, &self.options.output_extension)?;
        if pages.is_empty() {
            report::no_templates(input_dir, template_ext);
            return Ok(BuildSummary::empty());
        }

        let mut summary = BuildSummary::new(pages.len());
        for page in &pages {
            let checked = fs::read_to_string(&page.path)
                .map_err(|e| BuildError::ReadTemplate {
                    path: page.path.clone(),
                    source: e,
                })
                .and_then(|content| {
                    self.engine
                        .validate_template(&content)
                        .map_err(|e| BuildError::Parse {
                            page: page.name.clone(),
                            source: e,
                        })
                });

            match checked {
                Ok(()) => {
                    report::page_valid(&page.name);
                    summary.record(PageOutcome::valid(page.name.clone()));
                }
                Err(e) => {
                    let message = e.to_string();
                    report::page_invalid(&page.name, &message);
                    summary.record(PageOutcome::failed(page.name.clone(), message));
                }
            }
        }

        Ok(summary)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| BuildError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}
