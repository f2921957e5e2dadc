// ABOUTME: Console report lines printed during a batch run
// ABOUTME: Banner, per-page progress and final totals shown to the person running the build

use std::path::Path;

use super::error::BuildError;
use super::page::BuiltPage;
use super::source::PageSource;
use super::summary::BuildSummary;

pub fn banner() {
    println!("Starting page builder");
    println!("=====================");
}

pub fn missing_input_dir(dir: &Path, template_ext: &str) {
    eprintln!("✗ Directory not found: {}", dir.display());
    eprintln!("  Created it. Add {} files and run again.", template_ext);
}

pub fn no_templates(dir: &Path, template_ext: &str) {
    eprintln!("✗ No {} files found in {}", template_ext, dir.display());
}

pub fn page_started(page: &PageSource) {
    println!();
    println!("Building: {} → {}", page.name, page.output_name);
}

pub fn page_built(page: &BuiltPage) {
    println!("  ✓ Built in {}ms", page.elapsed.as_millis());
    println!("  Output: {}", page.output_path.display());
}

pub fn page_failed(page: &str, error: &BuildError) {
    eprintln!("✗ Failed to build: {}", page);
    eprintln!("  {}", error);
}

pub fn page_valid(page: &str) {
    println!("✓ {} is valid", page);
}

pub fn page_invalid(page: &str, error: &str) {
    eprintln!("✗ {} is invalid", page);
    eprintln!("  {}", error);
}

pub fn finished(summary: &BuildSummary) {
    println!();
    if summary.is_success() {
        println!("✓ All {} pages built successfully", summary.succeeded());
    } else {
        println!(
            "✓ Build finished: {} built, {} failed ({})",
            summary.succeeded(),
            summary.failed(),
            summary.failed_pages().join(", ")
        );
    }
}
