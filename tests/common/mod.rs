// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides a temporary site layout with template and output directories

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pagebuilder::{BuildOptions, PageBuilder, SiteInfo};

pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestEnvironment {
    /// Layout with an input directory that does not exist yet
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input_dir = temp_dir.path().join("templates");
        let output_dir = temp_dir.path().join("site");

        Self {
            temp_dir,
            input_dir,
            output_dir,
        }
    }

    /// Layout with an existing, empty input directory
    pub fn new() -> Self {
        let env = Self::empty();
        fs::create_dir_all(&env.input_dir).expect("Failed to create input directory");
        env
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.input_dir.join(name);
        fs::write(&path, content).expect("Failed to write template");
        path
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_file(name)).expect("Failed to read output")
    }

    /// Names of all files in the output directory, sorted
    pub fn output_names(&self) -> Vec<String> {
        if !self.output_dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(&self.output_dir)
            .expect("Failed to list output directory")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn options(&self, template_ext: &str, output_ext: &str) -> BuildOptions {
        BuildOptions::new(&self.input_dir, &self.output_dir, template_ext, output_ext)
    }

    pub fn builder(&self) -> PageBuilder {
        self.builder_with(self.options(".hbs", ".html"), SiteInfo::default())
    }

    pub fn builder_with(&self, options: BuildOptions, site: SiteInfo) -> PageBuilder {
        PageBuilder::new(options, site).expect("Failed to create page builder")
    }

    /// Minimal YAML config pointing at this environment's directories
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.root().join("pagebuilder.yaml");
        let content = format!(
            "input_dir: {}\noutput_dir: {}\n{}",
            self.input_dir.display(),
            self.output_dir.display(),
            extra
        );
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}
