// ABOUTME: Configuration management for the page builder
// ABOUTME: Handles loading configuration from files and merging environment overrides

use anyhow::{bail, Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::builder::BuildOptions;
use crate::template::SiteInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_template_extension")]
    pub template_extension: String,

    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    #[serde(default)]
    pub site: SiteInfo,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_template_extension() -> String {
    ".hbs".to_string()
}

fn default_output_extension() -> String {
    ".html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            template_extension: default_template_extension(),
            output_extension: default_output_extension(),
            site: SiteInfo::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => bail!("Config file not found: {}", p.display()),
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config {}", config_path.display()))?;
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Invalid config {}", config_path.display()))?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            PathBuf::from("pagebuilder.yaml"),
            PathBuf::from("pagebuilder.yml"),
            PathBuf::from(".pagebuilder.yaml"),
            PathBuf::from(".pagebuilder.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".pagebuilder").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Default path (may not exist)
        PathBuf::from("pagebuilder.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("PAGEBUILDER_INPUT_DIR") {
            self.input_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("PAGEBUILDER_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(ext) = lookup("PAGEBUILDER_TEMPLATE_EXT") {
            self.template_extension = ext;
        }
        if let Some(ext) = lookup("PAGEBUILDER_OUTPUT_EXT") {
            self.output_extension = ext;
        }

        if let Some(name) = lookup("PAGEBUILDER_APP_NAME") {
            self.site.app_name = name;
        }
        if let Some(version) = lookup("PAGEBUILDER_APP_VERSION") {
            self.site.version = version;
        }

        if let Some(level) = lookup("PAGEBUILDER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PAGEBUILDER_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Apply command line overrides, which win over file and environment
    pub fn apply_overrides(
        &mut self,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        template_extension: Option<String>,
        output_extension: Option<String>,
    ) {
        if let Some(dir) = input_dir {
            self.input_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(ext) = template_extension {
            self.template_extension = ext;
        }
        if let Some(ext) = output_extension {
            self.output_extension = ext;
        }
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::new(
            &self.input_dir,
            &self.output_dir,
            &self.template_extension,
            &self.output_extension,
        )
    }
}
