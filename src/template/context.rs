// ABOUTME: Page render context and system information collection
// ABOUTME: Builds the fixed set of variables every page template can reference

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{Result, TemplateError};
use super::helpers::human_readable;

/// Site-wide constants configured once per run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteInfo {
    pub app_name: String,
    pub version: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            app_name: "My Page Application".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

/// Details about the machine running the build, collected once per run
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub arch: String,
    pub runtime_version: String,
}

/// Variables visible to a single page while it renders.
///
/// Serialized with camelCase keys, so templates read `{{appName}}`,
/// `{{currentPage}}` and so on. The key set is fixed by this struct.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub app_name: String,
    pub version: String,
    pub build_date: String,
    pub current_page: String,
    pub runtime_version: String,
    pub os_name: String,
    pub os_arch: String,
    pub hostname: String,
    /// Epoch milliseconds at context creation
    pub timestamp: i64,
}

impl PageContext {
    /// Create the context for `current_page`, stamped with the current time
    pub fn new(site: &SiteInfo, system: &SystemInfo, current_page: &str) -> Self {
        Self::at(site, system, current_page, Local::now())
    }

    /// Create the context for `current_page` as of `now`
    pub fn at(
        site: &SiteInfo,
        system: &SystemInfo,
        current_page: &str,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            app_name: site.app_name.clone(),
            version: site.version.clone(),
            build_date: human_readable(&now),
            current_page: current_page.to_string(),
            runtime_version: system.runtime_version.clone(),
            os_name: system.os.clone(),
            os_arch: system.arch.clone(),
            hostname: system.hostname.clone(),
            timestamp: now.timestamp_millis(),
        }
    }

    /// Convert context to JSON
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(TemplateError::JsonError)
    }
}

impl SystemInfo {
    /// Collect system information. Values that cannot be determined read `unknown`.
    pub fn collect() -> Self {
        Self {
            hostname: hostname_or_unknown(hostname::get()),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            runtime_version: runtime_version().to_string(),
        }
    }
}

fn hostname_or_unknown(lookup: std::io::Result<std::ffi::OsString>) -> String {
    match lookup {
        Ok(name) if !name.is_empty() => name.to_string_lossy().to_string(),
        Ok(_) => "unknown".to_string(),
        Err(e) => {
            warn!("Failed to get hostname: {}", e);
            "unknown".to_string()
        }
    }
}

/// `rustc --version` of the toolchain that compiled this binary
fn runtime_version() -> &'static str {
    env!("RUSTC_VERSION")
}
