// ABOUTME: Template discovery for batch builds
// ABOUTME: Lists matching template files and derives their output file names

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{BuildError, Result};

/// A template file found in the input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSource {
    pub path: PathBuf,
    pub name: String,
    pub output_name: String,
}

impl PageSource {
    pub fn new(path: PathBuf, name: String, template_ext: &str, output_ext: &str) -> Self {
        let output_name = output_name_for(&name, template_ext, output_ext);
        Self {
            path,
            name,
            output_name,
        }
    }
}

/// Ensure an extension carries its leading dot: `hbs` becomes `.hbs`
pub fn normalize_extension(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Swap the trailing template extension for the output extension
pub fn output_name_for(name: &str, template_ext: &str, output_ext: &str) -> String {
    let stem = name.strip_suffix(template_ext).unwrap_or(name);
    format!("{}{}", stem, output_ext)
}

/// List regular files directly inside `dir` whose names end with `template_ext`.
///
/// Results are sorted by file name so batch order does not depend on the
/// filesystem.
pub fn discover_pages(dir: &Path, template_ext: &str, output_ext: &str) -> Result<Vec<PageSource>> {
    let entries = fs::read_dir(dir).map_err(|source| BuildError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BuildError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        if name.ends_with(template_ext) {
            pages.push(PageSource::new(path, name, template_ext, output_ext));
        }
    }

    pages.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Discovered {} templates in {}", pages.len(), dir.display());

    Ok(pages)
}
