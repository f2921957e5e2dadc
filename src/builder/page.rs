// ABOUTME: Single page build: read a template, render it and write the output
// ABOUTME: Output is staged in a temporary file and moved into place only on success

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::debug;

use super::error::{BuildError, Result};
use super::source::PageSource;
use crate::template::{PageContext, TemplateEngine};

/// A page that rendered and was written successfully
#[derive(Debug, Clone)]
pub struct BuiltPage {
    pub name: String,
    pub output_path: PathBuf,
    pub elapsed: Duration,
}

/// Render `source` with `context` into `output_dir`.
///
/// A failure leaves any previous output file untouched and never leaves a
/// partially written one behind.
pub fn build_page(
    engine: &mut TemplateEngine,
    context: &PageContext,
    source: &PageSource,
    output_dir: &Path,
) -> Result<BuiltPage> {
    let output_path = output_dir.join(&source.output_name);

    let content = read_template(&source.path)?;

    let mut staged = NamedTempFile::new_in(output_dir).map_err(|e| BuildError::WriteOutput {
        path: output_path.clone(),
        source: e,
    })?;

    let started = Instant::now();

    let template = engine
        .compile(&content)
        .map_err(|e| BuildError::Parse {
            page: source.name.clone(),
            source: e,
        })?;

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        engine
            .render_to_write(&source.name, template, context, &mut writer)
            .map_err(|e| BuildError::Execute {
                page: source.name.clone(),
                source: e,
            })?;
        writer.flush().map_err(|e| BuildError::WriteOutput {
            path: output_path.clone(),
            source: e,
        })?;
    }

    let elapsed = started.elapsed();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staged.path(), fs::Permissions::from_mode(0o644)).map_err(|e| {
            BuildError::WriteOutput {
                path: output_path.clone(),
                source: e,
            }
        })?;
    }

    staged
        .persist(&output_path)
        .map_err(|e| BuildError::WriteOutput {
            path: output_path.clone(),
            source: e.error,
        })?;

    let output_path = fs::canonicalize(&output_path).unwrap_or(output_path);
    debug!(
        "Rendered {} to {} in {:?}",
        source.name,
        output_path.display(),
        elapsed
    );

    Ok(BuiltPage {
        name: source.name.clone(),
        output_path,
        elapsed,
    })
}

fn read_template(path: &Path) -> Result<String> {
    let mut content = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut content))
        .map_err(|e| BuildError::ReadTemplate {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(content)
}
