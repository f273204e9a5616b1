//! Site generation: merges `master.html` with every `*.part.html` in a
//! directory and writes the resulting pages.

use std::fs;
use std::path::{Path, PathBuf};

use pacsite_types::SiteConfig;
use pacsite_util::output_name_for_part;
use tracing::{debug, info};

use crate::error::{Result, SiteError};
use crate::page::{PageTemplate, assemble_page};

/// Default name of the shared master page.
pub const DEFAULT_MASTER_NAME: &str = "master.html";

/// Where to read templates from and where to write pages to.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub source_dir: PathBuf,
    /// Defaults to `source_dir` when `None`.
    pub output_dir: Option<PathBuf>,
    pub master_name: String,
}

impl BuildOptions {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: None,
            master_name: DEFAULT_MASTER_NAME.to_string(),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn with_master_name(mut self, master_name: impl Into<String>) -> Self {
        self.master_name = master_name.into();
        self
    }

    fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.source_dir)
    }
}

/// Pages written by [`build_site`], in the order they were generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
}

/// Generates `x.html` for every `x.part.html` in `options.source_dir`.
///
/// Part files are processed in file-name order. Each page's navigation bar
/// emphasizes the page itself.
///
/// # Errors
///
/// Fails before writing anything if a part file would be written over the
/// master page. Otherwise fails on the first unreadable template, malformed
/// section, unknown placeholder or unwritable output file; pages written
/// before the failure remain on disk.
pub fn build_site(options: &BuildOptions, site: &SiteConfig) -> Result<BuildReport> {
    let master_path = options.source_dir.join(&options.master_name);
    let master = PageTemplate::parse(&read_file(&master_path)?)?;

    let output_dir = options.output_dir();
    fs::create_dir_all(output_dir).map_err(|error| SiteError::io(output_dir, error))?;

    let parts = list_part_files(&options.source_dir)?;
    reject_master_overwrite(&parts, output_dir, &master_path)?;

    let mut report = BuildReport::default();
    for (part_path, page_name) in parts {
        debug!(part = %part_path.display(), page = %page_name, "rendering page");
        let part = PageTemplate::parse(&read_file(&part_path)?)?;
        let page = assemble_page(&master, &part).expand(site, &page_name)?;

        let output_path = output_dir.join(&page_name);
        fs::write(&output_path, page.to_html())
            .map_err(|error| SiteError::io(&output_path, error))?;
        debug!(path = %output_path.display(), "wrote page");
        report.written.push(output_path);
    }

    if report.written.is_empty() {
        info!(dir = %options.source_dir.display(), "no part files found");
    }
    Ok(report)
}

/// Fails if any part's output path resolves to the master page.
fn reject_master_overwrite(
    parts: &[(PathBuf, String)],
    output_dir: &Path,
    master_path: &Path,
) -> Result<()> {
    let canonical_master = canonicalize(master_path)?;
    let canonical_output = canonicalize(output_dir)?;
    match parts
        .iter()
        .find(|(_, page_name)| canonical_output.join(page_name) == canonical_master)
    {
        Some((part_path, _)) => Err(SiteError::OverwritesMaster {
            part: part_path.clone(),
            master: master_path.to_path_buf(),
        }),
        None => Ok(()),
    }
}

/// Part files in `dir` paired with their output page names, sorted by file name.
fn list_part_files(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let entries = fs::read_dir(dir).map_err(|error| SiteError::io(dir, error))?;
    let mut parts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|error| SiteError::io(dir, error))?;
        let file_type = entry
            .file_type()
            .map_err(|error| SiteError::io(entry.path(), error))?;
        if !file_type.is_file() {
            continue;
        }
        let Some(page_name) = entry.file_name().to_str().and_then(output_name_for_part) else {
            continue;
        };
        parts.push((entry.path(), page_name));
    }
    parts.sort();
    Ok(parts)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|error| SiteError::io(path, error))
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|error| SiteError::io(path, error))
}
