use crate::config::Config;
use crate::error::{AppError, Result};
use crate::matcher::{ExclusionMatcher, Verdict};
use log;
use std::fs;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

/// Counters reported after a successful walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatherSummary {
    pub files_written: usize,
    pub files_skipped: usize,
    pub folders_pruned: usize,
    pub bytes_written: u64,
}

/// Writes one aggregation record: header, blank line, raw bytes, two newlines.
pub fn write_record<W: Write>(out: &mut W, path: &Path, content: &[u8]) -> std::io::Result<()> {
    write!(out, "##### {} #####\n\n", path.display())?;
    out.write_all(content)?;
    out.write_all(b"\n\n")
}

/// Walks `root` depth-first and appends every non-excluded file to `out`.
///
/// Any walk or read error stops the walk immediately; `out` may then hold a
/// partial artifact. Flushing is left to the caller.
pub fn gather_into<W: Write>(root: &Path, config: &Config, out: &mut W) -> Result<GatherSummary> {
    let matcher = ExclusionMatcher::new(config);
    let mut summary = GatherSummary::default();

    log::debug!("Walking project directory: {}", root.display());
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();

    while let Some(entry_result) = walker.next() {
        let entry = entry_result.map_err(|e| {
            log::error!(
                "Error accessing path {}: {}",
                e.path()
                    .map_or_else(|| root.display().to_string(), |p| p.display().to_string()),
                e
            );
            AppError::Traversal(e)
        })?;
        let path = entry.path();
        let is_dir = entry.file_type().is_dir();

        match matcher.verdict(path, is_dir) {
            Verdict::SkipSubtree => {
                log::info!("Skipping folder: {}", path.display());
                summary.folders_pruned += 1;
                walker.skip_current_dir();
            }
            Verdict::SkipFile => {
                log::info!("Skipping file: {}", path.display());
                summary.files_skipped += 1;
            }
            Verdict::Include if is_dir => {
                log::trace!("Descending into: {}", path.display());
            }
            Verdict::Include => {
                log::info!("Processing file: {}", path.display());
                let content = fs::read(path).map_err(|e| {
                    log::error!("Failed to read file {}: {}", path.display(), e);
                    AppError::FileRead {
                        path: path.to_path_buf(),
                        source: e,
                    }
                })?;
                write_record(out, path, &content)?;
                summary.files_written += 1;
                summary.bytes_written += content.len() as u64;
            }
        }
    }

    log::debug!("Walk complete: {:?}", summary);
    Ok(summary)
}
