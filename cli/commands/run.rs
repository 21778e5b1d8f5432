use crate::cli_args::RunArgs;
use crate::{load_config_for_command, resolve_directory};
use anyhow::{Context, Result};
use codex_core::{AppError, gather_into};
use log;
use std::fs::File;
use std::io::{BufWriter, Write};

pub fn handle_run_command(args: &RunArgs) -> Result<()> {
    let project_dir = resolve_directory(&args.directory);

    let loaded = load_config_for_command(&project_dir, args.config.as_ref())
        .context("Failed to load configuration")?;
    log::debug!("Effective exclusions: {:?}", loaded.config);

    let file = File::create(&args.output)
        .map_err(|e| AppError::OutputCreate {
            path: args.output.clone(),
            source: e,
        })
        .context("Failed to create output file")?;
    let mut writer = BufWriter::new(file);

    let summary = match gather_into(&project_dir, &loaded.config, &mut writer) {
        Ok(summary) => summary,
        Err(e) => {
            if e.is_traversal() {
                log::warn!("Output file {} may be incomplete", args.output.display());
            }
            return Err(e)
                .with_context(|| format!("Error walking the path {}", project_dir.display()));
        }
    };
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {}", args.output.display()))?;

    log::info!(
        "Wrote {} files ({} bytes), skipped {} files and {} folders",
        summary.files_written,
        summary.bytes_written,
        summary.files_skipped,
        summary.folders_pruned
    );
    log::info!("All code has been extracted to {}", args.output.display());
    Ok(())
}
