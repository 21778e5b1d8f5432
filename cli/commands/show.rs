use crate::cli_args::ShowArgs;
use crate::output::print_data;
use crate::{ConfigSource, load_config_for_command, resolve_directory};
use anyhow::{Context, Result};
use codex_core::ProjectType;
use log;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    directory: String,
    project_type: ProjectType,
    config_source: String,
    #[serde(rename = "ExcludeFolders")]
    exclude_folders: &'a [String],
    #[serde(rename = "ExcludeFiles")]
    exclude_files: &'a [String],
}

pub fn handle_show_command(args: &ShowArgs) -> Result<()> {
    let project_dir = resolve_directory(&args.directory);
    log::debug!("Inspecting project directory: {}", project_dir.display());

    let loaded = load_config_for_command(&project_dir, args.config.as_ref())
        .context("Failed to load configuration for show command")?;

    let config_source = match &loaded.source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Generated => "generated".to_string(),
    };
    let data = ShowOutput {
        directory: project_dir.display().to_string(),
        project_type: loaded.project_type,
        config_source,
        exclude_folders: &loaded.config.exclude_folders,
        exclude_files: &loaded.config.exclude_files,
    };

    print_data(&data, &args.format)
}
