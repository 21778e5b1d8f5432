use crate::cli_args::InitArgs;
use crate::resolve_directory;
use anyhow::{Context, Result};
use log;
use codex_core::{Config, detect_project_type};

pub fn handle_init_command(args: &InitArgs) -> Result<()> {
    let project_dir = resolve_directory(&args.directory);

    let project_type = detect_project_type(&project_dir);
    let config = project_type.default_config();
    let config_path = Config::path_in(&project_dir);

    config
        .save_to_path(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    log::info!(
        "Generated {} for {} project in {}",
        codex_core::CONFIG_FILENAME,
        project_type,
        config_path.display()
    );
    Ok(())
}
