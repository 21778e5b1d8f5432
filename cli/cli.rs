mod cli_args;
mod commands;
mod output;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use clap::error::ErrorKind;
use colored::*;
use log;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use cli_args::{Cli, Commands};
use codex_core::{Config, ProjectType, detect_project_type};

fn main() {
    let cli_args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => process::exit(report_usage_error(e)),
    };

    setup_logging(cli_args.quiet, cli_args.verbose);
    log::debug!("CLI args parsed: {:?}", cli_args);

    let exit_code = match run_app(cli_args) {
        Ok(_) => {
            log::debug!("Application finished successfully.");
            0
        }
        Err(e) => {
            log::error!("{:#}", e);
            1
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

/// Usage problems go to stdout and exit 1; explicit --help/--version exit 0.
fn report_usage_error(e: clap::Error) -> i32 {
    println!("{}", e.render());
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let tag = format!("[{}]", record.level());
            let tag = match record.level() {
                log::Level::Error => tag.red().bold(),
                log::Level::Warn => tag.yellow(),
                log::Level::Info => tag.green(),
                _ => tag.dimmed(),
            };
            writeln!(
                buf,
                "{} {} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                tag,
                record.args()
            )
        })
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

fn run_app(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init(args) => {
            log::debug!("Executing 'init' command...");
            commands::init::handle_init_command(&args)?;
        }
        Commands::Run(args) => {
            log::debug!("Executing 'run' command...");
            commands::run::handle_run_command(&args)?;
        }
        Commands::Show(args) => {
            log::debug!("Executing 'show' command...");
            commands::show::handle_show_command(&args)?;
        }
    }
    Ok(())
}

/// Expands a leading `~` in a directory argument.
pub fn resolve_directory(dir_arg: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir_arg).as_ref())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Generated,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub project_type: ProjectType,
}

/// Resolves the exclusion config for `run`/`show`.
///
/// An explicit `--config` file must exist. Otherwise `<dir>/codex.yml` is used
/// when present, and the detected project type's defaults are built in memory
/// when it is not. Nothing is written to disk here.
pub fn load_config_for_command(
    project_dir: &Path,
    cli_config_file: Option<&String>,
) -> Result<LoadedConfig> {
    let project_type = detect_project_type(project_dir);
    log::debug!("Detected project type: {}", project_type);

    let config_path = match cli_config_file {
        Some(p_str) => Some(resolve_directory(p_str)),
        None => {
            let default_path = Config::path_in(project_dir);
            default_path.exists().then_some(default_path)
        }
    };

    match config_path {
        Some(path) => {
            let config = Config::load_from_path(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            log::info!("Using config file: {}", path.display());
            Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path),
                project_type,
            })
        }
        None => {
            log::info!(
                "{} not found in {}, using default settings for {} project",
                codex_core::CONFIG_FILENAME,
                project_dir.display(),
                project_type
            );
            Ok(LoadedConfig {
                config: project_type.default_config(),
                source: ConfigSource::Generated,
                project_type,
            })
        }
    }
}
