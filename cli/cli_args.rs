use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codex",
    author,
    version,
    about = "Concatenate a project's source files into a single text file.",
    long_about = "codex walks a project directory and writes every file not matched by the \nexclusion lists in <dir>/codex.yml into one text artifact, each file preceded \nby a '##### <path> #####' header. 'init' generates codex.yml from the detected \nproject type (nodejs, python, go, java or default).",
    help_template = "{about-section}\nUsage: {usage}\n\n{all-args}{after-help}",
    after_help = "EXAMPLES:\n  codex init ./proj\n  codex run ./proj --output proj.txt\n  codex show ./proj -f json",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        help = "Silence informational messages; errors are still printed."
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(about = "Detect the project type and write <DIRECTORY>/codex.yml.")]
    Init(InitArgs),

    #[command(about = "Concatenate all non-excluded files under <DIRECTORY> into one file.")]
    Run(RunArgs),

    #[command(
        visible_alias = "s",
        about = "Show the detected project type and effective exclusion lists."
    )]
    Show(ShowArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(value_name = "DIRECTORY", help = "Project directory to initialize.")]
    pub directory: String,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(value_name = "DIRECTORY", help = "Project directory to walk.")]
    pub directory: String,

    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "code.txt",
        help = "Path to the output file."
    )]
    pub output: PathBuf,

    #[arg(
        short,
        long,
        value_name = "CONFIG_FILE",
        help = "Read exclusions from this file instead of <DIRECTORY>/codex.yml."
    )]
    pub config: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[arg(value_name = "DIRECTORY", help = "Project directory to inspect.")]
    pub directory: String,

    #[arg(
        short,
        long,
        value_name = "CONFIG_FILE",
        help = "Read exclusions from this file instead of <DIRECTORY>/codex.yml."
    )]
    pub config: Option<String>,

    #[arg(short = 'f', long, help = "Set the output format.", value_name = "FORMAT", value_parser = ["yaml", "json"], default_value = "yaml")]
    pub format: String,
}
