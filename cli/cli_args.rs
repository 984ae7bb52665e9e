use clap::Parser;
use printmd_core::DEFAULT_CONFIG_FILENAME;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dump a project's file tree and file contents into one Markdown document.",
    long_about = "printmd walks a directory, keeps the files matched by the configured include \npatterns and not matched by the exclude patterns, and writes a Markdown file \nwith a structure listing followed by every file in a fenced code block.",
    after_help = "EXAMPLES:\n  printmd\n  printmd --config ci/print.yaml -o context.md\n  printmd --project-root ../service -v"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        help = "Path to the YAML (or .toml) config file.",
        value_name = "CONFIG_FILE",
        default_value = DEFAULT_CONFIG_FILENAME
    )]
    pub config: PathBuf,

    #[arg(
        long,
        help = "Directory to walk (default: current dir).",
        value_name = "PATH"
    )]
    pub project_root: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Write the document here instead of the configured output_path.",
        value_name = "PATH"
    )]
    pub output: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(short, long, help = "Silence informational messages and warnings.")]
    pub quiet: bool,
}
