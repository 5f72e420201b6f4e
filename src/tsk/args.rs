use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tsk")]
#[command(about = "Task statistics from a JSON task list", long_about = None)]
pub struct Cli {
    /// Path to the tasks document (defaults to the configured tasks file)
    pub file: Option<PathBuf>,

    /// Keyword for the report's keyword section (overrides the config)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
