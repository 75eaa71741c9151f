use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "teamsim", version, about = "Simulated IT project team backed by LLM role agents")]
pub struct Cli {
    /// Problem to solve (runs once, non-interactively; omit for the interactive loop)
    #[arg(long)]
    pub problem: Option<String>,

    /// Agent selection token: ba, designer, dev, test, it, coder, both or all
    #[arg(long)]
    pub agents: Option<String>,

    /// Model name (e.g. "gemini-1.5-pro-latest")
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to config file (overrides default search)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the single-page web form
    Serve {
        /// Bind address (e.g. "127.0.0.1:8080")
        #[arg(short, long)]
        bind: Option<String>,
    },
}
