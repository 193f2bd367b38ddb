mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use planboard_core::paths::DEFAULT_PORT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "planboard",
    about = "Monthly plan board — flat-file plan tracking with a web UI",
    version,
    propagate_version = true
)]
struct Cli {
    /// Site root holding data.json, goals.json, and the front-end
    /// (default: auto-detect from data.json, else current directory)
    #[arg(long, global = true, env = "PLANBOARD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// List all plans
    List,

    /// Add a plan with the given title
    Add { title: String },

    /// Replace the collection with a JSON array read from a file
    Import { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Serve { port, no_open } => cmd::serve::run(&root, port, no_open),
        Commands::List => cmd::list::run(&root, cli.json),
        Commands::Add { title } => cmd::add::run(&root, &title, cli.json),
        Commands::Import { file } => cmd::import::run(&root, &file),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
