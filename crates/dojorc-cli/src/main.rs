//! dojorc CLI - read and write command settings in a project's `.dojorc`
//!
//! Provides `dojorc get`, `dojorc save`, `dojorc set` and `dojorc path`.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dojorc_core::{ConfigStore, PkgDirResolver, DEFAULT_FILE_NAME};

#[derive(Parser)]
#[command(name = "dojorc")]
#[command(about = "dojorc - project-local command configuration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory to start the package search from (defaults to current directory)
    #[arg(long, global = true, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// Config file name inside the package root
    #[arg(long, global = true, default_value = DEFAULT_FILE_NAME)]
    file_name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the config stored for a command
    Get {
        /// Command name
        command: String,
    },
    /// Merge a JSON object into a command's config
    Save {
        /// Command name
        command: String,
        /// JSON object to merge, e.g. '{"mode":"dist"}'
        json: String,
    },
    /// Merge KEY=VALUE pairs into a command's config
    Set {
        /// Command name
        command: String,
        /// Pairs to merge; values are parsed as JSON when possible
        #[arg(value_name = "KEY=VALUE", required = true)]
        pairs: Vec<String>,
    },
    /// Print the resolved config file path
    Path,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let resolver = match cli.cwd {
        Some(dir) => PkgDirResolver::from_dir(dir),
        None => PkgDirResolver::new(),
    };
    let store = ConfigStore::new(resolver).with_file_name(cli.file_name);

    let result = match cli.command {
        Commands::Get { command } => commands::settings::get(&store, &command),
        Commands::Save { command, json } => commands::settings::save(&store, &command, &json),
        Commands::Set { command, pairs } => commands::settings::set(&store, &command, &pairs),
        Commands::Path => commands::settings::path(&store),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
