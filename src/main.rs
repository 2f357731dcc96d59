use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tablakit::{AppError, IndexOptions, TempoOptions};

#[derive(Parser)]
#[command(name = "tablakit")]
#[command(version)]
#[command(
    about = "Fetch tabla stroke samples, index sound folders, and batch tempo-shift loops",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the stroke-sample table into the sounds directory
    #[clap(visible_alias = "f")]
    Fetch {
        /// Directory to write samples to (overrides tablakit.toml)
        #[arg(long)]
        sounds_dir: Option<PathBuf>,
    },
    /// Write a JSON index of audio filenames in a directory
    #[clap(visible_alias = "x")]
    Index {
        /// Directory to scan (overrides tablakit.toml)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Output path for the JSON document (overrides tablakit.toml)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Extension to match, with or without the leading dot
        #[arg(long)]
        ext: Option<String>,
        /// Emit an object keyed by file stem instead of an array
        #[arg(long)]
        map: bool,
    },
    /// Batch tempo-shift loops through the editor's scripting pipe
    #[clap(visible_alias = "t")]
    Tempo {
        /// Directory of loops to process (overrides tablakit.toml)
        #[arg(long)]
        input_dir: Option<PathBuf>,
        /// Directory exports are written to (overrides tablakit.toml)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Check that the editor's scripting pipe is reachable
    #[clap(visible_alias = "d")]
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Fetch { sounds_dir } => tablakit::fetch(sounds_dir).map(|_| ()),
        Commands::Index { dir, out, ext, map } => {
            tablakit::index(IndexOptions { dir, out, ext, map }).map(|_| ())
        }
        Commands::Tempo { input_dir, output_dir } => {
            tablakit::tempo(TempoOptions { input_dir, output_dir }).map(|_| ())
        }
        Commands::Doctor => tablakit::doctor(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
