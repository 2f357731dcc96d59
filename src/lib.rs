//! tablakit: fetch tabla stroke samples, index sound folders, and batch
//! tempo-shift practice loops through Audacity's scripting pipe.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::PathBuf;

use adapters::http_sample_fetcher::HttpSampleFetcher;
use adapters::pipe_console::PipeConsole;
use app::commands::{doctor, fetch, index, tempo};
use domain::Config;

pub use app::commands::fetch::FetchOutcome;
pub use app::commands::index::{IndexFormat, IndexOutcome};
pub use app::commands::tempo::TempoOutcome;
pub use domain::AppError;

/// Options for the `index` subcommand; `None` fields fall back to config.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    pub dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub ext: Option<String>,
    pub map: bool,
}

/// Options for the `tempo` subcommand; `None` fields fall back to config.
#[derive(Debug, Clone, Default)]
pub struct TempoOptions {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Download the stroke-sample table into the sounds directory.
pub fn fetch(sounds_dir: Option<PathBuf>) -> Result<FetchOutcome, AppError> {
    let mut config = Config::load_or_default()?;
    if let Some(dir) = sounds_dir {
        config.fetch.sounds_dir = dir;
    }

    let fetcher = HttpSampleFetcher::new(config.fetch.timeout_secs)?;
    let outcome = fetch::execute(&config.fetch, &fetcher)?;
    println!(
        "✅ Downloaded {} of {} samples into {}",
        outcome.downloaded,
        outcome.downloaded + outcome.failed,
        config.fetch.sounds_dir.display()
    );
    Ok(outcome)
}

/// Write a JSON index of matching filenames in a directory.
pub fn index(options: IndexOptions) -> Result<IndexOutcome, AppError> {
    let mut config = Config::load_or_default()?;
    if let Some(dir) = options.dir {
        config.index.dir = dir;
    }
    if let Some(out) = options.out {
        config.index.out = out;
    }
    if let Some(ext) = options.ext {
        config.index.ext = ext;
    }
    let format = if options.map { IndexFormat::Map } else { IndexFormat::Array };

    let outcome = index::execute(&config.index, format)?;
    println!("✅ Indexed {} files into {}", outcome.count, config.index.out.display());
    Ok(outcome)
}

/// Batch tempo-shift every loop in the input directory through the editor.
pub fn tempo(options: TempoOptions) -> Result<TempoOutcome, AppError> {
    let mut config = Config::load_or_default()?;
    if let Some(dir) = options.input_dir {
        config.tempo.input_dir = dir;
    }
    if let Some(dir) = options.output_dir {
        config.tempo.output_dir = dir;
    }

    let mut console = PipeConsole::connect(&config.tempo)?;
    let outcome = tempo::execute(&config.tempo, &mut console)?;
    println!(
        "✅ Processed {} loops ({} skipped, {} exports) into {}",
        outcome.processed,
        outcome.skipped,
        outcome.exported,
        config.tempo.output_dir.display()
    );
    Ok(outcome)
}

/// Check that the editor's scripting console is reachable.
pub fn doctor() -> Result<(), AppError> {
    let config = Config::load_or_default()?;

    let mut console = PipeConsole::connect(&config.tempo)?;
    doctor::execute(&mut console)?;
    println!("✅ Scripting console is reachable");
    Ok(())
}
