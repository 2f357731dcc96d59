//! Batch tempo-shift loops through the editor's scripting console.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BPM_INCREMENTS, LoopName, TempoConfig};
use crate::ports::{ScriptingConsole, response_ok};

/// Per-run processing tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoOutcome {
    /// Files opened in the editor.
    pub processed: usize,
    /// Files skipped for an unparsable name or a failed open.
    pub skipped: usize,
    /// Export commands acknowledged with the success marker.
    pub exported: usize,
}

/// Process every `.flac` loop in the input directory, one at a time.
///
/// Marker-missing responses are non-fatal: the step is logged and processing
/// moves on. Transport errors on the console propagate and abort the run,
/// since nothing can proceed without the channel.
pub fn execute<C: ScriptingConsole>(
    config: &TempoConfig,
    console: &mut C,
) -> Result<TempoOutcome, AppError> {
    if !config.input_dir.is_dir() {
        return Err(AppError::InputDirMissing(config.input_dir.display().to_string()));
    }
    fs::create_dir_all(&config.output_dir)?;

    let mut outcome = TempoOutcome { processed: 0, skipped: 0, exported: 0 };
    for path in loop_files(&config.input_dir)? {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy().into_owned();
        let name = match LoopName::parse(&file_name) {
            Ok(name) => name,
            Err(err) => {
                eprintln!("Skipping '{}': {}", file_name, err);
                outcome.skipped += 1;
                continue;
            }
        };
        match process_loop(console, &path, &name, &config.output_dir)? {
            Some(exported) => {
                outcome.processed += 1;
                outcome.exported += exported;
            }
            None => outcome.skipped += 1,
        }
    }
    Ok(outcome)
}

/// Sorted `.flac` paths in the input directory.
fn loop_files(input_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.ends_with(".flac") {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// The fixed per-file command sequence: open, select, three stretch/export
/// pairs, close without saving.
///
/// Returns `None` when the editor refused to open the file, otherwise the
/// number of successful exports.
fn process_loop<C: ScriptingConsole>(
    console: &mut C,
    path: &Path,
    name: &LoopName,
    output_dir: &Path,
) -> Result<Option<usize>, AppError> {
    println!("Opening '{}'", path.display());
    let response = console.send_command(&format!("Open: Filename=\"{}\"", path.display()))?;
    if !response_ok(&response) {
        eprintln!("Failed to open '{}': {}", path.display(), response);
        return Ok(None);
    }

    let response = console.send_command("SelectAll:")?;
    if !response_ok(&response) {
        eprintln!("SelectAll failed for '{}': {}", path.display(), response);
    }

    let mut exported = 0;
    for increment in BPM_INCREMENTS {
        let percentage = name.tempo_percentage(increment);
        println!("Stretching {} -> {} bpm (+{})", name.bpm, name.target_bpm(increment), increment);
        let response =
            console.send_command(&format!("ChangeTempo: Percentage={}", percentage))?;
        if !response_ok(&response) {
            eprintln!("ChangeTempo +{} failed for '{}': {}", increment, path.display(), response);
            continue;
        }

        let out_path = output_dir.join(name.export_name(increment));
        let response =
            console.send_command(&format!("Export2: Filename=\"{}\"", out_path.display()))?;
        if response_ok(&response) {
            println!("Exported '{}'", out_path.display());
            exported += 1;
        } else {
            eprintln!("Failed to export '{}': {}", out_path.display(), response);
        }
    }

    let response = console.send_command("Close: Save=0")?;
    if !response_ok(&response) {
        eprintln!("Close failed for '{}': {}", path.display(), response);
    }
    Ok(Some(exported))
}
