//! Download the stroke-sample table into the sounds directory.

use std::fs;

use crate::domain::{AppError, FetchConfig, STROKE_SAMPLES};
use crate::ports::SampleFetcher;

/// Per-run download tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOutcome {
    pub downloaded: usize,
    pub failed: usize,
}

/// Download every table entry, one at a time, in table order.
///
/// A failed entry is reported and skipped; it never blocks the remaining
/// downloads. Existing artifacts are overwritten.
pub fn execute<F: SampleFetcher>(
    config: &FetchConfig,
    fetcher: &F,
) -> Result<FetchOutcome, AppError> {
    fs::create_dir_all(&config.sounds_dir)?;

    let mut outcome = FetchOutcome { downloaded: 0, failed: 0 };
    for sample in &STROKE_SAMPLES {
        let artifact = sample.artifact_name();
        let url = match config.sample_url(sample) {
            Ok(url) => url,
            Err(err) => {
                eprintln!("Failed to resolve URL for {}: {}", artifact, err);
                outcome.failed += 1;
                continue;
            }
        };
        let dest = config.sounds_dir.join(&artifact);
        match fetcher.download(&url, &dest) {
            Ok(bytes) => {
                println!("Downloaded {} ({} bytes)", artifact, bytes);
                outcome.downloaded += 1;
            }
            Err(err) => {
                eprintln!("Failed to download {}: {}", artifact, err);
                outcome.failed += 1;
            }
        }
    }
    Ok(outcome)
}
