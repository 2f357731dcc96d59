//! Loop filename convention: `<label>_<bpm>_<pitch>.<ext>`.

use crate::domain::AppError;

/// BPM increments applied to every loop, in order.
pub const BPM_INCREMENTS: [u32; 3] = [5, 10, 15];

/// Metadata parsed positionally from a loop filename.
///
/// The convention is `<label>_<bpm>_<pitch>.<ext>`; extra `_`-separated
/// segments after the pitch are tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopName {
    pub label: String,
    pub bpm: u32,
    pub pitch: String,
}

impl LoopName {
    /// Parse a file name (with extension) into its loop metadata.
    ///
    /// Fails when fewer than three segments are present, or the bpm segment
    /// is not a positive integer.
    pub fn parse(file_name: &str) -> Result<Self, AppError> {
        let stem = match file_name.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => file_name,
        };
        let parts: Vec<&str> = stem.split('_').collect();
        if parts.len() < 3 {
            return Err(AppError::InvalidLoopName(file_name.to_string()));
        }
        let bpm: u32 =
            parts[1].parse().map_err(|_| AppError::InvalidLoopName(file_name.to_string()))?;
        if bpm == 0 {
            return Err(AppError::InvalidLoopName(file_name.to_string()));
        }
        Ok(Self { label: parts[0].to_string(), bpm, pitch: parts[2].to_string() })
    }

    /// Target tempo after applying an increment.
    pub fn target_bpm(&self, increment: u32) -> u32 {
        self.bpm + increment
    }

    /// Percentage stretch for an increment, relative to the base bpm,
    /// rendered to two decimals (round-to-nearest).
    pub fn tempo_percentage(&self, increment: u32) -> String {
        format!("{:.2}", f64::from(increment) / f64::from(self.bpm) * 100.0)
    }

    /// Export file name for an increment: `<label>_<target>_<pitch>.flac`.
    pub fn export_name(&self, increment: u32) -> String {
        format!("{}_{}_{}.flac", self.label, self.target_bpm(increment), self.pitch)
    }
}
