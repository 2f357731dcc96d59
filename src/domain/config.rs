//! Configuration loaded from `tablakit.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;
use crate::domain::samples::Sample;

/// Top-level configuration, one table per subcommand.
///
/// Every field is defaulted, so a missing config file is equivalent to an
/// empty one. CLI flags override loaded values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Sample download settings.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Directory index settings.
    #[serde(default)]
    pub index: IndexConfig,
    /// Tempo batch settings, including the scripting pipe endpoints.
    #[serde(default)]
    pub tempo: TempoConfig,
}

impl Config {
    /// Config file name, resolved against the current directory.
    pub const FILE_NAME: &'static str = "tablakit.toml";

    /// Load `tablakit.toml` from the current directory, or defaults if absent.
    pub fn load_or_default() -> Result<Self, AppError> {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load configuration from an explicit path, or defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Settings for the `fetch` subcommand.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Base URL the sample table's remote names are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Directory downloaded samples are written to.
    #[serde(default = "default_sounds_dir")]
    pub sounds_dir: PathBuf,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sounds_dir: default_sounds_dir(),
            timeout_secs: default_timeout(),
        }
    }
}

impl FetchConfig {
    /// Resolve the full download URL for a sample table entry.
    pub fn sample_url(&self, sample: &Sample) -> Result<Url, AppError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(sample.remote_name).map_err(|e| {
            AppError::config_error(format!(
                "Cannot resolve sample URL for '{}': {}",
                sample.name, e
            ))
        })
    }
}

fn default_base_url() -> Url {
    Url::parse("https://cdn.freesound.org/previews/56/").expect("Default CDN URL must be valid")
}

fn default_sounds_dir() -> PathBuf {
    PathBuf::from("sounds")
}

fn default_timeout() -> u64 {
    30
}

/// Settings for the `index` subcommand.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Directory whose filenames are indexed.
    #[serde(default = "default_index_dir")]
    pub dir: PathBuf,
    /// Path the JSON index is written to.
    #[serde(default = "default_index_out")]
    pub out: PathBuf,
    /// Extension to match, without the leading dot.
    #[serde(default = "default_index_ext")]
    pub ext: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { dir: default_index_dir(), out: default_index_out(), ext: default_index_ext() }
    }
}

impl IndexConfig {
    /// The `.ext` suffix filenames must carry to be listed.
    pub fn suffix(&self) -> String {
        format!(".{}", self.ext.trim_start_matches('.'))
    }
}

fn default_index_dir() -> PathBuf {
    PathBuf::from("sounds/taals")
}

fn default_index_out() -> PathBuf {
    PathBuf::from("sounds/taals/taals.json")
}

fn default_index_ext() -> String {
    "flac".to_string()
}

/// Settings for the `tempo` subcommand and the scripting pipe endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TempoConfig {
    /// Directory scanned for loops to process.
    #[serde(default = "default_tempo_input_dir")]
    pub input_dir: PathBuf,
    /// Directory exported variants are written to.
    #[serde(default = "default_tempo_output_dir")]
    pub output_dir: PathBuf,
    /// Pipe endpoint commands are written to.
    #[serde(default = "default_to_pipe")]
    pub to_pipe: PathBuf,
    /// Pipe endpoint responses are read from.
    #[serde(default = "default_from_pipe")]
    pub from_pipe: PathBuf,
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            input_dir: default_tempo_input_dir(),
            output_dir: default_tempo_output_dir(),
            to_pipe: default_to_pipe(),
            from_pipe: default_from_pipe(),
        }
    }
}

fn default_tempo_input_dir() -> PathBuf {
    PathBuf::from("input_audio_files")
}

fn default_tempo_output_dir() -> PathBuf {
    PathBuf::from("processed_audio_output")
}

fn default_to_pipe() -> PathBuf {
    PathBuf::from(r"\\.\pipe\ToAudacity")
}

fn default_from_pipe() -> PathBuf {
    PathBuf::from(r"\\.\pipe\FromAudacity")
}
