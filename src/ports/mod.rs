mod sample_fetcher;
mod scripting_console;

pub use sample_fetcher::{MockSampleFetcher, SampleFetcher};
pub use scripting_console::{MockConsole, SUCCESS_MARKER, ScriptingConsole, response_ok};
