//! Probe the scripting console and report reachability.

use crate::domain::AppError;
use crate::ports::ScriptingConsole;

/// Send a `Help:` probe over an already-connected console and echo the
/// response. Connection failures surface earlier, when the console is opened.
pub fn execute<C: ScriptingConsole>(console: &mut C) -> Result<(), AppError> {
    let response = console.send_command("Help:")?;
    println!("Console responded: {}", response);
    Ok(())
}
