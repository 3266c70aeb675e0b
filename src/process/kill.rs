use crate::error::{ShellError, ShellResult};
use crate::process::builtin::Builtin;
use crate::shell_state::ShellState;
use std::io::Write;

/// `kill PID`: send a termination request and return immediately.
///
/// The shell does not wait for, or verify, the target's exit.
pub struct Kill;

impl Builtin for Kill {
    fn call(&self, argv: &[String], shell: &mut ShellState, _out: &mut dyn Write) -> ShellResult<()> {
        let raw = match argv {
            [_] => return Err(ShellError::argument("kill", "missing PID argument")),
            [_, raw] => raw,
            _ => return Err(ShellError::argument("kill", "too many arguments")),
        };

        let pid = parse_pid(raw).ok_or_else(|| ShellError::argument("kill", "invalid PID"))?;

        shell
            .processes_mut()
            .terminate(pid)
            .map_err(|source| ShellError::OsState {
                context: format!("kill: ({pid})"),
                source,
            })
    }
}

/// Only strictly positive PIDs are accepted; 0 and negatives would address
/// process groups.
fn parse_pid(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|pid| *pid > 0)
}
