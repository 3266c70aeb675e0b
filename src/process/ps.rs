use crate::error::{ShellError, ShellResult};
use crate::process::builtin::Builtin;
use crate::shell_state::ShellState;
use std::io::Write;

/// `ps`: list running processes as name and PID, in the order the system
/// reports them.
pub struct Ps;

impl Builtin for Ps {
    fn call(&self, argv: &[String], shell: &mut ShellState, out: &mut dyn Write) -> ShellResult<()> {
        if argv.len() > 1 {
            return Err(ShellError::argument("ps", "too many arguments"));
        }

        let processes = shell
            .processes()
            .processes()
            .map_err(|source| ShellError::OsState {
                context: String::from("ps"),
                source,
            })?;

        for process in processes {
            writeln!(
                out,
                "Process name: {}, Process ID: {}",
                process.name, process.pid
            )?;
        }
        Ok(())
    }
}
