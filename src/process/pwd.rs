use crate::error::{ShellError, ShellResult};
use crate::process::builtin::Builtin;
use crate::shell_state::ShellState;
use std::io::Write;

/// `pwd`: print the working directory. Takes no operands.
pub struct Pwd;

impl Builtin for Pwd {
    fn call(&self, argv: &[String], shell: &mut ShellState, out: &mut dyn Write) -> ShellResult<()> {
        if argv.len() > 1 {
            return Err(ShellError::argument("pwd", "too many arguments"));
        }

        let cwd = shell.current_dir().map_err(|source| ShellError::OsState {
            context: String::from("pwd"),
            source,
        })?;
        writeln!(out, "{}", cwd.display())?;
        Ok(())
    }
}
