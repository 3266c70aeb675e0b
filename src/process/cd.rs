use crate::error::{ShellError, ShellResult};
use crate::process::builtin::Builtin;
use crate::shell_state::ShellState;
use std::io::Write;

/// `cd DIR`: change the shell's working directory.
///
/// Exactly one operand is required. On failure the directory is left as it
/// was and the OS diagnostic is reported.
pub struct Cd;

impl Builtin for Cd {
    fn call(&self, argv: &[String], shell: &mut ShellState, _out: &mut dyn Write) -> ShellResult<()> {
        let target = match argv {
            [_] => return Err(ShellError::argument("cd", "missing directory argument")),
            [_, target] => target,
            _ => return Err(ShellError::argument("cd", "too many arguments")),
        };

        shell
            .change_dir(target)
            .map(|_| ())
            .map_err(|source| ShellError::OsState {
                context: format!("cd: {target}"),
                source,
            })
    }
}
