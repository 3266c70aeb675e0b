use crate::error::ShellResult;
use crate::process::builtin::Builtin;
use crate::shell_state::ShellState;
use std::io::Write;

/// `echo [ARG]...`: print the operands joined by single spaces.
///
/// No options and no escape processing; `-n` is printed like any other word.
pub struct Echo;

impl Builtin for Echo {
    fn call(&self, argv: &[String], _shell: &mut ShellState, out: &mut dyn Write) -> ShellResult<()> {
        let operands = argv.get(1..).unwrap_or_default();
        writeln!(out, "{}", operands.join(" "))?;
        Ok(())
    }
}
