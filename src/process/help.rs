use crate::error::ShellResult;
use crate::process::builtin::{BUILTINS, Builtin};
use crate::shell_state::ShellState;
use std::io::Write;

/// Builtin that lists the shell's own commands.
pub struct Help;

impl Builtin for Help {
    fn call(&self, _argv: &[String], _shell: &mut ShellState, out: &mut dyn Write) -> ShellResult<()> {
        let width = BUILTINS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, summary) in BUILTINS {
            writeln!(out, "  {name:<width$}  {summary}")?;
        }
        writeln!(out)?;
        writeln!(out, "Anything else runs as a program; join programs with '|'.")?;
        Ok(())
    }
}
