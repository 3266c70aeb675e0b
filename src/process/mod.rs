//! Shell builtin implementations and process execution helpers.

pub mod builtin;
pub mod cd;
pub mod echo;
pub mod endpoint;
pub mod help;
pub mod history;
pub mod kill;
pub mod launcher;
pub mod pipeline;
pub mod ps;
pub mod pwd;
pub mod welcome;

use crate::error::ShellResult;
use crate::process::builtin::map::BuiltinMap;
use crate::process::endpoint::Terminal;
use crate::shell_state::ShellState;
use crate::tokenize::Pipeline;
use std::io::Write;

/// Execute a parsed line, dispatching to builtins or spawning external
/// processes, and wait for everything it started.
pub fn execute(
    pipeline: &Pipeline,
    builtins: &BuiltinMap,
    shell: &mut ShellState,
    terminal: &Terminal,
    out: &mut dyn Write,
) -> ShellResult<()> {
    if pipeline.is_empty() {
        return Ok(());
    }

    pipeline::run(pipeline, builtins, shell, terminal, out)?.into_result()
}
