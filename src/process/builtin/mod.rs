pub mod map;

use crate::error::ShellResult;
use crate::shell_state::ShellState;
use std::io::Write;

/// Names and one-line summaries of every builtin, in `help` order.
pub const BUILTINS: [(&str, &str); 7] = [
    ("cd", "change the working directory"),
    ("echo", "print arguments separated by spaces"),
    ("help", "list the builtin commands"),
    ("history", "show recently executed lines"),
    ("kill", "request termination of a process by PID"),
    ("ps", "list running processes"),
    ("pwd", "print the working directory"),
];

/// A command executed inside the shell process.
///
/// `argv[0]` is the builtin's own name. Normal output goes to `out`; a failure
/// is returned as an error for the control loop to report, never by exiting.
pub trait Builtin {
    fn call(&self, argv: &[String], shell: &mut ShellState, out: &mut dyn Write)
    -> ShellResult<()>;
}
