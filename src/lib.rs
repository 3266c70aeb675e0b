//! A line-oriented command interpreter.
//!
//! Each input line is either a builtin (`cd`, `pwd`, `echo`, `kill`, `ps`,
//! `history`, `help`), an external program, or a `|`-separated chain of
//! programs whose stages run concurrently as separate processes. The
//! [`control`] module drives the interactive loop; [`control_state`] handles
//! one line at a time and is the entry point for embedding and tests.

pub mod complete;
pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod os;
pub mod process;
pub mod shell_state;
pub mod tokenize;

pub use error::{ShellError, ShellResult};
