//! Operating-system collaborators: working directory, process table and
//! interrupt handling.

pub mod interrupt;
pub mod proctable;
pub mod workdir;

pub use proctable::{ProcessInfo, ProcessTable, SystemProcessTable};
pub use workdir::{OsWorkingDirectory, WorkingDirectory};
