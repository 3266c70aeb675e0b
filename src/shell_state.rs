//! Process-wide state shared by every builtin invocation.

use crate::os::{
    OsWorkingDirectory, ProcessTable, SystemProcessTable, WorkingDirectory,
};
use normalize_path::NormalizePath;
use std::io;
use std::path::{Path, PathBuf};

/// Working-directory notion, process collaborator and termination flag.
pub struct ShellState {
    workdir: Box<dyn WorkingDirectory>,
    processes: Box<dyn ProcessTable>,
    terminated: bool,
}

impl ShellState {
    /// State backed by the real OS collaborators.
    pub fn new() -> Self {
        Self::with_providers(
            Box::new(OsWorkingDirectory),
            Box::new(SystemProcessTable::default()),
        )
    }

    pub fn with_providers(
        workdir: Box<dyn WorkingDirectory>,
        processes: Box<dyn ProcessTable>,
    ) -> Self {
        Self {
            workdir,
            processes,
            terminated: false,
        }
    }

    pub fn current_dir(&self) -> io::Result<PathBuf> {
        self.workdir.current()
    }

    /// Change directory to `target`, relative to the current directory unless
    /// absolute. `.` and `..` are folded logically. The state is untouched when
    /// the provider refuses the change.
    pub fn change_dir(&mut self, target: &str) -> io::Result<PathBuf> {
        let target = Path::new(target);
        let resolved = if target.is_absolute() {
            target.normalize()
        } else {
            self.workdir.current()?.join(target).normalize()
        };
        self.workdir.change(&resolved)?;
        Ok(resolved)
    }

    pub fn processes(&self) -> &dyn ProcessTable {
        self.processes.as_ref()
    }

    pub fn processes_mut(&mut self) -> &mut dyn ProcessTable {
        self.processes.as_mut()
    }

    pub fn terminate(&mut self) {
        self.terminated = true;
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
