use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Source of truth for the shell's working directory.
///
/// The shell never shadows the directory itself; it asks the provider every
/// time so that a fake can stand in for the process-wide OS state in tests.
pub trait WorkingDirectory {
    fn current(&self) -> io::Result<PathBuf>;

    /// Switch to `path`, which is always absolute and already normalised.
    fn change(&mut self, path: &Path) -> io::Result<()>;
}

/// Provider backed by the process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsWorkingDirectory;

impl WorkingDirectory for OsWorkingDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn change(&mut self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }
}
