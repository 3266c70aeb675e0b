use crate::support::{
    FakeProcessTable, FakeWorkingDirectory, canonical_path, run_builtin,
};
use conduit::ShellError;
use conduit::os::OsWorkingDirectory;
use conduit::shell_state::ShellState;
use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn lock_env<'a>() -> MutexGuard<'a, ()> {
    match ENV_LOCK.lock() {
        Ok(guard) => guard,
        Err(poison) => poison.into_inner(),
    }
}

/// Restores the process working directory when dropped.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new() -> Self {
        Self {
            original_dir: env::current_dir().unwrap(),
        }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        env::set_current_dir(&self.original_dir).ok();
    }
}

fn fake_shell_with_dirs(start: &str, dirs: &[&str]) -> ShellState {
    let workdir = dirs
        .iter()
        .fold(FakeWorkingDirectory::new(start), |wd, dir| wd.with_dir(*dir));
    ShellState::with_providers(Box::new(workdir), Box::new(FakeProcessTable::default()))
}

fn assert_argument_error(result: conduit::ShellResult<()>, expected: &str) {
    match result {
        Err(ShellError::Argument { command, message }) => {
            assert_eq!(command, "cd");
            assert_eq!(message, expected);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn cd_requires_a_directory() {
    let mut shell = fake_shell_with_dirs("/home", &[]);
    let (result, _) = run_builtin(&mut shell, &["cd"]);
    assert_argument_error(result, "missing directory argument");
}

#[test]
fn cd_rejects_extra_operands() {
    let mut shell = fake_shell_with_dirs("/home", &["/tmp"]);
    let (result, _) = run_builtin(&mut shell, &["cd", "/tmp", "/var"]);
    assert_argument_error(result, "too many arguments");
    assert_eq!(shell.current_dir().unwrap(), Path::new("/home"));
}

#[test]
fn cd_to_missing_directory_keeps_the_previous_one() {
    let mut shell = fake_shell_with_dirs("/home", &[]);
    let (result, _) = run_builtin(&mut shell, &["cd", "/does/not/exist"]);

    match result {
        Err(err @ ShellError::OsState { .. }) => {
            assert!(err.to_string().starts_with("cd: /does/not/exist: "));
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let (_, output) = run_builtin(&mut shell, &["pwd"]);
    assert_eq!(output, "/home\n");
}

#[test]
fn cd_resolves_relative_paths_against_the_current_directory() {
    let mut shell = fake_shell_with_dirs("/home", &["/home/user", "/srv"]);

    let (result, _) = run_builtin(&mut shell, &["cd", "user"]);
    assert!(result.is_ok());
    assert_eq!(shell.current_dir().unwrap(), Path::new("/home/user"));

    let (result, _) = run_builtin(&mut shell, &["cd", "../../srv/."]);
    assert!(result.is_ok());
    assert_eq!(shell.current_dir().unwrap(), Path::new("/srv"));
}

#[test]
fn cd_changes_the_process_directory_with_the_os_provider() {
    let _guard = lock_env();
    let _cwd = CwdGuard::new();
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("nested");
    fs::create_dir_all(&target).unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();

    let mut shell = ShellState::with_providers(
        Box::new(OsWorkingDirectory),
        Box::new(FakeProcessTable::default()),
    );
    let (result, _) = run_builtin(&mut shell, &["cd", "nested"]);

    assert!(result.is_ok());
    assert_eq!(
        canonical_path(&env::current_dir().unwrap()),
        canonical_path(&target)
    );
}
