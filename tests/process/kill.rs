use crate::support::{FakeProcessTable, FakeWorkingDirectory, run_builtin};
use conduit::ShellError;
use conduit::shell_state::ShellState;

fn shell_with(table: FakeProcessTable) -> ShellState {
    ShellState::with_providers(Box::new(FakeWorkingDirectory::new("/")), Box::new(table))
}

fn assert_kill_argument(result: conduit::ShellResult<()>, expected: &str) {
    match result {
        Err(ShellError::Argument { command, message }) => {
            assert_eq!(command, "kill");
            assert_eq!(message, expected);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn non_numeric_pid_is_rejected_without_signalling() {
    let table = FakeProcessTable::default().with_process("sleep", 42);
    let calls = table.terminated();
    let mut shell = shell_with(table);

    let (result, _) = run_builtin(&mut shell, &["kill", "abc"]);

    assert_kill_argument(result, "invalid PID");
    assert!(calls.borrow().is_empty());
}

#[test]
fn arity_is_checked_before_parsing() {
    let table = FakeProcessTable::default();
    let calls = table.terminated();
    let mut shell = shell_with(table);

    let (result, _) = run_builtin(&mut shell, &["kill"]);
    assert_kill_argument(result, "missing PID argument");

    let (result, _) = run_builtin(&mut shell, &["kill", "1", "2"]);
    assert_kill_argument(result, "too many arguments");

    let (result, _) = run_builtin(&mut shell, &["kill", "0"]);
    assert_kill_argument(result, "invalid PID");

    assert!(calls.borrow().is_empty());
}

#[test]
fn valid_pid_is_signalled_once() {
    let table = FakeProcessTable::default().with_process("sleep", 42);
    let calls = table.terminated();
    let mut shell = shell_with(table);

    let (result, output) = run_builtin(&mut shell, &["kill", "42"]);

    assert!(result.is_ok());
    assert!(output.is_empty());
    assert_eq!(*calls.borrow(), vec![42]);
}

#[test]
fn os_failure_is_surfaced() {
    let table = FakeProcessTable::default();
    let mut shell = shell_with(table);

    let (result, _) = run_builtin(&mut shell, &["kill", "99999"]);

    match result {
        Err(err @ ShellError::OsState { .. }) => {
            assert!(err.to_string().starts_with("kill: (99999): "));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[cfg(target_os = "linux")]
#[test]
fn killed_process_disappears_from_ps() {
    use conduit::os::{OsWorkingDirectory, SystemProcessTable};
    use std::process::Command;

    let mut child = Command::new("sleep").arg("30").spawn().unwrap();
    let pid = child.id().to_string();
    let mut shell = ShellState::with_providers(
        Box::new(OsWorkingDirectory),
        Box::new(SystemProcessTable::default()),
    );

    let listed = |shell: &mut ShellState| {
        let (result, output) = run_builtin(shell, &["ps"]);
        assert!(result.is_ok());
        output
            .lines()
            .any(|line| line.ends_with(&format!("Process ID: {pid}")))
    };

    assert!(listed(&mut shell));

    let (result, _) = run_builtin(&mut shell, &["kill", pid.as_str()]);
    assert!(result.is_ok());

    let status = child.wait().unwrap();
    assert!(!status.success());
    assert!(!listed(&mut shell));
}
