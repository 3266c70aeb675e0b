use crate::support::{FakeProcessTable, FakeWorkingDirectory, run_builtin};
use conduit::ShellError;
use conduit::shell_state::ShellState;

#[test]
fn ps_lists_name_and_pid_for_every_process() {
    let table = FakeProcessTable::default()
        .with_process("init", 1)
        .with_process("sshd", 812);
    let mut shell =
        ShellState::with_providers(Box::new(FakeWorkingDirectory::new("/")), Box::new(table));

    let (result, output) = run_builtin(&mut shell, &["ps"]);

    assert!(result.is_ok());
    assert_eq!(
        output,
        "Process name: init, Process ID: 1\nProcess name: sshd, Process ID: 812\n"
    );
}

#[test]
fn ps_takes_no_operands() {
    let table = FakeProcessTable::default().with_process("init", 1);
    let mut shell =
        ShellState::with_providers(Box::new(FakeWorkingDirectory::new("/")), Box::new(table));

    let (result, output) = run_builtin(&mut shell, &["ps", "-ef"]);

    assert!(matches!(
        result,
        Err(ShellError::Argument {
            command: "ps",
            message: "too many arguments"
        })
    ));
    assert!(output.is_empty());
}
