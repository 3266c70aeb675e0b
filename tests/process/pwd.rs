use crate::support::{fake_shell, run_builtin};
use conduit::ShellError;
use std::path::Path;

#[test]
fn pwd_prints_the_provider_directory() {
    let mut shell = fake_shell(Path::new("/srv/project"));
    let (result, output) = run_builtin(&mut shell, &["pwd"]);
    assert!(result.is_ok());
    assert_eq!(output, "/srv/project\n");
}

#[test]
fn pwd_rejects_operands_without_printing() {
    let mut shell = fake_shell(Path::new("/srv/project"));
    let (result, output) = run_builtin(&mut shell, &["pwd", "-L"]);
    match result {
        Err(ShellError::Argument { command, message }) => {
            assert_eq!(command, "pwd");
            assert_eq!(message, "too many arguments");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(output.is_empty());
}
