use crate::support::{fake_shell, run_builtin};
use std::path::Path;

#[test]
fn echo_joins_arguments_with_single_spaces() {
    let mut shell = fake_shell(Path::new("/"));
    let (result, output) = run_builtin(&mut shell, &["echo", "a", "b", "c"]);
    assert!(result.is_ok());
    assert_eq!(output, "a b c\n");
}

#[test]
fn echo_alone_prints_a_newline() {
    let mut shell = fake_shell(Path::new("/"));
    let (result, output) = run_builtin(&mut shell, &["echo"]);
    assert!(result.is_ok());
    assert_eq!(output, "\n");
}

#[test]
fn echo_does_not_interpret_options_or_escapes() {
    let mut shell = fake_shell(Path::new("/"));
    let (_, output) = run_builtin(&mut shell, &["echo", "-n", "a\\tb"]);
    assert_eq!(output, "-n a\\tb\n");
}

#[test]
fn echo_called_without_argv_prints_a_newline() {
    use conduit::process::builtin::map::BuiltinMap;

    let mut shell = fake_shell(Path::new("/"));
    let map = BuiltinMap::new(None);
    let mut out = Vec::new();
    map.resolve("echo").unwrap().call(&[], &mut shell, &mut out).unwrap();
    assert_eq!(out, b"\n");
}
