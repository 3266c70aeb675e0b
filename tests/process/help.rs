use crate::support::{fake_shell, run_builtin};
use std::path::Path;

#[test]
fn help_lists_every_builtin_once() {
    let mut shell = fake_shell(Path::new("/"));
    let (result, output) = run_builtin(&mut shell, &["help"]);

    assert!(result.is_ok());
    for name in ["cd", "echo", "help", "history", "kill", "ps", "pwd"] {
        let rows = output
            .lines()
            .filter(|line| line.split_whitespace().next() == Some(name))
            .count();
        assert_eq!(rows, 1, "{name} listed {rows} times");
    }
    assert!(output.contains("join programs with '|'"));
}
