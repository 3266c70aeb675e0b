//! Interactive read-eval loop.

use crate::complete::ConduitHelper;
use crate::conf;
use crate::control_state::{ControlFlow, ControlState};
use crate::os::interrupt;
use crate::process::welcome::welcome;
use rustyline::error::ReadlineError;
use rustyline::history::{DefaultHistory, History};
use rustyline::{Config, Editor, Helper};
use std::error::Error;
use std::io::{self, Write};

/// Source of input lines; implemented by rustyline's editor and by scripted
/// editors in tests.
pub trait LineEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;
    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool>;
}

impl<H: Helper, I: History> LineEditor for Editor<H, I> {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        Editor::readline(self, prompt)
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        Editor::add_history_entry(self, entry)
    }
}

/// Load configuration, print the banner and run until `quit` or end-of-input.
pub fn control_loop() -> Result<(), Box<dyn Error>> {
    let config = conf::load();
    let mut state = ControlState::from_config(&config);
    if let Err(e) = interrupt::guard_shell() {
        eprintln!("Warning: unable to install interrupt handler: {e}");
    }
    let mut editor = build_editor(&state, config.control.history_limit())?;

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    if config.ui.welcome() {
        welcome(&mut stdout, state.quit_keyword())?;
    }

    run_loop_with_editor(&mut state, &mut editor, &mut stdout, &mut stderr)?;
    Ok(())
}

/// Read lines from `editor` and dispatch them until the state terminates.
///
/// Ctrl-C discards the current line; end-of-input terminates the session.
pub fn run_loop_with_editor<E: LineEditor>(
    state: &mut ControlState,
    editor: &mut E,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> rustyline::Result<()> {
    while !state.is_terminated() {
        let prompt = state.prompt();
        if let Err(e) = out.flush() {
            warn(err, format_args!("unable to flush output: {e}"));
        }

        match editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = editor.add_history_entry(&line) {
                        warn(err, format_args!("unable to add history entry: {e}"));
                    }
                }
                if state.handle_line(&line, out, err) == ControlFlow::EXIT {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => state.terminate(),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn warn(err: &mut dyn Write, message: std::fmt::Arguments<'_>) {
    let _ = writeln!(err, "Warning: {message}");
}

fn build_editor(
    state: &ControlState,
    history_limit: usize,
) -> rustyline::Result<Editor<ConduitHelper, DefaultHistory>> {
    let config = Config::builder().auto_add_history(false).build();
    let mut editor = Editor::with_config(config)?;
    editor.set_helper(Some(ConduitHelper::new()));

    if let Some(history) = state.history() {
        match history.recent(history_limit) {
            Ok(entries) => {
                for entry in entries {
                    editor.add_history_entry(entry)?;
                }
            }
            Err(e) => eprintln!(
                "Warning: unable to read history file '{}': {e}",
                history.path().display()
            ),
        }
    }

    Ok(editor)
}
