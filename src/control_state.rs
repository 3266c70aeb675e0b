//! State machine backing the interactive control loop.

use crate::conf::ConfigurationModel;
use crate::conf::section::DEFAULT_QUIT_KEYWORD;
use crate::error::ShellError;
use crate::os::{OsWorkingDirectory, SystemProcessTable};
use crate::process;
use crate::process::builtin::map::BuiltinMap;
use crate::process::endpoint::Terminal;
use crate::process::history::HistoryFile;
use crate::shell_state::ShellState;
use crate::tokenize;
use crossterm::style::Stylize;
use std::env;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading user input.
    CONTINUE,
    /// Terminate the control loop.
    EXIT,
}

/// Shared state that backs the interactive control loop.
pub struct ControlState {
    status: Option<i32>,
    shell: ShellState,
    builtin_map: BuiltinMap,
    terminal: Terminal,
    history: Option<HistoryFile>,
    quit_keyword: String,
    color: bool,
}

impl ControlState {
    /// Build a control state around `shell`, with no history file and the
    /// default quit keyword.
    pub fn new(shell: ShellState, terminal: Terminal) -> Self {
        Self {
            status: Some(0),
            shell,
            builtin_map: BuiltinMap::new(None),
            terminal,
            history: None,
            quit_keyword: DEFAULT_QUIT_KEYWORD.to_string(),
            color: false,
        }
    }

    /// Build the interactive shell described by `config`.
    pub fn from_config(config: &ConfigurationModel) -> Self {
        let shell = ShellState::with_providers(
            Box::new(OsWorkingDirectory),
            Box::new(SystemProcessTable::new(config.kill_signal())),
        );
        let history = config.history_path().map(HistoryFile::new);

        let mut state = Self::new(shell, Terminal::inherit()).with_history(history);
        state.quit_keyword = config.control.quit_keyword().to_string();
        state.color = config.ui.color();
        state
    }

    pub fn with_history(mut self, history: Option<HistoryFile>) -> Self {
        self.builtin_map = BuiltinMap::new(history.clone());
        self.history = history;
        self
    }

    pub fn with_quit_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.quit_keyword = keyword.into();
        self
    }

    pub fn quit_keyword(&self) -> &str {
        &self.quit_keyword
    }

    pub fn history(&self) -> Option<&HistoryFile> {
        self.history.as_ref()
    }

    /// Status of the last dispatched line; `Some(0)` after success.
    pub fn status(&self) -> Option<i32> {
        self.status
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn is_terminated(&self) -> bool {
        self.shell.is_terminated()
    }

    /// Stop accepting input, e.g. when the line source is exhausted.
    pub fn terminate(&mut self) {
        self.shell.terminate();
    }

    /// Render the prompt string with status colouring and the current directory.
    pub fn prompt(&self) -> String {
        let cwd = self
            .shell
            .current_dir()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|_| String::from("?"));
        generate_prompt(self.status, &cwd, self.color)
    }

    /// Parse and execute a single line of user input, updating status and
    /// history. Normal output goes to `out`, diagnostics to `err`.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write, err: &mut dyn Write) -> ControlFlow {
        if self.shell.is_terminated() {
            return ControlFlow::EXIT;
        }

        if line.trim() == self.quit_keyword {
            self.shell.terminate();
            return ControlFlow::EXIT;
        }

        let result = match tokenize::parse(line) {
            Ok(pipeline) if pipeline.is_empty() => return ControlFlow::CONTINUE,
            Ok(pipeline) => process::execute(
                &pipeline,
                &self.builtin_map,
                &mut self.shell,
                &self.terminal,
                out,
            ),
            Err(error) => Err(error),
        };

        let status = match result {
            Ok(()) => 0,
            Err(error) => {
                report(err, &error);
                error.exit_code()
            }
        };

        self.status = Some(status);
        self.record(line, status, err);
        ControlFlow::CONTINUE
    }

    fn record(&self, line: &str, status: i32, err: &mut dyn Write) {
        let Some(history) = &self.history else {
            return;
        };

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);

        if let Err(e) = history.append(timestamp, status, line) {
            let _ = writeln!(err, "Warning: unable to write to history file: {e}");
        }
    }
}

fn report(err: &mut dyn Write, error: &ShellError) {
    let _ = writeln!(err, "conduit: {error}");
    let _ = err.flush();
}

/// Construct the shell prompt string combining status colouring and the cwd.
fn generate_prompt(status: Option<i32>, cwd: &str, color: bool) -> String {
    let arrow = char::from_u32(0x27A3).unwrap_or('>');
    let cwd = update_cwd(cwd);

    if !color {
        return format!("{cwd} {arrow} ");
    }

    let arrow = match status {
        Some(0) => arrow.green(),
        _ => arrow.red(),
    };
    format!("{} {} ", cwd.magenta(), arrow)
}

/// Replace the home directory portion of the cwd with `~` for a compact prompt.
fn update_cwd(cwd: &str) -> String {
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => match cwd.strip_prefix(&home) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{rest}"),
            _ => cwd.to_string(),
        },
        _ => cwd.to_string(),
    }
}
