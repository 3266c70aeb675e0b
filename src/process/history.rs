use crate::error::{ShellError, ShellResult};
use crate::process::builtin::Builtin;
use crate::shell_state::ShellState;
use rev_lines::RevLines;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Number of entries `history` prints without an operand.
const DEFAULT_SHOWN: usize = 100;

/// Append-only record of dispatched lines, one `timestamp:status:line` per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, timestamp: u64, status: i32, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}:{}:{}", timestamp, status, line.trim_end_matches('\n'))
    }

    /// The last `limit` recorded commands, oldest first. A missing file is an
    /// empty history.
    pub fn recent(&self, limit: usize) -> io::Result<Vec<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut entries = Vec::with_capacity(limit.min(DEFAULT_SHOWN));
        for line in RevLines::new(file) {
            if entries.len() == limit {
                break;
            }
            let line = line.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
            if let Some(command) = parse_history_command(&line) {
                entries.push(command);
            }
        }

        entries.reverse();
        Ok(entries)
    }
}

/// Extract the command from a persisted history row.
fn parse_history_command(line: &str) -> Option<String> {
    let mut parts = line.splitn(3, ':');
    let timestamp = parts.next()?;
    if timestamp.is_empty() {
        return None;
    }
    parts.next()?; // status
    let command = parts.next()?;
    if command.is_empty() {
        None
    } else {
        Some(command.to_string())
    }
}

/// `history [N]`: print the last N recorded lines, numbered oldest first.
pub struct History {
    file: Option<HistoryFile>,
}

impl History {
    pub fn new(file: Option<HistoryFile>) -> Self {
        Self { file }
    }
}

impl Builtin for History {
    fn call(&self, argv: &[String], _shell: &mut ShellState, out: &mut dyn Write) -> ShellResult<()> {
        let limit = match argv {
            [_] => DEFAULT_SHOWN,
            [_, count] => count
                .parse::<usize>()
                .map_err(|_| ShellError::argument("history", "invalid count"))?,
            _ => return Err(ShellError::argument("history", "too many arguments")),
        };

        let Some(file) = &self.file else {
            return Ok(());
        };

        let entries = file.recent(limit).map_err(|source| ShellError::OsState {
            context: format!("history: {}", file.path().display()),
            source,
        })?;
        for (i, entry) in entries.iter().enumerate() {
            writeln!(out, "{:>5}  {}", i + 1, entry)?;
        }
        Ok(())
    }
}
