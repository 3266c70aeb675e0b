use std::io;
use thiserror::Error;

/// Every failure the shell can report for a single input line.
///
/// All variants are recovered at the control loop and printed as a
/// diagnostic; none of them terminates the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("parse error: pipeline stage {index} is empty")]
    EmptyStage { index: usize },
    #[error("{command}: {message}")]
    Argument {
        command: &'static str,
        message: &'static str,
    },
    #[error("{program}: {}", spawn_reason(.source))]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program}: exited with status {code}")]
    RuntimeExit { program: String, code: i32 },
    #[error("{context}: {source}")]
    OsState {
        context: String,
        #[source]
        source: io::Error,
    },
    #[error("{name}: builtins cannot read from a pipe (stage {index})")]
    UnsupportedBuiltinInPipeline { name: String, index: usize },
    #[error("unable to allocate pipe: {0}")]
    Pipe(#[source] io::Error),
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;

impl ShellError {
    pub(crate) fn argument(command: &'static str, message: &'static str) -> Self {
        ShellError::Argument { command, message }
    }

    /// True when the program named on the command line could not be found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShellError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// Status recorded for the line that produced this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::EmptyStage { .. } | ShellError::Argument { .. } => 2,
            ShellError::Spawn { .. } if self.is_not_found() => 127,
            ShellError::Spawn { .. } => 126,
            ShellError::RuntimeExit { code, .. } => *code,
            _ => 1,
        }
    }
}

fn spawn_reason(source: &io::Error) -> String {
    match source.kind() {
        io::ErrorKind::NotFound => String::from("command not found"),
        io::ErrorKind::PermissionDenied => String::from("permission denied"),
        _ => format!("unable to start: {source}"),
    }
}
