//! Stream endpoints handed to spawned programs.

use std::fs::File;
use std::io::{self, PipeReader, PipeWriter};
use std::process::Stdio;

/// Where one standard stream of a child process is attached.
#[derive(Debug)]
pub enum Endpoint {
    /// Share the shell's own stream.
    Inherit,
    /// Read end of a pipe fed by the previous stage.
    Reader(PipeReader),
    /// Write end of a pipe drained by the next stage.
    Writer(PipeWriter),
    /// A file standing in for the terminal.
    File(File),
}

impl From<Endpoint> for Stdio {
    fn from(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::Inherit => Stdio::inherit(),
            Endpoint::Reader(reader) => reader.into(),
            Endpoint::Writer(writer) => writer.into(),
            Endpoint::File(file) => file.into(),
        }
    }
}

/// The three endpoints of one stage.
#[derive(Debug)]
pub struct Endpoints {
    pub stdin: Endpoint,
    pub stdout: Endpoint,
    pub stderr: Endpoint,
}

/// A terminal stream: the shell's own, or a file redirected in its place.
#[derive(Debug)]
pub enum TerminalStream {
    Inherit,
    File(File),
}

impl TerminalStream {
    fn endpoint(&self) -> io::Result<Endpoint> {
        match self {
            TerminalStream::Inherit => Ok(Endpoint::Inherit),
            TerminalStream::File(file) => Ok(Endpoint::File(file.try_clone()?)),
        }
    }
}

/// The shell's terminal as seen by the first and last stages of a pipeline
/// and by every stage's standard error.
#[derive(Debug)]
pub struct Terminal {
    stdin: TerminalStream,
    stdout: TerminalStream,
    stderr: TerminalStream,
}

impl Terminal {
    /// The shell's real standard streams.
    pub fn inherit() -> Self {
        Self {
            stdin: TerminalStream::Inherit,
            stdout: TerminalStream::Inherit,
            stderr: TerminalStream::Inherit,
        }
    }

    pub fn with_stdin(mut self, file: File) -> Self {
        self.stdin = TerminalStream::File(file);
        self
    }

    pub fn with_stdout(mut self, file: File) -> Self {
        self.stdout = TerminalStream::File(file);
        self
    }

    pub fn with_stderr(mut self, file: File) -> Self {
        self.stderr = TerminalStream::File(file);
        self
    }

    pub fn stdin(&self) -> io::Result<Endpoint> {
        self.stdin.endpoint()
    }

    pub fn stdout(&self) -> io::Result<Endpoint> {
        self.stdout.endpoint()
    }

    pub fn stderr(&self) -> io::Result<Endpoint> {
        self.stderr.endpoint()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::inherit()
    }
}
