use crate::error::{ShellError, ShellResult};
use crate::process::endpoint::Endpoints;
use crate::tokenize::Command;
use std::io;
use std::path::Path;
use std::process::{Child, ExitStatus, Stdio};

/// A spawned external program and its exit status once reaped.
#[derive(Debug)]
pub struct ProcessHandle {
    program: String,
    child: Child,
    status: Option<ExitStatus>,
}

impl ProcessHandle {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    /// Exit status, if the process has been reaped.
    pub fn status(&self) -> Option<ExitStatus> {
        self.status
    }

    /// Block until the process exits and record its status.
    pub fn wait(&mut self) -> io::Result<ExitStatus> {
        if let Some(status) = self.status {
            return Ok(status);
        }
        let status = self.child.wait()?;
        self.status = Some(status);
        Ok(status)
    }
}

/// Start `command` with the given streams attached and return without
/// waiting for it.
///
/// The endpoints are consumed: once this returns, successfully or not, the
/// shell holds none of them open.
pub fn launch(command: &Command, endpoints: Endpoints, cwd: Option<&Path>) -> ShellResult<ProcessHandle> {
    let mut cmd = std::process::Command::new(command.name());
    cmd.args(command.args())
        .stdin(Stdio::from(endpoints.stdin))
        .stdout(Stdio::from(endpoints.stdout))
        .stderr(Stdio::from(endpoints.stderr));
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let spawned = cmd.spawn();
    // Release the parent's copies of the pipe ends now that the child has its own.
    drop(cmd);

    let child = spawned.map_err(|source| ShellError::Spawn {
        program: command.name().to_string(),
        source,
    })?;

    Ok(ProcessHandle {
        program: command.name().to_string(),
        child,
        status: None,
    })
}

/// Shell-style status: the exit code, or 128 + signal for signal deaths.
pub fn status_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => 255,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    -1
}
