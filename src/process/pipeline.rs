//! Runs a parsed pipeline: one process per external stage, connected by pipes.
//!
//! Every pipe is allocated before the first stage starts. Each end is moved
//! into exactly one stage's endpoints, so once all stages are launched the
//! shell holds no pipe ends and every reader sees end-of-stream as soon as its
//! writer exits. A stage that fails to start drops its ends at once, which
//! turns upstream writes into broken pipes instead of blocking forever.

use crate::error::{ShellError, ShellResult};
use crate::process::builtin::map::{BuiltinMap, Invocation};
use crate::process::endpoint::{Endpoint, Endpoints, Terminal};
use crate::process::launcher::{self, ProcessHandle, status_code};
use crate::shell_state::ShellState;
use crate::tokenize::Pipeline;
use std::io::{self, PipeWriter, Write};
use std::process::ExitStatus;
use std::thread;

/// How one stage of a pipeline ended.
#[derive(Debug)]
pub enum StageOutcome {
    /// A builtin ran inside the shell.
    Builtin {
        name: String,
        error: Option<ShellError>,
    },
    /// An external program ran and was reaped.
    Exited {
        program: String,
        pid: u32,
        status: ExitStatus,
    },
    /// The stage never ran, or its status could not be collected.
    Failed { program: String, error: ShellError },
}

impl StageOutcome {
    pub fn succeeded(&self) -> bool {
        match self {
            StageOutcome::Builtin { error, .. } => error.is_none(),
            StageOutcome::Exited { status, .. } => status.success(),
            StageOutcome::Failed { .. } => false,
        }
    }
}

/// One outcome per stage, in stage order.
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    stages: Vec<StageOutcome>,
}

impl PipelineOutcome {
    pub fn stages(&self) -> &[StageOutcome] {
        &self.stages
    }

    /// True only if every stage ran and exited successfully.
    pub fn succeeded(&self) -> bool {
        self.stages.iter().all(StageOutcome::succeeded)
    }

    /// Collapse into the error reported for the line: the first stage that
    /// failed to run, else the first failing builtin, else the first
    /// non-zero exit.
    pub fn into_result(self) -> ShellResult<()> {
        let mut builtin_error = None;
        let mut exit_error = None;

        for stage in self.stages {
            match stage {
                StageOutcome::Failed { error, .. } => return Err(error),
                StageOutcome::Builtin {
                    error: Some(error), ..
                } => {
                    if builtin_error.is_none() {
                        builtin_error = Some(error);
                    }
                }
                StageOutcome::Exited {
                    program, status, ..
                } if !status.success() => {
                    if exit_error.is_none() {
                        exit_error = Some(ShellError::RuntimeExit {
                            program,
                            code: status_code(status),
                        });
                    }
                }
                _ => {}
            }
        }

        match builtin_error.or(exit_error) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Execute every stage of `pipeline` and wait for all of them.
///
/// Only stage 0 may be a builtin. With a single stage its output goes to
/// `out`; otherwise it runs to completion into memory first and that output
/// is fed into the first pipe while the external stages run.
///
/// An `Err` means nothing was started. Failures of individual stages are
/// reported in the returned outcome.
pub fn run(
    pipeline: &Pipeline,
    builtins: &BuiltinMap,
    shell: &mut ShellState,
    terminal: &Terminal,
    out: &mut dyn Write,
) -> ShellResult<PipelineOutcome> {
    let stages = pipeline.stages();
    if stages.is_empty() {
        return Ok(PipelineOutcome::default());
    }

    for (index, command) in stages.iter().enumerate().skip(1) {
        if builtins.contains(command.name()) {
            return Err(ShellError::UnsupportedBuiltinInPipeline {
                name: command.name().to_string(),
                index,
            });
        }
    }

    let mut outcomes: Vec<Option<StageOutcome>> = stages.iter().map(|_| None).collect();
    let mut source: Option<Vec<u8>> = None;

    if let Invocation::Builtin { handler, command } = builtins.invocation(&stages[0]) {
        if stages.len() == 1 {
            let result = handler.call(command.argv(), shell, out);
            out.flush()?;
            return Ok(PipelineOutcome {
                stages: vec![StageOutcome::Builtin {
                    name: command.name().to_string(),
                    error: result.err(),
                }],
            });
        }

        let mut buffer = Vec::new();
        let result = handler.call(command.argv(), shell, &mut buffer);
        outcomes[0] = Some(StageOutcome::Builtin {
            name: command.name().to_string(),
            error: result.err(),
        });
        source = Some(buffer);
    }

    let wiring = wire(stages.len(), terminal)?;
    let cwd = shell.current_dir().ok();
    out.flush()?;

    let mut feed: Option<(PipeWriter, Vec<u8>)> = None;
    let mut handles: Vec<(usize, ProcessHandle)> = Vec::with_capacity(stages.len());

    for (index, (command, endpoints)) in stages.iter().zip(wiring).enumerate() {
        if index == 0 {
            if let Some(buffer) = source.take() {
                if let Endpoint::Writer(writer) = endpoints.stdout {
                    feed = Some((writer, buffer));
                }
                continue;
            }
        }

        match launcher::launch(command, endpoints, cwd.as_deref()) {
            Ok(handle) => handles.push((index, handle)),
            Err(error) => {
                outcomes[index] = Some(StageOutcome::Failed {
                    program: command.name().to_string(),
                    error,
                })
            }
        }
    }

    thread::scope(|scope| {
        if let Some((writer, buffer)) = feed {
            scope.spawn(move || feed_pipe(writer, &buffer));
        }
        reap(handles, &mut outcomes);
    });

    Ok(PipelineOutcome {
        stages: outcomes.into_iter().flatten().collect(),
    })
}

/// Allocate `stages - 1` pipes and assign every end to its stage.
fn wire(stages: usize, terminal: &Terminal) -> ShellResult<Vec<Endpoints>> {
    let mut readers = Vec::with_capacity(stages);
    let mut writers = Vec::with_capacity(stages);

    readers.push(terminal.stdin()?);
    for _ in 1..stages {
        let (reader, writer) = io::pipe().map_err(ShellError::Pipe)?;
        writers.push(Endpoint::Writer(writer));
        readers.push(Endpoint::Reader(reader));
    }
    writers.push(terminal.stdout()?);

    readers
        .into_iter()
        .zip(writers)
        .map(|(stdin, stdout)| -> ShellResult<Endpoints> {
            Ok(Endpoints {
                stdin,
                stdout,
                stderr: terminal.stderr()?,
            })
        })
        .collect()
}

/// Write a builtin's output into the first pipe, then close it.
fn feed_pipe(mut writer: PipeWriter, buffer: &[u8]) {
    // A reader that exits early (or never started) closes the pipe; the
    // remaining output is discarded just as it would be for a process.
    let _ = writer.write_all(buffer);
}

/// Wait for the last stage first, then every other stage in order.
fn reap(mut handles: Vec<(usize, ProcessHandle)>, outcomes: &mut [Option<StageOutcome>]) {
    let last = handles.pop();
    for (index, mut handle) in last.into_iter().chain(handles) {
        let program = handle.program().to_string();
        outcomes[index] = Some(match handle.wait() {
            Ok(status) => StageOutcome::Exited {
                program,
                pid: handle.pid(),
                status,
            },
            Err(source) => StageOutcome::Failed {
                error: ShellError::OsState {
                    context: format!("wait: {program}"),
                    source,
                },
                program,
            },
        });
    }
}
