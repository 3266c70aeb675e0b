use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use std::io;
use std::str::FromStr;

/// Signal sent by `kill` unless configured otherwise.
pub const DEFAULT_KILL_SIGNAL: Signal = Signal::SIGTERM;

/// A running process as reported to `ps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub name: String,
    pub pid: i32,
}

/// System-wide process enumeration and termination requests.
pub trait ProcessTable {
    /// Currently running processes, in whatever order the system yields them.
    fn processes(&self) -> io::Result<Vec<ProcessInfo>>;

    /// Ask `pid` to terminate without waiting for it to exit.
    fn terminate(&mut self, pid: i32) -> io::Result<()>;
}

/// Process table of the host system.
#[derive(Debug, Clone, Copy)]
pub struct SystemProcessTable {
    signal: Signal,
}

impl SystemProcessTable {
    pub fn new(signal: Signal) -> Self {
        Self { signal }
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }
}

impl Default for SystemProcessTable {
    fn default() -> Self {
        Self::new(DEFAULT_KILL_SIGNAL)
    }
}

impl ProcessTable for SystemProcessTable {
    fn processes(&self) -> io::Result<Vec<ProcessInfo>> {
        list_processes()
    }

    fn terminate(&mut self, pid: i32) -> io::Result<()> {
        signal::kill(Pid::from_raw(pid), self.signal).map_err(io::Error::from)
    }
}

/// Parse a signal name such as `SIGKILL` or `KILL`.
pub fn parse_signal(name: &str) -> Option<Signal> {
    let name = name.trim().to_ascii_uppercase();
    if name.starts_with("SIG") {
        Signal::from_str(&name).ok()
    } else {
        Signal::from_str(&format!("SIG{name}")).ok()
    }
}

#[cfg(target_os = "linux")]
fn list_processes() -> io::Result<Vec<ProcessInfo>> {
    use std::fs;

    let mut processes = Vec::new();
    for entry in fs::read_dir("/proc")? {
        let entry = entry?;
        let Some(pid) = entry
            .file_name()
            .to_str()
            .and_then(|name| name.parse::<i32>().ok())
        else {
            continue;
        };

        // The process may exit between listing and reading its stat file.
        let Ok(stat) = fs::read_to_string(entry.path().join("stat")) else {
            continue;
        };

        if let Some((name, state)) = parse_stat(&stat) {
            if state != 'Z' && state != 'X' {
                processes.push(ProcessInfo { name, pid });
            }
        }
    }

    Ok(processes)
}

#[cfg(not(target_os = "linux"))]
fn list_processes() -> io::Result<Vec<ProcessInfo>> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "process listing is only available on Linux",
    ))
}

/// Extract the command name and state letter from a `/proc/<pid>/stat` line.
///
/// The name sits between the first `(` and the last `)` and may itself
/// contain spaces or parentheses.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_stat(stat: &str) -> Option<(String, char)> {
    let open = stat.find('(')?;
    let close = stat.rfind(')')?;
    if close <= open {
        return None;
    }
    let name = stat[open + 1..close].to_string();
    let state = stat[close + 1..].trim_start().chars().next()?;
    Some((name, state))
}
