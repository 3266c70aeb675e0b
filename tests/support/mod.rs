#![allow(dead_code)]

use conduit::ShellResult;
use conduit::os::{ProcessInfo, ProcessTable, WorkingDirectory};
use conduit::process::builtin::map::BuiltinMap;
use conduit::shell_state::ShellState;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Working directory that only accepts a fixed set of directories.
pub struct FakeWorkingDirectory {
    current: Rc<RefCell<PathBuf>>,
    known: HashSet<PathBuf>,
}

impl FakeWorkingDirectory {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        let start = start.into();
        let mut known = HashSet::new();
        known.insert(start.clone());
        Self {
            current: Rc::new(RefCell::new(start)),
            known,
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.known.insert(dir.into());
        self
    }

    pub fn handle(&self) -> Rc<RefCell<PathBuf>> {
        self.current.clone()
    }
}

impl WorkingDirectory for FakeWorkingDirectory {
    fn current(&self) -> io::Result<PathBuf> {
        Ok(self.current.borrow().clone())
    }

    fn change(&mut self, path: &Path) -> io::Result<()> {
        if !self.known.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            ));
        }
        *self.current.borrow_mut() = path.to_path_buf();
        Ok(())
    }
}

/// Process table with a fixed listing that records termination requests.
#[derive(Default)]
pub struct FakeProcessTable {
    listing: Vec<ProcessInfo>,
    terminated: Rc<RefCell<Vec<i32>>>,
}

impl FakeProcessTable {
    pub fn with_process(mut self, name: &str, pid: i32) -> Self {
        self.listing.push(ProcessInfo {
            name: name.to_string(),
            pid,
        });
        self
    }

    pub fn terminated(&self) -> Rc<RefCell<Vec<i32>>> {
        self.terminated.clone()
    }
}

impl ProcessTable for FakeProcessTable {
    fn processes(&self) -> io::Result<Vec<ProcessInfo>> {
        Ok(self.listing.clone())
    }

    fn terminate(&mut self, pid: i32) -> io::Result<()> {
        self.terminated.borrow_mut().push(pid);
        if self.listing.iter().any(|p| p.pid == pid) {
            Ok(())
        } else {
            Err(io::Error::from_raw_os_error(3))
        }
    }
}

pub fn fake_shell(start: &Path) -> ShellState {
    ShellState::with_providers(
        Box::new(FakeWorkingDirectory::new(start)),
        Box::new(FakeProcessTable::default()),
    )
}

pub fn argv(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Run one builtin and return its result along with everything it printed.
pub fn run_builtin(shell: &mut ShellState, words: &[&str]) -> (ShellResult<()>, String) {
    let map = BuiltinMap::new(None);
    let handler = map
        .resolve(words[0])
        .unwrap_or_else(|| panic!("{} is not a builtin", words[0]));
    let mut out = Vec::new();
    let result = handler.call(&argv(words), shell, &mut out);
    (result, String::from_utf8(out).unwrap())
}

pub fn canonical_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
