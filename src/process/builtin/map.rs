use super::Builtin;
use crate::process::cd::Cd;
use crate::process::echo::Echo;
use crate::process::help::Help;
use crate::process::history::{History, HistoryFile};
use crate::process::kill::Kill;
use crate::process::ps::Ps;
use crate::process::pwd::Pwd;
use crate::tokenize::Command;
use std::collections::HashMap;

/// A command resolved to the thing that will run it.
pub enum Invocation<'a> {
    Builtin {
        handler: &'a dyn Builtin,
        command: &'a Command,
    },
    External(&'a Command),
}

/// Registry mapping builtin names to their handlers.
pub struct BuiltinMap {
    func_map: HashMap<&'static str, Box<dyn Builtin>>,
}

impl BuiltinMap {
    /// Registry with every builtin; `history` reads from `history` when set.
    pub fn new(history: Option<HistoryFile>) -> Self {
        let mut map = BuiltinMap {
            func_map: HashMap::new(),
        };

        map.add("cd", Box::new(Cd));
        map.add("echo", Box::new(Echo));
        map.add("help", Box::new(Help));
        map.add("history", Box::new(History::new(history)));
        map.add("kill", Box::new(Kill));
        map.add("ps", Box::new(Ps));
        map.add("pwd", Box::new(Pwd));
        map
    }

    pub fn resolve(&self, name: &str) -> Option<&dyn Builtin> {
        self.func_map.get(name).map(|handler| handler.as_ref())
    }

    /// Decide whether `command` runs in-process or as a separate program.
    pub fn invocation<'a>(&'a self, command: &'a Command) -> Invocation<'a> {
        match self.resolve(command.name()) {
            Some(handler) => Invocation::Builtin { handler, command },
            None => Invocation::External(command),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.func_map.contains_key(name)
    }

    fn add(&mut self, name: &'static str, handler: Box<dyn Builtin>) {
        self.func_map.insert(name, handler);
    }
}
