use super::paths::expand_path;
use super::section::{ControlConfigSection, UiConfigSection};
use crate::os::proctable::{DEFAULT_KILL_SIGNAL, parse_signal};
use nix::sys::signal::Signal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigurationModel {
    #[serde(default)]
    pub control: ControlConfigSection,
    #[serde(default)]
    pub ui: UiConfigSection,
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl ConfigurationModel {
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub(crate) fn set_source_path(&mut self, path: PathBuf) {
        self.source_path = Some(path);
    }

    /// Resolve a configured path: `~` expands to the home directory and other
    /// relative paths are taken relative to the config file's directory.
    pub fn resolve_path(&self, raw: &str) -> PathBuf {
        let expanded = expand_path(raw);
        if raw == "~" || raw.starts_with("~/") || expanded.is_absolute() {
            return expanded;
        }

        if let Some(parent) = self.source_path.as_ref().and_then(|p| p.parent()) {
            return parent.join(raw);
        }

        expanded
    }

    /// History file location, or `None` when it would depend on an unset `$HOME`.
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.control.history_file();
        let resolved = self.resolve_path(raw);
        if resolved.starts_with("~") {
            return None;
        }
        Some(resolved)
    }

    /// Signal used by `kill`; an unknown name is reported and replaced by the default.
    pub fn kill_signal(&self) -> Signal {
        let Some(name) = self.control.kill_signal.as_deref() else {
            return DEFAULT_KILL_SIGNAL;
        };
        match parse_signal(name) {
            Some(signal) => signal,
            None => {
                eprintln!("Warning: unknown kill_signal '{name}', using {DEFAULT_KILL_SIGNAL}");
                DEFAULT_KILL_SIGNAL
            }
        }
    }
}
