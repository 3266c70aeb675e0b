use std::env;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "CONDUIT_CONFIG";

const RC_FILE: &str = ".conduitrc";
const XDG_CONFIG_FILE: &str = "conduit/config.yaml";

/// Locate the configuration file.
///
/// An explicit `$CONDUIT_CONFIG` always wins, even if the file is missing, so
/// the loader can warn about it. Otherwise the first existing candidate of
/// `$XDG_CONFIG_HOME/conduit/config.yaml` and `~/.conduitrc` is used.
pub fn resolve_config_path() -> Option<PathBuf> {
    let explicit = env::var(CONFIG_PATH_ENV).unwrap_or_default();
    if !explicit.trim().is_empty() {
        return Some(expand_path(explicit.trim()));
    }

    let xdg = env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(|dir| Path::new(&dir).join(XDG_CONFIG_FILE));
    let rc = home_dir().map(|home| home.join(RC_FILE));

    xdg.into_iter().chain(rc).find(|path| path.is_file())
}

/// Expand a leading `~` to the home directory. Anything else, including
/// `~user`, is returned unchanged.
pub fn expand_path(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return PathBuf::from(input),
    };

    match home_dir() {
        Some(home) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(input),
    }
}

pub(crate) fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}
