use super::model::ConfigurationModel;
use super::paths::resolve_config_path;
use std::fs;
use std::path::Path;

/// Load the user's configuration, or defaults when there is none.
pub fn load() -> ConfigurationModel {
    resolve_config_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

/// Load `path`. An unreadable or malformed file is reported on stderr and
/// replaced by defaults; the shell still starts.
pub fn load_from(path: &Path) -> ConfigurationModel {
    let parsed = fs::read_to_string(path)
        .map_err(|err| format!("unable to read config file '{}': {err}", path.display()))
        .and_then(|contents| {
            serde_yaml::from_str::<ConfigurationModel>(&contents)
                .map_err(|err| format!("unable to parse config file '{}': {err}", path.display()))
        });

    match parsed {
        Ok(mut cfg) => {
            cfg.set_source_path(path.to_path_buf());
            cfg
        }
        Err(message) => {
            eprintln!("Warning: {message}");
            ConfigurationModel::default()
        }
    }
}
