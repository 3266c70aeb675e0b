use serde::Deserialize;

/// Default keyword that ends the session.
pub const DEFAULT_QUIT_KEYWORD: &str = "quit";

/// Default number of history entries loaded into the line editor.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

const DEFAULT_HISTORY_FILE: &str = "~/.conduit_history";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ControlConfigSection {
    pub quit_keyword: Option<String>,
    pub history_file: Option<String>,
    pub history_limit: Option<usize>,
    pub kill_signal: Option<String>,
}

impl ControlConfigSection {
    pub fn quit_keyword(&self) -> &str {
        self.quit_keyword
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .unwrap_or(DEFAULT_QUIT_KEYWORD)
    }

    pub fn history_file(&self) -> &str {
        self.history_file.as_deref().unwrap_or(DEFAULT_HISTORY_FILE)
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }
}
