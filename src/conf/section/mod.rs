mod control;
mod ui;

pub use control::{ControlConfigSection, DEFAULT_HISTORY_LIMIT, DEFAULT_QUIT_KEYWORD};
pub use ui::UiConfigSection;
