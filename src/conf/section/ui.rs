use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfigSection {
    pub color: Option<bool>,
    pub welcome: Option<bool>,
}

impl UiConfigSection {
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn welcome(&self) -> bool {
        self.welcome.unwrap_or(true)
    }
}
