use serde::{Deserialize, Serialize};

/// How a cipher form takes its input: typed text or an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    File,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::File => "file",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "text" => Some(InputMode::Text),
            "file" => Some(InputMode::File),
            _ => None,
        }
    }

    /// The format options only apply to typed text
    pub fn shows_format_options(&self) -> bool {
        matches!(self, InputMode::Text)
    }
}
