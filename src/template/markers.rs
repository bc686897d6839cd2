// ABOUTME: Comment-marker handling for template markup
// ABOUTME: Strips the literal opening and closing wrapper markers before tokenization

use serde::{Deserialize, Serialize};

pub const DEFAULT_OPEN_MARKER: &str = "<!----";
pub const DEFAULT_CLOSE_MARKER: &str = "---->";

/// The literal marker pair wrapping template markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_close")]
    pub close: String,
}

fn default_open() -> String {
    DEFAULT_OPEN_MARKER.to_string()
}

fn default_close() -> String {
    DEFAULT_CLOSE_MARKER.to_string()
}

impl Markers {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Remove the first occurrence of the opening marker, then the first
    /// occurrence of the closing marker. Absent markers leave the text as is.
    pub fn strip(&self, text: &str) -> String {
        let text = remove_first(text, &self.open);
        remove_first(&text, &self.close)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_MARKER, DEFAULT_CLOSE_MARKER)
    }
}

fn remove_first(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    text.replacen(needle, "", 1)
}
