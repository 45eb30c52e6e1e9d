//! Page configuration.
//!
//! Every field has a default matching the stock cryptosystem template, so an
//! empty JSON object (or no config at all) gives the standard behaviour.

use serde::{Deserialize, Serialize};

use crate::enums::CipherKind;
use crate::shared::tab_token::TabToken;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Id of the element wrapping the tab triggers
    pub tab_container_id: String,
    /// Selector for triggers, scoped to the container
    pub tab_trigger_selector: String,
    /// Trigger attribute holding the tab token
    pub target_attribute: String,
    /// Event fired by the tab toolkit once a tab is shown
    pub shown_event: String,
    /// Session storage key for the active tab
    pub storage_key: String,
    pub default_tab: TabToken,
    /// Ciphers reset to text mode on startup, in order
    pub ciphers: Vec<CipherKind>,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tab_container_id: "cipherTabs".to_string(),
            tab_trigger_selector: "a".to_string(),
            target_attribute: "href".to_string(),
            shown_event: "shown.bs.tab".to_string(),
            storage_key: "activeTab".to_string(),
            default_tab: TabToken::default(),
            ciphers: CipherKind::all(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Full selector for the tab triggers, e.g. `#cipherTabs a`
    pub fn trigger_selector(&self) -> String {
        format!("#{} {}", self.tab_container_id, self.tab_trigger_selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            PageConfig::from_json(r##"{"storage_key": "tab", "default_tab": "#otp-tab"}"##)
                .unwrap();
        assert_eq!(config.storage_key, "tab");
        assert_eq!(config.default_tab.as_str(), "#otp-tab");
        assert_eq!(config.tab_container_id, "cipherTabs");
        assert_eq!(config.ciphers.len(), 8);
    }

    #[test]
    fn test_cipher_subset() {
        let config = PageConfig::from_json(r#"{"ciphers": ["shift", "vig"]}"#).unwrap();
        assert_eq!(config.ciphers, vec![CipherKind::Shift, CipherKind::Vigenere]);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(PageConfig::from_json("{not json").is_err());
        assert!(PageConfig::from_json(r#"{"ciphers": ["enigma"]}"#).is_err());
    }

    #[test]
    fn test_trigger_selector() {
        assert_eq!(PageConfig::default().trigger_selector(), "#cipherTabs a");
    }
}
