use serde::{Deserialize, Serialize};

use crate::enums::CipherKind;

/// Target reference of a tab trigger, e.g. `#shift-tab`.
///
/// Opaque to the page logic: it is compared verbatim against the trigger's
/// target attribute and stored as-is in session storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabToken(String);

impl TabToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn for_cipher(cipher: CipherKind) -> Self {
        Self(cipher.tab_anchor())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cipher this token points at, when it follows the `#{code}-tab` shape
    pub fn cipher(&self) -> Option<CipherKind> {
        self.0
            .strip_prefix('#')
            .and_then(|rest| rest.strip_suffix("-tab"))
            .and_then(CipherKind::from_code)
    }
}

impl Default for TabToken {
    fn default() -> Self {
        Self::for_cipher(CipherKind::Shift)
    }
}

impl From<&str> for TabToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TabToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TabToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_shift_tab() {
        assert_eq!(TabToken::default().as_str(), "#shift-tab");
    }

    #[test]
    fn test_cipher_lookup() {
        assert_eq!(TabToken::from("#hill-tab").cipher(), Some(CipherKind::Hill));
        assert_eq!(TabToken::from("hill-tab").cipher(), None);
        assert_eq!(TabToken::from("#about").cipher(), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let token = TabToken::for_cipher(CipherKind::Affine);
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"#affine-tab\"");
    }
}
