use serde::{Deserialize, Serialize};

/// Cipher tabs present on the cryptosystem page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Shift,
    #[serde(rename = "sub")]
    Substitution,
    Affine,
    #[serde(rename = "vig")]
    Vigenere,
    Hill,
    #[serde(rename = "perm")]
    Permutation,
    Playfair,
    #[serde(rename = "otp")]
    OneTimePad,
}

impl CipherKind {
    /// Short token used as the element id prefix and in tab anchors
    pub fn code(&self) -> &'static str {
        match self {
            CipherKind::Shift => "shift",
            CipherKind::Substitution => "sub",
            CipherKind::Affine => "affine",
            CipherKind::Vigenere => "vig",
            CipherKind::Hill => "hill",
            CipherKind::Permutation => "perm",
            CipherKind::Playfair => "playfair",
            CipherKind::OneTimePad => "otp",
        }
    }

    /// Human readable tab label
    pub fn display_name(&self) -> &'static str {
        match self {
            CipherKind::Shift => "Shift Cipher",
            CipherKind::Substitution => "Substitution Cipher",
            CipherKind::Affine => "Affine Cipher",
            CipherKind::Vigenere => "Vigenère Cipher",
            CipherKind::Hill => "Hill Cipher",
            CipherKind::Permutation => "Permutation Cipher",
            CipherKind::Playfair => "Playfair Cipher",
            CipherKind::OneTimePad => "One-Time Pad",
        }
    }

    /// All ciphers in tab order
    pub fn all() -> Vec<CipherKind> {
        vec![
            CipherKind::Shift,
            CipherKind::Substitution,
            CipherKind::Affine,
            CipherKind::Vigenere,
            CipherKind::Hill,
            CipherKind::Permutation,
            CipherKind::Playfair,
            CipherKind::OneTimePad,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "shift" => Some(CipherKind::Shift),
            "sub" => Some(CipherKind::Substitution),
            "affine" => Some(CipherKind::Affine),
            "vig" => Some(CipherKind::Vigenere),
            "hill" => Some(CipherKind::Hill),
            "perm" => Some(CipherKind::Permutation),
            "playfair" => Some(CipherKind::Playfair),
            "otp" => Some(CipherKind::OneTimePad),
            _ => None,
        }
    }

    /// Anchor of the tab pane, e.g. `#vig-tab`
    pub fn tab_anchor(&self) -> String {
        format!("#{}-tab", self.code())
    }
}

impl std::fmt::Display for CipherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
