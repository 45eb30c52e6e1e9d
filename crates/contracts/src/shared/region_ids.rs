/// Element ids of the three input regions of one cipher form.
///
/// Built from any identifier, known cipher or not, so that lookups for an
/// unknown cipher simply find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionIds {
    pub text_area: String,
    pub file_area: String,
    pub format_area: String,
}

impl RegionIds {
    pub fn for_cipher(cipher: &str) -> Self {
        Self {
            text_area: format!("{cipher}_text_area"),
            file_area: format!("{cipher}_file_area"),
            format_area: format!("{cipher}_format_area"),
        }
    }
}
