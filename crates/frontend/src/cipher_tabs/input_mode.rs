use contracts::{CipherKind, InputMode, RegionIds};

use crate::shared::dom::{ElementRegistry, Region};

/// Switches cipher forms between the text and file input regions.
pub struct InputModeToggler<R> {
    registry: R,
    ciphers: Vec<CipherKind>,
}

impl<R: ElementRegistry> InputModeToggler<R> {
    pub fn new(registry: R, ciphers: Vec<CipherKind>) -> Self {
        Self { registry, ciphers }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Shows exactly one of the text and file regions of `cipher`.
    ///
    /// The format options region is optional and follows the text region.
    /// Missing elements are skipped, so unknown ciphers are a no-op.
    pub fn set_input_mode(&self, cipher: &str, mode: InputMode) {
        let ids = RegionIds::for_cipher(cipher);
        let text_visible = mode == InputMode::Text;

        self.show(&ids.text_area, text_visible);
        self.show(&ids.file_area, !text_visible);
        if let Some(format_area) = self.registry.find(&ids.format_area) {
            format_area.set_visible(mode.shows_format_options());
        }

        log::debug!("{cipher}: input mode {}", mode.as_str());
    }

    pub fn set_cipher_mode(&self, cipher: CipherKind, mode: InputMode) {
        self.set_input_mode(cipher.code(), mode);
    }

    /// Entry used by the template's `toggleInputType(cipher, inputType)`
    /// handlers. Returns the mode applied.
    pub fn toggle_from_template(&self, cipher: &str, input_type: &str) -> InputMode {
        let mode = template_mode(input_type);
        self.set_input_mode(cipher, mode);
        mode
    }

    /// Resets every configured cipher to text input.
    pub fn initialize_all_modes(&self) {
        for cipher in &self.ciphers {
            self.set_cipher_mode(*cipher, InputMode::Text);
        }
    }

    fn show(&self, id: &str, visible: bool) {
        match self.registry.find(id) {
            Some(element) => element.set_visible(visible),
            None => log::debug!("#{id} not found, skipped"),
        }
    }
}

/// Template radios pass `'text'` or `'file'`; anything but `text` means file.
pub fn template_mode(input_type: &str) -> InputMode {
    InputMode::from_code(input_type).unwrap_or(InputMode::File)
}
