pub mod cipher_kind;
pub mod input_mode;

pub use cipher_kind::CipherKind;
pub use input_mode::InputMode;
