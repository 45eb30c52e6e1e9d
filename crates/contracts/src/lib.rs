//! Data types shared by the cryptosystem page code.

pub mod enums;
pub mod shared;

pub use enums::{CipherKind, InputMode};
pub use shared::{PageConfig, RegionIds, TabToken};
