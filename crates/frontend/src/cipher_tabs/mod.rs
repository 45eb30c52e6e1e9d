pub mod input_mode;
pub mod tab_persistence;

pub use input_mode::InputModeToggler;
pub use tab_persistence::TabPersistence;
