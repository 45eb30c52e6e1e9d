pub mod dom;
pub mod error;
