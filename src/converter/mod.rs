//! Converter module - sanitizes, validates and converts numerals between bases

pub mod convert;
pub mod error;
pub mod format;
pub mod options;
pub mod sanitize;

pub use convert::*;
pub use error::*;
pub use format::*;
pub use options::*;
pub use sanitize::*;
