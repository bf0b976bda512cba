//! bitconv: Decimal/Binary Conversion Library
//!
//! Converts integers of arbitrary size between decimal and binary notation,
//! with optional digit grouping, `0b` prefixing and leading-zero trimming.

pub mod cli;
pub mod converter;
pub mod report;
pub mod utils;
