//! Shared test utilities and fixture generators
#![allow(dead_code)]

use std::path::PathBuf;

use bitconv::converter::FormatOptions;
use rand::Rng;
use tempfile::TempDir;

/// Options with every transform disabled
pub fn plain() -> FormatOptions {
    FormatOptions::default()
}

/// Every combination of the three format flags
pub fn all_options() -> Vec<FormatOptions> {
    let mut combos = Vec::with_capacity(8);
    for prefix in [false, true] {
        for group in [false, true] {
            for trim in [false, true] {
                combos.push(FormatOptions::new(prefix, group, trim));
            }
        }
    }
    combos
}

/// Generate a canonical decimal string (no leading zeros) with up to `max_digits` digits
pub fn random_decimal<R: Rng>(rng: &mut R, max_digits: usize) -> String {
    let len = rng.gen_range(1..=max_digits);
    let mut digits = String::with_capacity(len + 1);

    if len > 1 && rng.gen_bool(0.5) {
        digits.push('-');
    }
    digits.push(char::from(b'0' + rng.gen_range(1..=9u8)));
    for _ in 1..len {
        digits.push(char::from(b'0' + rng.gen_range(0..=9u8)));
    }
    digits
}

/// Write `lines` to a file in `dir`, one per line
pub fn write_values(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}
