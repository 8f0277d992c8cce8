use std::num::ParseIntError;

use metaphone_core::alphabet::Symbol;
use metaphone_core::packer::PACKED_SYMBOLS;
use metaphone_core::{pack, unpack};

/// Parse a packed key written as hex, with or without a `0x` prefix.
pub fn parse_packed(text: &str) -> Result<u16, ParseIntError> {
    let digits = text
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    u16::from_str_radix(digits, 16)
}

pub fn pack_cmd(key: &str) {
    let key = key.to_uppercase();
    if let Some(bad) = key.chars().find(|&c| Symbol::from_char(c).is_none()) {
        eprintln!("Error: '{bad}' is not a key symbol");
        std::process::exit(1);
    }
    if key.chars().count() > PACKED_SYMBOLS {
        eprintln!("warning: only the first {PACKED_SYMBOLS} symbols are packed");
    }
    println!("{:#06X}", pack(&key));
}

pub fn unpack_cmd(packed: &str) {
    let value = die!(parse_packed(packed), "Error parsing {packed}: {}");
    let key = die!(unpack(value), "Error: {}");
    println!("{key}");
}
