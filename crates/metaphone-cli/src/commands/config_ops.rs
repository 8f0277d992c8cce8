use std::fs;

use metaphone_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: encoder.key_length={}, encoder.short_key_length={}, encoder.layout={:?}",
        s.encoder.key_length, s.encoder.short_key_length, s.encoder.layout
    );
}

/// Install `file` as the process settings before anything reads them.
pub fn load_custom(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error loading {file}: {}");
}
