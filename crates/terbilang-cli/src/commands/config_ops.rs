use std::fs;

use crate::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: decimal.default_precision={}, decimal.max_precision={}, batch.skip_comments={}",
        s.decimal.default_precision, s.decimal.max_precision, s.batch.skip_comments
    );
}

/// Install a custom settings file for the rest of the process.
pub fn load_custom(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error loading {file}: {}");
}
