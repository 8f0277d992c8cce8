//! Encoder settings.
//!
//! The defaults in `default_settings.toml` are compiled into the crate. A
//! program that wants other values hands its TOML to [`init_custom`] once, at
//! startup; the first [`settings`] call then freezes whichever set is active.
//!
//! The free functions [`crate::encode`] and [`crate::encode_short`] never read
//! these settings; only callers that build an [`crate::Encoder`] from them do.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::buffer::BufferLayout;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Fewest symbols the packer needs to fill a `u16`.
const MIN_SHORT_KEY_LENGTH: usize = 4;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Validate `toml_content` and make it the source for [`settings`].
///
/// Fails once a custom TOML was installed or [`settings`] has already been read.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Active settings: the custom TOML if one was installed, else the defaults.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub encoder: EncoderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncoderSettings {
    pub key_length: usize,
    pub short_key_length: usize,
    #[serde(default)]
    pub layout: BufferLayout,
}

impl EncoderSettings {
    /// Settings for the packed variant: same layout, longer keys.
    pub fn for_short_keys(&self) -> EncoderSettings {
        EncoderSettings {
            key_length: self.short_key_length,
            ..self.clone()
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.encoder.key_length == 0 {
        return Err(SettingsError::InvalidValue {
            field: "encoder.key_length".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.encoder.short_key_length < MIN_SHORT_KEY_LENGTH {
        return Err(SettingsError::InvalidValue {
            field: "encoder.short_key_length".to_string(),
            reason: format!("must be at least {MIN_SHORT_KEY_LENGTH}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.encoder.key_length, 4);
        assert_eq!(s.encoder.short_key_length, 6);
        assert_eq!(s.encoder.layout, BufferLayout::Canonical);
    }

    #[test]
    fn default_settings_match_constants() {
        let s = settings();
        assert_eq!(s.encoder.key_length, crate::KEY_LENGTH);
        assert_eq!(s.encoder.short_key_length, crate::SHORT_KEY_LENGTH);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[encoder]
key_length = 6
short_key_length = 8
layout = "leading-pad"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.encoder.key_length, 6);
        assert_eq!(s.encoder.short_key_length, 8);
        assert_eq!(s.encoder.layout, BufferLayout::LeadingPad);

        let short = s.encoder.for_short_keys();
        assert_eq!(short.key_length, 8);
        assert_eq!(short.layout, BufferLayout::LeadingPad);
    }

    #[test]
    fn layout_defaults_to_canonical() {
        let toml = r#"
[encoder]
key_length = 4
short_key_length = 6
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.encoder.layout, BufferLayout::Canonical);
    }

    #[test]
    fn error_zero_key_length() {
        let toml = r#"
[encoder]
key_length = 0
short_key_length = 6
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("encoder.key_length"));
    }

    #[test]
    fn error_short_key_too_short() {
        let toml = r#"
[encoder]
key_length = 4
short_key_length = 3
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("encoder.short_key_length"));
    }

    #[test]
    fn error_unknown_layout() {
        let toml = r#"
[encoder]
key_length = 4
short_key_length = 6
layout = "trailing"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn init_custom_after_first_read_is_rejected() {
        let _ = settings();
        let err = init_custom(DEFAULT_SETTINGS_TOML.to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
    }

    #[test]
    fn init_custom_rejects_invalid_toml_first() {
        let toml = "[encoder]\nkey_length = 0\nshort_key_length = 6\n";
        let err = init_custom(toml.to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
