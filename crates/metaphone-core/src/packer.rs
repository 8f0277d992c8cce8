//! Packs metaphone keys into a `u16`, one nibble per symbol.
//!
//! The first symbol lands in the most significant non-empty nibble, so
//! `"APR"` packs to `0x019C`. Keys longer than four symbols are cut to their
//! first four. A word without an alternate key gets [`NO_ALTERNATE`] for it.

use tracing::debug;

use crate::alphabet::{char_to_nibble, nibble_to_char, NULL_NIBBLE};
use crate::encoder::{Encoder, EncoderOptions, SHORT_KEY_LENGTH};
use crate::settings::EncoderSettings;

/// Sentinel for "this word has no alternate key". Real keys never pack to
/// it because the encoder never puts the silent placeholder into a key.
pub const NO_ALTERNATE: u16 = 0xFFFF;

/// Symbols held by one packed key.
pub const PACKED_SYMBOLS: usize = 4;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyCodecError {
    #[error("packed key 0xFFFF marks a missing alternate")]
    MissingAlternate,
    #[error("invalid nibble {nibble:#x} at position {position}")]
    InvalidNibble { nibble: u8, position: usize },
}

/// Pack the first four characters of `key`. Characters outside the symbol
/// alphabet contribute a zero nibble.
pub fn pack(key: &str) -> u16 {
    key.chars()
        .take(PACKED_SYMBOLS)
        .fold(0u16, |acc, c| (acc << 4) | u16::from(char_to_nibble(c)))
}

/// Inverse of [`pack`] for keys made of alphabet symbols.
///
/// Leading zero nibbles are padding for keys shorter than four symbols; a
/// zero nibble after the first symbol cannot come from [`pack`] of a valid key.
pub fn unpack(packed: u16) -> Result<String, KeyCodecError> {
    if packed == NO_ALTERNATE {
        return Err(KeyCodecError::MissingAlternate);
    }

    let mut key = String::with_capacity(PACKED_SYMBOLS);
    for position in 0..PACKED_SYMBOLS {
        let shift = 4 * (PACKED_SYMBOLS - 1 - position);
        let nibble = ((packed >> shift) & 0x0F) as u8;
        if nibble == NULL_NIBBLE && key.is_empty() {
            continue;
        }
        let c = nibble_to_char(nibble).ok_or(KeyCodecError::InvalidNibble { nibble, position })?;
        key.push(c);
    }
    Ok(key)
}

/// Packed keys for one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortDoubleMetaphone {
    primary: u16,
    alternate: u16,
}

impl ShortDoubleMetaphone {
    pub fn primary(&self) -> u16 {
        self.primary
    }

    /// Packed alternate key, or [`NO_ALTERNATE`].
    pub fn alternate(&self) -> u16 {
        self.alternate
    }

    pub fn has_alternate(&self) -> bool {
        self.alternate != NO_ALTERNATE
    }
}

/// Encodes words straight to packed keys.
#[derive(Debug, Clone, Copy)]
pub struct ShortEncoder {
    inner: Encoder,
}

impl Default for ShortEncoder {
    fn default() -> Self {
        Self::new(EncoderOptions {
            key_length: SHORT_KEY_LENGTH,
            ..EncoderOptions::default()
        })
    }
}

impl ShortEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self {
            inner: Encoder::new(options),
        }
    }

    /// Uses `short_key_length` from the settings as the key length.
    pub fn from_settings(settings: &EncoderSettings) -> Self {
        Self::new((&settings.for_short_keys()).into())
    }

    pub fn encode(&self, word: &str) -> ShortDoubleMetaphone {
        let keys = self.inner.encode(word);
        let primary = pack(keys.primary());
        let alternate = keys.alternate().map_or(NO_ALTERNATE, pack);
        debug!(primary, alternate, "packed");
        ShortDoubleMetaphone { primary, alternate }
    }
}

/// Packed keys for `word`, computed from six-symbol keys.
pub fn encode_short(word: &str) -> ShortDoubleMetaphone {
    ShortEncoder::default().encode(word)
}
