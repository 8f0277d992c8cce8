//! Double Metaphone encoding (Lawrence Philips, C/C++ Users Journal, June 2000).
//!
//! A cursor walks the upper-cased word and, for each letter, the matching
//! handler in [`rules`] decides what to append to the primary and alternate
//! keys and how many letters it consumed. Encoding never fails: unknown
//! characters are skipped and an empty word yields an empty primary key.

pub mod rules;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span, trace};

use crate::buffer::{BufferLayout, ScanBuffer};
use crate::keys::{Alternate, KeyAccumulator};
use crate::settings::EncoderSettings;

/// Length of the standard keys.
pub const KEY_LENGTH: usize = 4;

/// Length of the keys fed to the packer. Only the first four symbols end up
/// in the packed value.
pub const SHORT_KEY_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Maximum number of symbols per key.
    pub key_length: usize,
    pub layout: BufferLayout,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            key_length: KEY_LENGTH,
            layout: BufferLayout::Canonical,
        }
    }
}

impl From<&EncoderSettings> for EncoderOptions {
    fn from(s: &EncoderSettings) -> Self {
        Self {
            key_length: s.key_length,
            layout: s.layout,
        }
    }
}

/// Keys computed for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleMetaphone {
    word: String,
    primary: String,
    alternate: Option<String>,
}

impl DoubleMetaphone {
    /// The word the keys were computed for, as given.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The alternate key, present only when some rule produced a second
    /// reading. It may still equal the primary key.
    pub fn alternate(&self) -> Option<&str> {
        self.alternate.as_deref()
    }

    pub fn into_keys(self) -> (String, Option<String>) {
        (self.primary, self.alternate)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    options: EncoderOptions,
}

impl Encoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn from_settings(settings: &EncoderSettings) -> Self {
        Self::new(settings.into())
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    pub fn encode(&self, word: &str) -> DoubleMetaphone {
        let _span = debug_span!("encode", word, key_length = self.options.key_length).entered();

        let buf = ScanBuffer::new(word, self.options.layout);
        let mut keys = KeyAccumulator::new();
        scan(&buf, &mut keys, self.options.key_length);
        let (primary, alternate) = keys.finalize(self.options.key_length);

        debug!(primary = %primary, alternate = ?alternate);
        DoubleMetaphone {
            word: word.to_string(),
            primary,
            alternate,
        }
    }
}

/// Standard four-symbol keys for `word`.
pub fn encode(word: &str) -> DoubleMetaphone {
    Encoder::default().encode(word)
}

fn scan(buf: &ScanBuffer, keys: &mut KeyAccumulator, target: usize) {
    if buf.is_empty() {
        return;
    }

    let mut cursor: isize = 0;

    // silent first letter: "gnome", "knight", "pneumatic", "wright", "psalm"
    if buf.matches_any_at(0, 2, &["GN", "KN", "PN", "WR", "PS"]) {
        trace!("skipping silent initial consonant");
        cursor += 1;
    }

    // initial X sounds like Z, as in "Xavier"
    if buf.char_at(0) == 'X' {
        keys.emit("S", Alternate::Same);
        cursor += 1;
    }

    while keys.needs_more(target) && cursor < buf.len() {
        let letter = buf.char_at(cursor);
        let step = rules::rule_for(letter)(buf, cursor);
        trace!(cursor, %letter, advance = step.advance());
        step.apply(keys);
        cursor += step.advance();
    }
}
