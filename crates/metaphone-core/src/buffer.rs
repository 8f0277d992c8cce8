//! Upper-cased, padded working copy of the word being encoded.
//!
//! Positions are `isize` so rules can look behind the cursor (`cursor - 2`)
//! without guarding every subtraction; negative positions read as filler.

use serde::Deserialize;

/// Blank filler around the word. Wide enough for the furthest lookahead any
/// rule performs.
pub const PADDING: usize = 5;

pub const FILLER: char = ' ';

/// Where the filler goes relative to the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BufferLayout {
    /// Filler follows the word; the cursor visits every letter.
    #[default]
    Canonical,
    /// Filler precedes the word while the cursor still walks `0..len`, so the
    /// first positions visited are blanks and the trailing letters are only
    /// reachable through lookahead. Keys stored by older indexes were built
    /// this way.
    LeadingPad,
}

#[derive(Debug, Clone)]
pub struct ScanBuffer {
    chars: Vec<char>,
    length: isize,
    slavo_germanic: bool,
}

impl ScanBuffer {
    pub fn new(word: &str, layout: BufferLayout) -> Self {
        let folded: Vec<char> = word.chars().flat_map(char::to_uppercase).collect();
        let length = folded.len() as isize;

        let mut chars = Vec::with_capacity(folded.len() + PADDING);
        match layout {
            BufferLayout::Canonical => {
                chars.extend_from_slice(&folded);
                chars.extend(std::iter::repeat(FILLER).take(PADDING));
            }
            BufferLayout::LeadingPad => {
                chars.extend(std::iter::repeat(FILLER).take(PADDING));
                chars.extend_from_slice(&folded);
            }
        }

        let slavo_germanic = contains(&chars, "W")
            || contains(&chars, "K")
            || contains(&chars, "CZ")
            || contains(&chars, "WITZ");

        Self {
            chars,
            length,
            slavo_germanic,
        }
    }

    /// Number of positions the cursor may visit.
    pub fn len(&self) -> isize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Last position the cursor may visit (`-1` for an empty word).
    pub fn last(&self) -> isize {
        self.length - 1
    }

    /// Character at `pos`, or filler outside the buffer.
    pub fn char_at(&self, pos: isize) -> char {
        usize::try_from(pos)
            .ok()
            .and_then(|p| self.chars.get(p).copied())
            .unwrap_or(FILLER)
    }

    pub fn is_vowel(&self, pos: isize) -> bool {
        if pos < 0 || pos >= self.length {
            return false;
        }
        matches!(self.char_at(pos), 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
    }

    /// True if the `len` characters starting at `start` equal any candidate.
    /// Negative starts and windows past the end of the buffer never match.
    pub fn matches_any_at(&self, start: isize, len: usize, candidates: &[&str]) -> bool {
        let Ok(start) = usize::try_from(start) else {
            return false;
        };
        let Some(window) = self.chars.get(start..start + len) else {
            return false;
        };
        candidates
            .iter()
            .any(|c| window.iter().copied().eq(c.chars()))
    }

    /// Heuristic for Germanic or Slavic spellings, which favour harder
    /// consonants.
    pub fn is_slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }
}

fn contains(haystack: &[char], needle: &str) -> bool {
    let needle: Vec<char> = needle.chars().collect();
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_slice())
}
