//! Per-letter rule handlers.
//!
//! Each handler looks at a small window around the cursor and returns a
//! [`Step`]: the emissions to apply to the keys and how far to move. Cases
//! inside a handler are checked top to bottom and the first match wins, so
//! reordering them changes the output.

mod c;
mod contextual;
mod g;
mod s;
mod simple;

use crate::buffer::ScanBuffer;
use crate::keys::{Alternate, KeyAccumulator};

pub use c::{c, c_cedilla};
pub use contextual::{j, l, r, t, w, x, z};
pub use g::g;
pub use s::s;
pub use simple::{b, d, f, h, k, m, n, n_tilde, p, q, v};

/// A handler: `(buffer, cursor) -> step`.
pub type LetterRule = fn(&ScanBuffer, isize) -> Step;

/// Symbols written to the keys by one rule firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission {
    pub primary: &'static str,
    pub alternate: Alternate<'static>,
}

/// Result of one handler: up to two emissions and the cursor advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    emissions: [Option<Emission>; 2],
    advance: isize,
}

impl Step {
    /// Emit nothing, move `advance` positions.
    pub fn skip(advance: isize) -> Self {
        Self {
            emissions: [None, None],
            advance,
        }
    }

    /// Emit `symbols` to both keys.
    pub fn emit(symbols: &'static str, advance: isize) -> Self {
        Self::skip(advance).and(symbols, Alternate::Same)
    }

    /// Emit different symbols to the primary and alternate keys.
    pub fn diverge(primary: &'static str, alternate: &'static str, advance: isize) -> Self {
        Self::skip(advance).and(primary, Alternate::Distinct(alternate))
    }

    /// Append one more emission.
    ///
    /// # Panics
    ///
    /// Panics if the step already holds two emissions.
    pub fn and(mut self, primary: &'static str, alternate: Alternate<'static>) -> Self {
        let slot = usize::from(self.emissions[0].is_some());
        assert!(
            self.emissions[slot].is_none(),
            "a step holds at most two emissions"
        );
        self.emissions[slot] = Some(Emission { primary, alternate });
        self
    }

    pub fn with_advance(mut self, advance: isize) -> Self {
        self.advance = advance;
        self
    }

    pub fn advance(&self) -> isize {
        self.advance
    }

    pub fn emissions(&self) -> impl Iterator<Item = &Emission> {
        self.emissions.iter().flatten()
    }

    pub fn apply(&self, keys: &mut KeyAccumulator) {
        for e in self.emissions() {
            keys.emit(e.primary, e.alternate);
        }
    }
}

/// Handler for `letter`. Letters without rules advance silently.
pub fn rule_for(letter: char) -> LetterRule {
    match letter {
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => vowel,
        'B' => b,
        'C' => c,
        'Ç' => c_cedilla,
        'D' => d,
        'F' => f,
        'G' => g,
        'H' => h,
        'J' => j,
        'K' => k,
        'L' => l,
        'M' => m,
        'N' => n,
        'Ñ' => n_tilde,
        'P' => p,
        'Q' => q,
        'R' => r,
        'S' => s,
        'T' => t,
        'V' => v,
        'W' => w,
        'X' => x,
        'Z' => z,
        _ => unhandled,
    }
}

/// Initial vowels all map to `A`; other vowels are dropped.
pub fn vowel(_buf: &ScanBuffer, at: isize) -> Step {
    if at == 0 {
        Step::emit("A", 1)
    } else {
        Step::skip(1)
    }
}

pub fn unhandled(_buf: &ScanBuffer, _at: isize) -> Step {
    Step::skip(1)
}

/// Advance past `letter` and, if it is doubled, its twin.
fn past_double(buf: &ScanBuffer, at: isize, letter: char) -> isize {
    if buf.char_at(at + 1) == letter {
        2
    } else {
        1
    }
}
