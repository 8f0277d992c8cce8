//! Consonants with little or no context sensitivity.

use super::{past_double, Step};
use crate::buffer::ScanBuffer;

/// `-mb` as in "dumb" is consumed by `M`, so a `B` here is always sounded.
pub fn b(buf: &ScanBuffer, at: isize) -> Step {
    Step::emit("P", past_double(buf, at, 'B'))
}

pub fn d(buf: &ScanBuffer, at: isize) -> Step {
    if buf.matches_any_at(at, 2, &["DG"]) {
        // "edge" vs "edgar"
        return if buf.matches_any_at(at + 2, 1, &["I", "E", "Y"]) {
            Step::emit("J", 3)
        } else {
            Step::emit("TK", 2)
        };
    }

    if buf.matches_any_at(at, 2, &["DT", "DD"]) {
        return Step::emit("T", 2);
    }

    Step::emit("T", 1)
}

pub fn f(buf: &ScanBuffer, at: isize) -> Step {
    Step::emit("F", past_double(buf, at, 'F'))
}

/// Kept only when first or between vowels. Also collapses `HH`.
pub fn h(buf: &ScanBuffer, at: isize) -> Step {
    if (at == 0 || buf.is_vowel(at - 1)) && buf.is_vowel(at + 1) {
        Step::emit("H", 2)
    } else {
        Step::skip(1)
    }
}

pub fn k(buf: &ScanBuffer, at: isize) -> Step {
    Step::emit("K", past_double(buf, at, 'K'))
}

pub fn m(buf: &ScanBuffer, at: isize) -> Step {
    // "dumb", "thumb", "plumber"
    let silent_b = buf.matches_any_at(at - 1, 3, &["UMB"])
        && (at + 1 == buf.last() || buf.matches_any_at(at + 2, 2, &["ER"]));
    if silent_b || buf.char_at(at + 1) == 'M' {
        Step::emit("M", 2)
    } else {
        Step::emit("M", 1)
    }
}

pub fn n(buf: &ScanBuffer, at: isize) -> Step {
    Step::emit("N", past_double(buf, at, 'N'))
}

pub fn n_tilde(_buf: &ScanBuffer, _at: isize) -> Step {
    Step::emit("N", 1)
}

pub fn p(buf: &ScanBuffer, at: isize) -> Step {
    if buf.char_at(at + 1) == 'H' {
        return Step::emit("F", 2);
    }

    // also "campbell", "raspberry"
    if buf.matches_any_at(at + 1, 1, &["P", "B"]) {
        Step::emit("P", 2)
    } else {
        Step::emit("P", 1)
    }
}

pub fn q(buf: &ScanBuffer, at: isize) -> Step {
    Step::emit("K", past_double(buf, at, 'Q'))
}

pub fn v(buf: &ScanBuffer, at: isize) -> Step {
    Step::emit("F", past_double(buf, at, 'V'))
}
