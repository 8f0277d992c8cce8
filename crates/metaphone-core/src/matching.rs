//! Comparing two words by their keys.

use crate::encoder::DoubleMetaphone;

/// How closely two encodings agree, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchStrength {
    None,
    /// Alternate keys are equal.
    Weak,
    /// One word's primary equals the other's alternate.
    Normal,
    /// Primary keys are equal.
    Strong,
}

pub fn compare(a: &DoubleMetaphone, b: &DoubleMetaphone) -> MatchStrength {
    if a.primary() == b.primary() {
        return MatchStrength::Strong;
    }
    if Some(a.primary()) == b.alternate() || a.alternate() == Some(b.primary()) {
        return MatchStrength::Normal;
    }
    if a.alternate().is_some() && a.alternate() == b.alternate() {
        return MatchStrength::Weak;
    }
    MatchStrength::None
}

/// True when the two words share any key.
pub fn sounds_like(a: &str, b: &str) -> bool {
    compare(&crate::encode(a), &crate::encode(b)) != MatchStrength::None
}
