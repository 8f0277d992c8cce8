//! Dual-key accumulation.
//!
//! Every rule firing advances two readings of the word at once. Most of the
//! time both readings receive the same symbols; [`Alternate`] says how the
//! alternate reading differs when they do not.

use crate::alphabet::SILENT;

/// How the alternate key is updated by one emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternate<'a> {
    /// Both keys receive the primary symbols. No divergence.
    Same,
    /// The alternate receives the primary symbols unless they are empty or
    /// start with the silent placeholder. No divergence.
    Mirror,
    /// The alternate receives these symbols instead, or nothing when they
    /// start with the silent placeholder. Records divergence.
    Distinct(&'a str),
}

/// The two growing keys for one word.
#[derive(Debug, Clone, Default)]
pub struct KeyAccumulator {
    primary: String,
    alternate: String,
    primary_len: usize,
    alternate_len: usize,
    diverged: bool,
}

impl KeyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, primary: &str, alternate: Alternate<'_>) {
        self.push_primary(primary);

        match alternate {
            Alternate::Same => self.push_alternate(primary),
            Alternate::Distinct(alt) if !alt.is_empty() => {
                self.diverged = true;
                if !alt.starts_with(SILENT) {
                    self.push_alternate(alt);
                }
            }
            // An empty distinct alternate means the same thing as `Mirror`.
            Alternate::Mirror | Alternate::Distinct(_) => {
                if !primary.starts_with(SILENT) {
                    self.push_alternate(primary);
                }
            }
        }
    }

    /// True while either key is still shorter than `target`.
    pub fn needs_more(&self, target: usize) -> bool {
        self.primary_len < target || self.alternate_len < target
    }

    pub fn primary_len(&self) -> usize {
        self.primary_len
    }

    pub fn alternate_len(&self) -> usize {
        self.alternate_len
    }

    pub fn has_diverged(&self) -> bool {
        self.diverged
    }

    /// Truncate both keys to `target` symbols. The alternate is reported only
    /// when some emission recorded divergence.
    pub fn finalize(self, target: usize) -> (String, Option<String>) {
        let primary = truncate_symbols(self.primary, target);
        let alternate = self
            .diverged
            .then(|| truncate_symbols(self.alternate, target));
        (primary, alternate)
    }

    fn push_primary(&mut self, symbols: &str) {
        self.primary.push_str(symbols);
        self.primary_len += symbols.chars().count();
    }

    fn push_alternate(&mut self, symbols: &str) {
        self.alternate.push_str(symbols);
        self.alternate_len += symbols.chars().count();
    }
}

fn truncate_symbols(mut key: String, target: usize) -> String {
    if let Some((idx, _)) = key.char_indices().nth(target) {
        key.truncate(idx);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_appends_to_both() {
        let mut keys = KeyAccumulator::new();
        keys.emit("K", Alternate::Same);
        keys.emit("S", Alternate::Same);
        assert!(!keys.has_diverged());
        assert_eq!(keys.finalize(4), ("KS".to_string(), None));
    }

    #[test]
    fn distinct_records_divergence() {
        let mut keys = KeyAccumulator::new();
        keys.emit("R", Alternate::Same);
        keys.emit("X", Alternate::Distinct("K"));
        assert!(keys.has_diverged());
        assert_eq!(keys.finalize(4), ("RX".to_string(), Some("RK".to_string())));
    }

    #[test]
    fn silent_alternate_drops_the_sound() {
        let mut keys = KeyAccumulator::new();
        keys.emit("L", Alternate::Distinct(" "));
        assert_eq!(keys.alternate_len(), 0);
        assert_eq!(keys.finalize(4), ("L".to_string(), Some(String::new())));
    }

    #[test]
    fn empty_primary_with_distinct_alternate() {
        let mut keys = KeyAccumulator::new();
        keys.emit("AR", Alternate::Same);
        keys.emit("", Alternate::Distinct("R"));
        assert_eq!(keys.primary_len(), 2);
        assert_eq!(
            keys.finalize(4),
            ("AR".to_string(), Some("ARR".to_string()))
        );
    }

    #[test]
    fn mirror_copies_primary_without_divergence() {
        let mut keys = KeyAccumulator::new();
        keys.emit("T", Alternate::Mirror);
        keys.emit(" ", Alternate::Mirror);
        assert!(!keys.has_diverged());
        assert_eq!(keys.alternate_len(), 1);
        assert_eq!(keys.primary_len(), 2);
    }

    #[test]
    fn empty_distinct_behaves_like_mirror() {
        let mut keys = KeyAccumulator::new();
        keys.emit("N", Alternate::Distinct(""));
        assert!(!keys.has_diverged());
        assert_eq!(keys.alternate_len(), 1);
    }

    #[test]
    fn finalize_truncates_overshoot() {
        let mut keys = KeyAccumulator::new();
        keys.emit("KS", Alternate::Same);
        keys.emit("TK", Alternate::Distinct("FX"));
        keys.emit("S", Alternate::Same);
        assert!(!keys.needs_more(4));
        assert_eq!(
            keys.finalize(4),
            ("KSTK".to_string(), Some("KSFX".to_string()))
        );
    }

    #[test]
    fn needs_more_until_both_reach_target() {
        let mut keys = KeyAccumulator::new();
        keys.emit("ARN", Alternate::Same);
        keys.emit("", Alternate::Distinct("F"));
        assert_eq!(keys.alternate_len(), 4);
        assert!(keys.needs_more(4));
        keys.emit("K", Alternate::Same);
        assert!(!keys.needs_more(4));
    }
}
