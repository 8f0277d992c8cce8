//! The closed set of symbols a metaphone key can contain, and their 4-bit codes.
//!
//! The nibble assignments are a stored format: packed keys written by one
//! release must decode identically in the next, so the table below must never
//! be reordered.

/// Placeholder used by the rule table for "this reading drops the sound".
/// It is never appended to a key.
pub const SILENT: char = ' ';

/// Nibble reserved for [`SILENT`].
pub const SPACE_NIBBLE: u8 = 0x0F;

/// Nibble that no symbol maps to.
pub const NULL_NIBBLE: u8 = 0x00;

/// A phonetic symbol emitted by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    A,
    F,
    H,
    J,
    K,
    L,
    M,
    N,
    P,
    S,
    T,
    R,
    X,
    /// The "th" sound, written `0`.
    Theta,
}

impl Symbol {
    /// Every symbol, in nibble order.
    pub const ALL: [Symbol; 14] = [
        Symbol::A,
        Symbol::F,
        Symbol::H,
        Symbol::J,
        Symbol::K,
        Symbol::L,
        Symbol::M,
        Symbol::N,
        Symbol::P,
        Symbol::S,
        Symbol::T,
        Symbol::R,
        Symbol::X,
        Symbol::Theta,
    ];

    pub fn from_char(c: char) -> Option<Symbol> {
        let sym = match c {
            'A' => Symbol::A,
            'F' => Symbol::F,
            'H' => Symbol::H,
            'J' => Symbol::J,
            'K' => Symbol::K,
            'L' => Symbol::L,
            'M' => Symbol::M,
            'N' => Symbol::N,
            'P' => Symbol::P,
            'S' => Symbol::S,
            'T' => Symbol::T,
            'R' => Symbol::R,
            'X' => Symbol::X,
            '0' => Symbol::Theta,
            _ => return None,
        };
        Some(sym)
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::F => 'F',
            Symbol::H => 'H',
            Symbol::J => 'J',
            Symbol::K => 'K',
            Symbol::L => 'L',
            Symbol::M => 'M',
            Symbol::N => 'N',
            Symbol::P => 'P',
            Symbol::S => 'S',
            Symbol::T => 'T',
            Symbol::R => 'R',
            Symbol::X => 'X',
            Symbol::Theta => '0',
        }
    }

    /// 4-bit code, in `0x1..=0xE`.
    pub fn nibble(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_nibble(nibble: u8) -> Option<Symbol> {
        match nibble {
            0x1..=0xE => Some(Self::ALL[(nibble - 1) as usize]),
            _ => None,
        }
    }
}

/// Nibble for a key character. The silent placeholder maps to [`SPACE_NIBBLE`];
/// anything outside the alphabet maps to [`NULL_NIBBLE`].
pub fn char_to_nibble(c: char) -> u8 {
    if c == SILENT {
        return SPACE_NIBBLE;
    }
    Symbol::from_char(c).map_or(NULL_NIBBLE, Symbol::nibble)
}

/// Inverse of [`char_to_nibble`] over the alphabet and the space code.
pub fn nibble_to_char(nibble: u8) -> Option<char> {
    if nibble == SPACE_NIBBLE {
        return Some(SILENT);
    }
    Symbol::from_nibble(nibble).map(Symbol::as_char)
}
