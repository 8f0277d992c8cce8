//! Double Metaphone phonetic keys.
//!
//! ```
//! let keys = metaphone_core::encode("richard");
//! assert_eq!(keys.primary(), "RXRT");
//! assert_eq!(keys.alternate(), Some("RKRT"));
//!
//! let short = metaphone_core::encode_short("aubrey");
//! assert_eq!(short.alternate(), metaphone_core::NO_ALTERNATE);
//! ```

pub mod alphabet;
pub mod buffer;
pub mod encoder;
pub mod keys;
pub mod matching;
pub mod packer;
pub mod settings;

pub use buffer::BufferLayout;
pub use encoder::{encode, DoubleMetaphone, Encoder, EncoderOptions, KEY_LENGTH, SHORT_KEY_LENGTH};
pub use matching::{compare, sounds_like, MatchStrength};
pub use packer::{
    encode_short, pack, unpack, KeyCodecError, ShortDoubleMetaphone, ShortEncoder, NO_ALTERNATE,
};
