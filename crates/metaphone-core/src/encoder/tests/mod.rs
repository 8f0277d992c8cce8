use super::*;

mod corpus;

/// `(primary, alternate)` as plain strings, for terse assertions.
fn keys(word: &str) -> (String, Option<String>) {
    encode(word).into_keys()
}

fn with_length(word: &str, key_length: usize) -> (String, Option<String>) {
    Encoder::new(EncoderOptions {
        key_length,
        ..EncoderOptions::default()
    })
    .encode(word)
    .into_keys()
}

#[test]
fn empty_word_has_empty_primary() {
    assert_eq!(keys(""), (String::new(), None));
}

#[test]
fn word_is_kept_verbatim() {
    let result = encode("McHugh");
    assert_eq!(result.word(), "McHugh");
}

#[test]
fn silent_initial_consonants() {
    assert_eq!(keys("gnome"), ("NM".to_string(), None));
    assert_eq!(keys("knight"), ("NT".to_string(), None));
}

#[test]
fn initial_x_sounds_like_s() {
    assert_eq!(keys("X"), ("S".to_string(), None));
    assert_eq!(keys("Xavier"), ("SF".to_string(), Some("SFR".to_string())));
}

#[test]
fn initial_w_before_vowel() {
    assert_eq!(
        keys("Wasserman"),
        ("ASRM".to_string(), Some("FSRM".to_string()))
    );
}

#[test]
fn smith_and_schmidt_overlap() {
    assert_eq!(keys("Smith"), ("SM0".to_string(), Some("XMT".to_string())));
    assert_eq!(
        keys("Schmidt"),
        ("XMT".to_string(), Some("SMT".to_string()))
    );
}

#[test]
fn greek_ch_in_orchestra() {
    assert_eq!(keys("orchestra"), ("ARKS".to_string(), None));
}

#[test]
fn longer_keys_keep_scanning() {
    assert_eq!(with_length("orchestra", 6), ("ARKSTR".to_string(), None));
    assert_eq!(
        with_length("richard", 6),
        ("RXRT".to_string(), Some("RKRT".to_string()))
    );
}

#[test]
fn keys_are_cut_at_target_length() {
    assert_eq!(
        with_length("Wasserman", 2),
        ("AS".to_string(), Some("FS".to_string()))
    );
}

#[test]
fn non_letters_are_skipped() {
    assert_eq!(keys("123"), (String::new(), None));
    assert_eq!(keys("b-o-b"), ("PP".to_string(), None));
}

#[test]
fn options_round_trip_through_encoder() {
    let options = EncoderOptions {
        key_length: 5,
        layout: BufferLayout::LeadingPad,
    };
    assert_eq!(Encoder::new(options).options(), options);
    assert_eq!(Encoder::default().options(), EncoderOptions::default());
}

#[test]
fn encoder_from_default_settings() {
    let encoder = Encoder::from_settings(&crate::settings::settings().encoder);
    assert_eq!(encoder.options(), EncoderOptions::default());
}
