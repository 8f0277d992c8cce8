//! Reference vectors shared with other Double Metaphone ports.

use super::keys;

const SINGLE_KEY: &[(&str, &str)] = &[
    ("aubrey", "APR"),
    ("Jose", "HS"),
    ("Thomas", "TMS"),
    ("school", "SKL"),
    ("cambrillo", "KMPR"),
    ("otto", "AT"),
    ("maurice", "MRS"),
    ("auto", "AT"),
    ("maisey", "MS"),
    ("Chile", "XL"),
    ("steven", "STFN"),
    ("zhang", "JNK"),
    ("bob", "PP"),
    ("ray", "R"),
    ("Tux", "TKS"),
    ("bryan", "PRN"),
    ("bryce", "PRS"),
    ("Rapelje", "RPL"),
    ("solilijs", "SLLS"),
    ("Dallas", "TLS"),
    ("dave", "TF"),
    ("eric", "ARK"),
    ("Parachute", "PRKT"),
    ("brian", "PRN"),
    ("randy", "RNT"),
    ("Nowhere", "NR"),
    ("heidi", "HT"),
];

const DOUBLE_KEY: &[(&str, &str, &str)] = &[
    ("richard", "RXRT", "RKRT"),
    ("catherine", "K0RN", "KTRN"),
    ("katherine", "K0RN", "KTRN"),
    ("geoff", "JF", "KF"),
    ("Schwein", "XN", "XFN"),
    ("Through", "0R", "TR"),
    ("Arnow", "ARN", "ARNF"),
    ("Thumbail", "0MPL", "TMPL"),
];

#[test]
fn single_key_words() {
    for &(word, primary) in SINGLE_KEY {
        assert_eq!(
            keys(word),
            (primary.to_string(), None),
            "unexpected keys for {word}"
        );
    }
}

#[test]
fn double_key_words() {
    for &(word, primary, alternate) in DOUBLE_KEY {
        assert_eq!(
            keys(word),
            (primary.to_string(), Some(alternate.to_string())),
            "unexpected keys for {word}"
        );
    }
}

#[test]
fn homophones_share_keys() {
    for (a, b) in [
        ("tolled", "told"),
        ("katherine", "catherine"),
        ("brian", "bryan"),
    ] {
        assert_eq!(keys(a), keys(b), "{a} vs {b}");
    }
    assert_eq!(keys("told"), ("TLT".to_string(), None));
}

#[test]
fn case_does_not_matter() {
    for &(word, _) in SINGLE_KEY {
        assert_eq!(keys(word), keys(&word.to_uppercase()));
        assert_eq!(keys(word), keys(&word.to_lowercase()));
    }
}
