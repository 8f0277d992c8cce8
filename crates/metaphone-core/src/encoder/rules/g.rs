use super::{past_double, Step};
use crate::buffer::ScanBuffer;

/// Second and third letters that make an initial G both hard and soft.
const INITIAL_SOFT_G: [&str; 11] = [
    "ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER",
];

pub fn g(buf: &ScanBuffer, at: isize) -> Step {
    if buf.char_at(at + 1) == 'H' {
        return gh(buf, at);
    }

    if buf.char_at(at + 1) == 'N' {
        if at == 1 && buf.is_vowel(0) && !buf.is_slavo_germanic() {
            return Step::diverge("KN", "N", 2);
        }
        // not "cagney"
        if !buf.matches_any_at(at + 2, 2, &["EY"]) && !buf.is_slavo_germanic() {
            return Step::diverge("N", "KN", 2);
        }
        return Step::emit("KN", 2);
    }

    // "tagliaro"
    if buf.matches_any_at(at + 1, 2, &["LI"]) && !buf.is_slavo_germanic() {
        return Step::diverge("KL", "L", 2);
    }

    // -ges-, -gep-, -gel-, -gie- at the start
    if at == 0 && (buf.char_at(at + 1) == 'Y' || buf.matches_any_at(at + 1, 2, &INITIAL_SOFT_G)) {
        return Step::diverge("K", "J", 2);
    }

    // -ger-, -gy-
    if (buf.matches_any_at(at + 1, 2, &["ER"]) || buf.char_at(at + 1) == 'Y')
        && !buf.matches_any_at(0, 6, &["DANGER", "RANGER", "MANGER"])
        && !buf.matches_any_at(at - 1, 1, &["E", "I"])
        && !buf.matches_any_at(at - 1, 3, &["RGY", "OGY"])
    {
        return Step::diverge("K", "J", 2);
    }

    // Italian "biaggi"
    if buf.matches_any_at(at + 1, 1, &["E", "I", "Y"])
        || buf.matches_any_at(at - 1, 4, &["AGGI", "OGGI"])
    {
        let germanic =
            buf.matches_any_at(0, 4, &["VAN ", "VON "]) || buf.matches_any_at(0, 3, &["SCH"]);
        if germanic || buf.matches_any_at(at + 1, 2, &["ET"]) {
            return Step::emit("K", 2);
        }
        // always soft before a French "-ier"
        if buf.matches_any_at(at + 1, 4, &["IER "]) {
            return Step::emit("J", 2);
        }
        return Step::diverge("J", "K", 2);
    }

    Step::emit("K", past_double(buf, at, 'G'))
}

fn gh(buf: &ScanBuffer, at: isize) -> Step {
    if at > 0 && !buf.is_vowel(at - 1) {
        return Step::emit("K", 2);
    }

    // "ghislane", "ghiradelli"
    if at == 0 {
        return if buf.char_at(at + 2) == 'I' {
            Step::emit("J", 2)
        } else {
            Step::emit("K", 2)
        };
    }

    // Parker's rule: "hugh", "bough", "broughton"
    if (at > 1 && buf.matches_any_at(at - 2, 1, &["B", "H", "D"]))
        || (at > 2 && buf.matches_any_at(at - 3, 1, &["B", "H", "D"]))
        || (at > 3 && buf.matches_any_at(at - 4, 1, &["B", "H"]))
    {
        return Step::skip(2);
    }

    // "laugh", "McLaughlin", "cough", "gough", "rough", "tough"
    if at > 2
        && buf.char_at(at - 1) == 'U'
        && buf.matches_any_at(at - 3, 1, &["C", "G", "L", "R", "T"])
    {
        return Step::emit("F", 2);
    }
    if at > 0 && buf.char_at(at - 1) != 'I' {
        return Step::emit("K", 2);
    }
    Step::skip(2)
}
