use super::Step;
use crate::buffer::ScanBuffer;

pub fn s(buf: &ScanBuffer, at: isize) -> Step {
    // "island", "isle", "carlisle", "carlysle"
    if buf.matches_any_at(at - 1, 3, &["ISL", "YSL"]) {
        return Step::skip(1);
    }

    // "sugar-"
    if at == 0 && buf.matches_any_at(at, 5, &["SUGAR"]) {
        return Step::diverge("X", "S", 1);
    }

    if buf.matches_any_at(at, 2, &["SH"]) {
        // Germanic
        if buf.matches_any_at(at + 1, 4, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
            return Step::emit("S", 2);
        }
        return Step::emit("X", 2);
    }

    // Italian and Armenian
    if buf.matches_any_at(at, 3, &["SIO", "SIA"]) || buf.matches_any_at(at, 4, &["SIAN"]) {
        if buf.is_slavo_germanic() {
            return Step::emit("S", 3);
        }
        return Step::diverge("S", "X", 3);
    }

    // German and anglicised forms: "smith" matches "schmidt", "snider"
    // matches "schneider". Also Slavic -sz-.
    if (at == 0 && buf.matches_any_at(at + 1, 1, &["M", "N", "L", "W"]))
        || buf.matches_any_at(at + 1, 1, &["Z"])
    {
        let advance = if buf.matches_any_at(at + 1, 1, &["Z"]) {
            2
        } else {
            1
        };
        return Step::diverge("S", "X", advance);
    }

    if buf.matches_any_at(at, 2, &["SC"]) {
        return sc(buf, at);
    }

    // French "resnais", "artois"
    let step = if at == buf.last() && buf.matches_any_at(at - 2, 2, &["AI", "OI"]) {
        Step::diverge("", "S", 1)
    } else {
        Step::emit("S", 1)
    };

    if buf.matches_any_at(at + 1, 1, &["S", "Z"]) {
        step.with_advance(2)
    } else {
        step
    }
}

/// Schlesinger's rule.
fn sc(buf: &ScanBuffer, at: isize) -> Step {
    if buf.char_at(at + 2) == 'H' {
        // Dutch "school", "schooner"
        if buf.matches_any_at(at + 3, 2, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
            // "schermerhorn", "schenker"
            if buf.matches_any_at(at + 3, 2, &["ER", "EN"]) {
                return Step::diverge("X", "SK", 3);
            }
            return Step::emit("SK", 3);
        }
        if at == 0 && !buf.is_vowel(3) && buf.char_at(3) != 'W' {
            return Step::diverge("X", "S", 3);
        }
        return Step::emit("X", 3);
    }

    if buf.matches_any_at(at + 2, 1, &["I", "E", "Y"]) {
        return Step::emit("S", 3);
    }

    Step::emit("SK", 3)
}
