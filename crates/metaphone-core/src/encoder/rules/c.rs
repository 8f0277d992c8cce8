use super::Step;
use crate::buffer::ScanBuffer;

/// Letters after CH that keep it hard when a vowel or the word start precedes it.
const HARD_CH_FOLLOWERS: [&str; 10] = ["L", "R", "N", "M", "B", "H", "F", "V", "W", " "];

pub fn c(buf: &ScanBuffer, at: isize) -> Step {
    // Germanic "-ach-" as in "bacher", "macher", but not "-achi-" / "-ache-"
    if at > 1
        && !buf.is_vowel(at - 2)
        && buf.matches_any_at(at - 1, 3, &["ACH"])
        && buf.char_at(at + 2) != 'I'
        && (buf.char_at(at + 2) != 'E' || buf.matches_any_at(at - 2, 6, &["BACHER", "MACHER"]))
    {
        return Step::emit("K", 2);
    }

    if at == 0 && buf.matches_any_at(at, 6, &["CAESAR"]) {
        return Step::emit("S", 2);
    }

    // Italian "chianti"
    if buf.matches_any_at(at, 4, &["CHIA"]) {
        return Step::emit("K", 2);
    }

    if buf.matches_any_at(at, 2, &["CH"]) {
        return ch(buf, at);
    }

    // "czerny"
    if buf.matches_any_at(at, 2, &["CZ"]) && !buf.matches_any_at(at - 2, 4, &["WICZ"]) {
        return Step::diverge("S", "X", 2);
    }

    // "focaccia"
    if buf.matches_any_at(at + 1, 3, &["CIA"]) {
        return Step::emit("X", 3);
    }

    // double C, but not "McClellan"
    if buf.matches_any_at(at, 2, &["CC"]) && !(at == 1 && buf.char_at(0) == 'M') {
        // "bellocchio" but not "bacchus"
        if buf.matches_any_at(at + 2, 1, &["I", "E", "H"])
            && !buf.matches_any_at(at + 2, 2, &["HU"])
        {
            // "accident", "accede", "succeed"
            if (at == 1 && buf.char_at(at - 1) == 'A')
                || buf.matches_any_at(at - 1, 5, &["UCCEE", "UCCES"])
            {
                return Step::emit("KS", 3);
            }
            // "bacci", "bertucci"
            return Step::emit("X", 3);
        }
        return Step::emit("K", 2);
    }

    if buf.matches_any_at(at, 2, &["CK", "CG", "CQ"]) {
        return Step::emit("K", 2);
    }

    if buf.matches_any_at(at, 2, &["CI", "CE", "CY"]) {
        // Italian vs. English
        if buf.matches_any_at(at, 3, &["CIO", "CIE", "CIA"]) {
            return Step::diverge("S", "X", 2);
        }
        return Step::emit("S", 2);
    }

    // "mac caffrey", "mac gregor"
    let advance = if buf.matches_any_at(at + 1, 2, &[" C", " Q", " G"]) {
        3
    } else if buf.matches_any_at(at + 1, 1, &["C", "K", "Q"])
        && !buf.matches_any_at(at + 1, 2, &["CE", "CI"])
    {
        2
    } else {
        1
    };
    Step::emit("K", advance)
}

fn ch(buf: &ScanBuffer, at: isize) -> Step {
    // "michael"
    if at > 0 && buf.matches_any_at(at, 4, &["CHAE"]) {
        return Step::diverge("K", "X", 2);
    }

    // Greek roots: "chemistry", "chorus"
    if at == 0
        && (buf.matches_any_at(at + 1, 5, &["HARAC", "HARIS"])
            || buf.matches_any_at(at + 1, 3, &["HOR", "HYM", "HIA", "HEM"]))
        && !buf.matches_any_at(0, 5, &["CHORE"])
    {
        return Step::emit("K", 2);
    }

    let germanic =
        buf.matches_any_at(0, 4, &["VAN ", "VON "]) || buf.matches_any_at(0, 3, &["SCH"]);
    // "architect", "orchestra", "orchid" but not "arch"
    let greek = buf.matches_any_at(at - 2, 6, &["ORCHES", "ARCHIT", "ORCHID"]);
    // "wachtler", "wechsler" but not "tichner"
    let after_vowel = at == 0 || buf.matches_any_at(at - 1, 1, &["A", "O", "U", "E"]);
    let kh_cluster = buf.matches_any_at(at + 2, 1, &["T", "S"])
        || (after_vowel && buf.matches_any_at(at + 2, 1, &HARD_CH_FOLLOWERS));

    if germanic || greek || kh_cluster {
        return Step::emit("K", 2);
    }

    if at == 0 {
        return Step::emit("X", 2);
    }
    // "McHugh"
    if buf.matches_any_at(0, 2, &["MC"]) {
        return Step::emit("K", 2);
    }
    Step::diverge("X", "K", 2)
}

pub fn c_cedilla(_buf: &ScanBuffer, _at: isize) -> Step {
    Step::emit("S", 1)
}
