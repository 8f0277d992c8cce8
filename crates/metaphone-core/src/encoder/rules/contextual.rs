//! Consonants whose sound depends mostly on the word's position and origin.

use super::{past_double, Step};
use crate::buffer::ScanBuffer;
use crate::keys::Alternate;

pub fn j(buf: &ScanBuffer, at: isize) -> Step {
    // Spanish "jose", "san jacinto"
    if buf.matches_any_at(at, 4, &["JOSE"]) || buf.matches_any_at(0, 4, &["SAN "]) {
        if (at == 0 && buf.char_at(at + 4) == ' ') || buf.matches_any_at(0, 4, &["SAN "]) {
            return Step::emit("H", 1);
        }
        return Step::diverge("J", "H", 1);
    }

    let advance = past_double(buf, at, 'J');

    if at == 0 {
        // "Yankelovich" / "Jankelowicz"
        return Step::diverge("J", "A", advance);
    }

    // Spanish "bajador"
    if buf.is_vowel(at - 1) && !buf.is_slavo_germanic() && matches!(buf.char_at(at + 1), 'A' | 'O')
    {
        return Step::diverge("J", "H", advance);
    }

    if at == buf.last() {
        return Step::diverge("J", " ", advance);
    }

    if !buf.matches_any_at(at + 1, 1, &["L", "T", "K", "S", "N", "M", "B", "Z"])
        && !buf.matches_any_at(at - 1, 1, &["S", "K", "L"])
    {
        return Step::emit("J", advance);
    }

    Step::skip(advance)
}

pub fn l(buf: &ScanBuffer, at: isize) -> Step {
    if buf.char_at(at + 1) != 'L' {
        return Step::emit("L", 1);
    }

    // Spanish "cabrillo", "gallegos"
    let last = buf.last();
    let third_from_end =
        at == buf.len() - 3 && buf.matches_any_at(at - 1, 4, &["ILLO", "ILLA", "ALLE"]);
    let vowel_ending =
        buf.matches_any_at(last - 1, 2, &["AS", "OS"]) || buf.matches_any_at(last, 1, &["A", "O"]);
    let spanish_ending =
        third_from_end || (vowel_ending && buf.matches_any_at(at - 1, 4, &["ALLE"]));
    if spanish_ending {
        return Step::diverge("L", " ", 2);
    }

    Step::emit("L", 2)
}

pub fn r(buf: &ScanBuffer, at: isize) -> Step {
    let advance = past_double(buf, at, 'R');

    // French "rogier", but not "hochmeier"
    if at == buf.last()
        && !buf.is_slavo_germanic()
        && buf.matches_any_at(at - 2, 2, &["IE"])
        && !buf.matches_any_at(at - 4, 2, &["ME", "MA"])
    {
        return Step::diverge("", "R", advance);
    }

    Step::emit("R", advance)
}

pub fn t(buf: &ScanBuffer, at: isize) -> Step {
    if buf.matches_any_at(at, 4, &["TION"]) {
        return Step::emit("X", 3);
    }

    if buf.matches_any_at(at, 3, &["TIA", "TCH"]) {
        return Step::emit("X", 3);
    }

    if buf.matches_any_at(at, 2, &["TH"]) || buf.matches_any_at(at, 3, &["TTH"]) {
        // "thomas", "thames", or Germanic
        if buf.matches_any_at(at + 2, 2, &["OM", "AM"])
            || buf.matches_any_at(0, 4, &["VAN ", "VON "])
            || buf.matches_any_at(0, 3, &["SCH"])
        {
            return Step::emit("T", 2);
        }
        return Step::diverge("0", "T", 2);
    }

    if buf.matches_any_at(at + 1, 1, &["T", "D"]) {
        Step::emit("T", 2)
    } else {
        Step::emit("T", 1)
    }
}

pub fn w(buf: &ScanBuffer, at: isize) -> Step {
    // can also be in the middle of a word
    if buf.matches_any_at(at, 2, &["WR"]) {
        return Step::emit("R", 2);
    }

    let mut step = Step::skip(1);
    if at == 0 && (buf.is_vowel(at + 1) || buf.matches_any_at(at, 2, &["WH"])) {
        step = if buf.is_vowel(at + 1) {
            // "Wasserman" should match "Vasserman"
            Step::diverge("A", "F", 1)
        } else {
            // "Uomo" should match "Womo"
            Step::emit("A", 1)
        };
    }

    // "Arnow" should match "Arnoff"
    if (at == buf.last() && buf.is_vowel(at - 1))
        || buf.matches_any_at(at - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || buf.matches_any_at(0, 3, &["SCH"])
    {
        return step.and("", Alternate::Distinct("F"));
    }

    // Polish "filipowicz"
    if buf.matches_any_at(at, 4, &["WICZ", "WITZ"]) {
        return step.and("TS", Alternate::Distinct("FX")).with_advance(4);
    }

    step
}

pub fn x(buf: &ScanBuffer, at: isize) -> Step {
    let advance = if buf.matches_any_at(at + 1, 1, &["C", "X"]) {
        2
    } else {
        1
    };

    // French "breaux"
    let silent = at == buf.last()
        && (buf.matches_any_at(at - 3, 3, &["IAU", "EAU"])
            || buf.matches_any_at(at - 2, 2, &["AU", "OU"]));
    if silent {
        Step::skip(advance)
    } else {
        Step::emit("KS", advance)
    }
}

pub fn z(buf: &ScanBuffer, at: isize) -> Step {
    // Chinese pinyin "zhao"
    if buf.char_at(at + 1) == 'H' {
        return Step::emit("J", 2);
    }

    let advance = past_double(buf, at, 'Z');
    if buf.matches_any_at(at + 1, 2, &["ZO", "ZI", "ZA"])
        || (buf.is_slavo_germanic() && at > 0 && buf.char_at(at - 1) != 'T')
    {
        Step::diverge("S", "TS", advance)
    } else {
        Step::emit("S", advance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferLayout;

    fn buf(word: &str) -> ScanBuffer {
        ScanBuffer::new(word, BufferLayout::Canonical)
    }

    #[test]
    fn spanish_j() {
        assert_eq!(j(&buf("jose"), 0), Step::emit("H", 1));
        assert_eq!(j(&buf("san jacinto"), 4), Step::emit("H", 1));
        assert_eq!(j(&buf("josef"), 0), Step::diverge("J", "H", 1));
        assert_eq!(j(&buf("bajador"), 2), Step::diverge("J", "H", 1));
    }

    #[test]
    fn other_j() {
        assert_eq!(j(&buf("jankelowicz"), 0), Step::diverge("J", "A", 1));
        assert_eq!(j(&buf("raj"), 2), Step::diverge("J", " ", 1));
        assert_eq!(j(&buf("object"), 2), Step::emit("J", 1));
        assert_eq!(j(&buf("rapelje"), 5), Step::skip(1));
        assert_eq!(j(&buf("hajj"), 2), Step::emit("J", 2));
    }

    #[test]
    fn spanish_ll() {
        assert_eq!(l(&buf("cabrillo"), 5), Step::diverge("L", " ", 2));
        assert_eq!(l(&buf("gallegos"), 2), Step::diverge("L", " ", 2));
        assert_eq!(l(&buf("bell"), 2), Step::emit("L", 2));
        assert_eq!(l(&buf("lot"), 0), Step::emit("L", 1));
    }

    #[test]
    fn french_r() {
        assert_eq!(r(&buf("rogier"), 5), Step::diverge("", "R", 1));
        assert_eq!(r(&buf("hochmeier"), 8), Step::emit("R", 1));
        assert_eq!(r(&buf("carr"), 2), Step::emit("R", 2));
    }

    #[test]
    fn t_digraphs() {
        assert_eq!(t(&buf("nation"), 2), Step::emit("X", 3));
        assert_eq!(t(&buf("martial"), 3), Step::emit("X", 3));
        assert_eq!(t(&buf("watch"), 2), Step::emit("X", 3));
        assert_eq!(t(&buf("thomas"), 0), Step::emit("T", 2));
        assert_eq!(t(&buf("thumb"), 0), Step::diverge("0", "T", 2));
        assert_eq!(t(&buf("matthew"), 2), Step::diverge("0", "T", 2));
        assert_eq!(t(&buf("butter"), 2), Step::emit("T", 2));
    }

    #[test]
    fn w_cases() {
        assert_eq!(w(&buf("wright"), 0), Step::emit("R", 2));
        assert_eq!(w(&buf("wasserman"), 0), Step::diverge("A", "F", 1));
        assert_eq!(w(&buf("whale"), 0), Step::emit("A", 1));
        assert_eq!(w(&buf("arnow"), 4), Step::diverge("", "F", 1));
        assert_eq!(w(&buf("schwein"), 3), Step::diverge("", "F", 1));
        assert_eq!(w(&buf("filipowicz"), 6), Step::diverge("TS", "FX", 4));
        assert_eq!(w(&buf("bowl"), 2), Step::skip(1));
    }

    #[test]
    fn initial_w_before_vowel() {
        assert_eq!(w(&buf("wa"), 0), Step::diverge("A", "F", 1));
        assert_eq!(
            w(&buf("wicz"), 0),
            Step::diverge("A", "F", 4).and("TS", Alternate::Distinct("FX"))
        );
    }

    #[test]
    fn x_cases() {
        assert_eq!(x(&buf("tux"), 2), Step::emit("KS", 1));
        assert_eq!(x(&buf("breaux"), 5), Step::skip(1));
        assert_eq!(x(&buf("maxx"), 2), Step::emit("KS", 2));
    }

    #[test]
    fn z_cases() {
        assert_eq!(z(&buf("zhao"), 0), Step::emit("J", 2));
        assert_eq!(z(&buf("pizza"), 2), Step::diverge("S", "TS", 2));
        assert_eq!(z(&buf("zoo"), 0), Step::emit("S", 1));
        assert_eq!(z(&buf("kazak"), 2), Step::diverge("S", "TS", 1));
        assert_eq!(z(&buf("fritz"), 4), Step::emit("S", 1));
    }
}
