//! String shaping for generated captions.

/// English plural of a noun, using the handful of rules the captions need.
pub fn plural(s: &str) -> String {
    if let Some(stem) = s.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if let Some(stem) = s.strip_suffix("us") {
        return format!("{stem}i");
    }
    if s.ends_with("ch") || s.ends_with('x') || s.ends_with('s') || s.ends_with("sh") {
        return format!("{s}es");
    }
    if let Some(stem) = s.strip_suffix('f') {
        return format!("{stem}ves");
    }
    if s.ends_with("man") || s.ends_with("Man") {
        return format!("{}en", &s[..s.len() - 2]);
    }
    format!("{s}s")
}

/// "a goblin", "an orc", or "3 goblins".
pub fn indefinite(s: &str, quantity: i64) -> String {
    if quantity == 1 {
        let article = match s.chars().next() {
            Some(c) if "AEIOUaeiou".contains(c) => "an",
            _ => "a",
        };
        return format!("{article} {s}");
    }
    format!("{quantity} {}", plural(s))
}

/// "the goblin" or, for more than one, "the goblins".
pub fn definite(s: &str, quantity: i64) -> String {
    if quantity > 1 {
        return format!("the {}", plural(s));
    }
    format!("the {s}")
}

/// Prepend the `|m|`-th word of `words` (1-based). Out-of-range leaves `s` alone.
fn prefix(words: &[&str], m: i64, s: &str, sep: &str) -> String {
    let m = m.unsigned_abs() as usize;
    if m < 1 || m > words.len() {
        return s.to_string();
    }
    format!("{}{sep}{s}", words[m - 1])
}

/// Weakness qualifier; smaller gaps pick milder words.
pub fn sick(m: i64, s: &str) -> String {
    prefix(
        &["dead", "comatose", "crippled", "sick", "undernourished"],
        6 - m.abs(),
        s,
        " ",
    )
}

/// Youth qualifier; smaller gaps pick older ages.
pub fn young(m: i64, s: &str) -> String {
    prefix(
        &["foetal", "baby", "preadolescent", "teenage", "underage"],
        6 - m.abs(),
        s,
        " ",
    )
}

/// Size qualifier; larger gaps pick bigger words.
pub fn big(m: i64, s: &str) -> String {
    prefix(&["greater", "massive", "enormous", "giant", "titanic"], m, s, " ")
}

/// Nature qualifier. Single-word names take a fused prefix ("Were-Rat").
pub fn special(m: i64, s: &str) -> String {
    if s.contains(' ') {
        prefix(&["veteran", "cursed", "warrior", "undead", "demon"], m, s, " ")
    } else {
        prefix(&["Battle-", "cursed ", "Were-", "undead ", "demon "], m, s, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plurals() {
        assert_eq!(plural("Harpy"), "Harpies");
        assert_eq!(plural("Octopus"), "Octopi");
        assert_eq!(plural("Lich"), "Liches");
        assert_eq!(plural("Sphinx"), "Sphinxes");
        assert_eq!(plural("Naga"), "Nagas");
        assert_eq!(plural("Dwarf"), "Dwarves");
        assert_eq!(plural("Eel Man"), "Eel Men");
        assert_eq!(plural("Demicanadian"), "Demicanadians");
    }

    #[test]
    fn articles() {
        assert_eq!(indefinite("Orc", 1), "an Orc");
        assert_eq!(indefinite("goblin", 1), "a goblin");
        assert_eq!(indefinite("Rat", 3), "3 Rats");
        assert_eq!(definite("Rat", 1), "the Rat");
        assert_eq!(definite("Rat", 2), "the Rats");
    }

    #[test]
    fn qualifiers() {
        assert_eq!(sick(-1, "Orc"), "undernourished Orc");
        assert_eq!(sick(-5, "Orc"), "dead Orc");
        assert_eq!(young(-2, "Orc"), "teenage Orc");
        assert_eq!(big(3, "Orc"), "enormous Orc");
        assert_eq!(special(3, "Orc"), "Were-Orc");
        assert_eq!(special(3, "Hill Giant"), "warrior Hill Giant");
        assert_eq!(big(0, "Orc"), "Orc");
        assert_eq!(big(9, "Orc"), "Orc");
        assert_eq!(sick(0, "Orc"), "Orc");
    }

    #[test]
    fn stacked_qualifiers_read_naturally() {
        insta::assert_snapshot!(big(2, &special(2, "Black Pudding")), @"massive cursed Black Pudding");
    }
}
