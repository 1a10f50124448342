//! Pronounceable proper names from alternating syllable parts.

use crate::provider::Content;

const ONSETS: &[&str] = &[
    "br", "cr", "dr", "fr", "gr", "j", "kr", "l", "m", "n", "pr", "", "", "", "r", "sh", "tr",
    "v", "wh", "x", "y", "z",
];

const VOWELS: &[&str] = &[
    "a", "a", "e", "e", "i", "i", "o", "o", "u", "u", "ae", "ie", "oo", "ou",
];

const CODAS: &[&str] = &["b", "ck", "d", "g", "k", "m", "n", "p", "t", "v", "x", "z"];

const PARTS: [&[&str]; 3] = [ONSETS, VOWELS, CODAS];

/// Six syllable parts cycling onset, vowel, coda, capitalized.
pub fn generate_name<C: Content + ?Sized>(content: &mut C) -> String {
    let mut name = String::new();
    for i in 0..6 {
        let part = PARTS[i % 3];
        let idx = content.random(part.len() as i64) as usize;
        name.push_str(part.get(idx).copied().unwrap_or_default());
    }
    capitalize(&name)
}

/// Uppercase the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScriptedContent, StdContent};

    #[test]
    fn scripted_rolls_spell_a_name() {
        // br + a + b, br + a + b
        let mut content = ScriptedContent::new([0, 0, 0, 0, 0, 0]);
        assert_eq!(generate_name(&mut content), "Brabbrab");
    }

    #[test]
    fn empty_onsets_still_capitalize() {
        // "" + ou + ck, "" + ie + z
        let mut content = ScriptedContent::new([11, 13, 1, 12, 11, 11]);
        assert_eq!(generate_name(&mut content), "Ouckiez");
    }

    #[test]
    fn seeded_names_are_stable_and_capitalized() {
        let a = generate_name(&mut StdContent::new(7));
        let b = generate_name(&mut StdContent::new(7));
        assert_eq!(a, b);
        assert!(a.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("zed"), "Zed");
    }
}
