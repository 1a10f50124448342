//! Access to the `|`-delimited fields of pool entries.
//!
//! Entries pack a display name, a level or quality, and optional extra data:
//! `"Goblin|1|ear"`, `"Vorpal|+7"`, `"Half Orc|HP Max"`.

/// The `index`-th field of an entry, or `""` when absent.
pub fn field(entry: &str, index: usize) -> &str {
    entry.split('|').nth(index).unwrap_or("")
}

/// The `index`-th field parsed as an integer, falling back to zero.
pub fn field_int(entry: &str, index: usize) -> i64 {
    field(entry, index).trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_by_index() {
        assert_eq!(field("Goblin|1|ear", 0), "Goblin");
        assert_eq!(field("Goblin|1|ear", 2), "ear");
        assert_eq!(field("Goblin|1|ear", 3), "");
        assert_eq!(field("plain", 0), "plain");
    }

    #[test]
    fn numeric_fields_fall_back_to_zero() {
        assert_eq!(field_int("Vorpal|+7", 1), 7);
        assert_eq!(field_int("Dull|-2", 1), -2);
        assert_eq!(field_int("Goblin|x|ear", 1), 0);
        assert_eq!(field_int("Goblin", 1), 0);
    }
}
