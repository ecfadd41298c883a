use deunicode::deunicode;
use std::cmp::Ordering;

/// Compares two titles the way a browser's default locale collation does for
/// Latin text.
///
/// Ordering is decided in three passes:
/// 1. letters with accents and case folded away ("Éclair" sorts with "eclair")
/// 2. accents kept, case folded
/// 3. exact text, lowercase before uppercase at the first difference
pub(crate) fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = base_letters(a).cmp(&base_letters(b));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if secondary != Ordering::Equal {
        return secondary;
    }

    tertiary_cmp(a, b)
}

/// Transliterates to ASCII (Ł to l, Œ to oe, ß to ss) and lowercases.
fn base_letters(s: &str) -> String {
    deunicode(s).to_lowercase()
}

fn tertiary_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zucchini", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(locale_cmp("Éclair", "Fudge"), Ordering::Less);
        assert_eq!(locale_cmp("crème brûlée", "Crepes"), Ordering::Less);
        // Same letters: unaccented first
        assert_eq!(locale_cmp("cafe", "café"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Pie", "pie"), Ordering::Greater);
        assert_eq!(locale_cmp("Pie", "Pie"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_cmp("Salad", "Salad Nicoise"), Ordering::Less);
    }

    #[test]
    fn test_letters_beyond_latin_1() {
        assert_eq!(locale_cmp("Łazanki", "Mousse"), Ordering::Less);
        assert_eq!(locale_cmp("Řízek", "Salad"), Ordering::Less);
        assert_eq!(locale_cmp("Pasta", "Řízek"), Ordering::Less);
        assert_eq!(locale_cmp("Salad", "Şiş kebap"), Ordering::Less);
        assert_eq!(locale_cmp("Şiş kebap", "Strudel"), Ordering::Less);
    }

    #[test]
    fn test_ligatures_expand() {
        // Œ reads as "oe", ß as "ss"
        assert_eq!(locale_cmp("Mousse", "Œufs mayo"), Ordering::Less);
        assert_eq!(locale_cmp("Œufs mayo", "Pasta"), Ordering::Less);
        assert_eq!(locale_cmp("Kaiserschmarrn", "Kloße"), Ordering::Less);
    }
}
