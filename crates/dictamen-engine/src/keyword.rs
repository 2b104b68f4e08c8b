//! Case-insensitive substring keyword matching.
//!
//! No word boundaries: a keyword inside a longer word counts ("iva" matches
//! "definitiva").

/// Keywords from `keywords` that occur in `haystack`, in keyword order.
pub(crate) fn found_keywords<'k>(haystack: &str, keywords: &'k [String]) -> Vec<&'k str> {
    let lowered = haystack.to_lowercase();
    found_in_lowered(&lowered, keywords)
}

/// As [`found_keywords`], for a haystack that is already lowercase.
pub(crate) fn found_in_lowered<'k>(lowered: &str, keywords: &'k [String]) -> Vec<&'k str> {
    keywords
        .iter()
        .filter(|kw| lowered.contains(kw.to_lowercase().as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn case_insensitive_on_both_sides() {
        let keywords = kws(&["Cláusula", "firma"]);
        assert_eq!(
            found_keywords("LA CLÁUSULA PRIMERA Y LA FIRMA", &keywords),
            vec!["Cláusula", "firma"]
        );
    }

    #[test]
    fn matches_inside_longer_words() {
        let keywords = kws(&["iva", "firma"]);
        assert_eq!(
            found_keywords("Resolución definitiva; firmantes", &keywords),
            vec!["iva", "firma"]
        );
    }

    #[test]
    fn keeps_keyword_order_and_duplicates() {
        let keywords = kws(&["b", "a", "b"]);
        assert_eq!(found_keywords("a b", &keywords), vec!["b", "a", "b"]);
    }

    #[test]
    fn empty_keywords() {
        assert!(found_keywords("texto", &[]).is_empty());
    }
}
