//! Request validation for the generation endpoint.

use regex::Regex;
use std::sync::OnceLock;

/// Difficulty labels accepted by the form endpoint, compared after lowercasing.
pub const DIFFICULTIES: [&str; 3] = ["baja", "mediana", "alta"];

fn strict_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[a-záéíóúüñ]+(?:\s*,\s*[a-záéíóúüñ]+)*$").unwrap()
    })
}

fn lax_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)(?:[a-záéíóúüñ]+,?)+").unwrap())
}

/// Check a free-text ingredient or allergy list.
///
/// The canonical check requires the whole string to be alphabetic tokens
/// optionally separated by commas; the empty string passes and means "no
/// constraint". The lax variant only requires the pattern to occur somewhere
/// in the string, which lets almost any text through but rejects the empty
/// string.
pub fn is_valid_token_list(s: &str, lax: bool) -> bool {
    if lax {
        lax_pattern().is_match(s)
    } else {
        s.is_empty() || strict_pattern().is_match(s)
    }
}

/// Check a difficulty label, case-insensitively.
pub fn is_valid_difficulty(s: &str) -> bool {
    DIFFICULTIES.contains(&s.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_accepts_token_lists() {
        assert!(is_valid_token_list("pollo", false));
        assert!(is_valid_token_list("pollo,arroz", false));
        assert!(is_valid_token_list("pollo, arroz , azafrán", false));
        assert!(is_valid_token_list("", false));
    }

    #[test]
    fn test_strict_rejects_other_text() {
        assert!(!is_valid_token_list("pollo; arroz", false));
        assert!(!is_valid_token_list("2 huevos", false));
        assert!(!is_valid_token_list("DROP TABLE recetas", false));
    }

    #[test]
    fn test_lax_matches_anywhere() {
        assert!(is_valid_token_list("pollo", true));
        assert!(is_valid_token_list("pollo; arroz!", true));
        assert!(is_valid_token_list("2 huevos", true));
        assert!(!is_valid_token_list("", true));
        assert!(!is_valid_token_list("123 !!", true));
    }

    #[test]
    fn test_difficulty_labels() {
        assert!(is_valid_difficulty("baja"));
        assert!(is_valid_difficulty("Mediana"));
        assert!(is_valid_difficulty("ALTA"));
        assert!(!is_valid_difficulty("extrema"));
        assert!(!is_valid_difficulty(""));
    }
}
