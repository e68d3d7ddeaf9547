//! Name matching
//!
//! Substance, class, effect and interaction names arrive as free text from the
//! feed. Two names denote the same thing when they are *meaning-equal*: equal
//! after trimming surrounding whitespace and folding case.

use regex::RegexBuilder;

/// Character that acts as a wildcard inside interaction patterns
pub const WILDCARD: char = 'x';

/// Normalized form of a name, usable as a lookup key
///
/// # Examples
///
/// ```
/// use mixcheck_domain::names::normalize;
///
/// assert_eq!(normalize("  Serotonin Releasers "), "serotonin releasers");
/// ```
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether two names are meaning-equal
///
/// # Examples
///
/// ```
/// use mixcheck_domain::names::meaning_equal;
///
/// assert!(meaning_equal("MDMA", "mdma"));
/// assert!(meaning_equal("Benzodiazepines ", "benzodiazepines"));
/// assert!(!meaning_equal("MDA", "MDMA"));
/// ```
pub fn meaning_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Match a wildcard pattern against a whole candidate name
///
/// Every `x` in `pattern` stands for zero or more non-whitespace characters.
/// The match is anchored at both ends and ignores case. A pattern without any
/// `x` never matches, and neither does a pattern that does not compile.
///
/// # Examples
///
/// ```
/// use mixcheck_domain::names::wildcard_matches;
///
/// assert!(wildcard_matches("4-HxA", "4-HMA"));
/// assert!(!wildcard_matches("4-HxA", "4-FA"));
/// assert!(!wildcard_matches("MDMA", "MDMA"));
/// ```
pub fn wildcard_matches(pattern: &str, candidate: &str) -> bool {
    if !pattern.contains(WILDCARD) {
        return false;
    }

    let expression = format!("^{}$", pattern.replace(WILDCARD, r"[\S]*"));
    match RegexBuilder::new(&expression).case_insensitive(true).build() {
        Ok(regex) => regex.is_match(candidate),
        Err(_) => false,
    }
}

/// Case-insensitive substring test
///
/// An empty needle is never contained, so a blank class tag cannot match
/// every interaction entry.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive prefix test
pub fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Display form with the first letter of every word upper-cased and the rest
/// lower-cased
///
/// Words are delimited by whitespace only, so `"open-eye visuals"` becomes
/// `"Open-eye Visuals"`.
pub fn capitalize_words(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: meaning-equality is reflexive and survives case changes
        #[test]
        fn test_meaning_equal_case_insensitive(name in "[A-Za-z0-9 -]{0,24}") {
            prop_assert!(meaning_equal(&name, &name));
            prop_assert!(meaning_equal(&name.to_uppercase(), &name.to_lowercase()));
        }

        /// Property: meaning-equality is symmetric
        #[test]
        fn test_meaning_equal_symmetric(a in "[A-Za-z ]{0,12}", b in "[A-Za-z ]{0,12}") {
            prop_assert_eq!(meaning_equal(&a, &b), meaning_equal(&b, &a));
        }

        /// Property: a pattern without the wildcard character never matches
        #[test]
        fn test_pattern_without_x_never_matches(
            pattern in "[A-Wa-wyz0-9-]{0,16}",
            candidate in "[A-Za-z0-9-]{0,16}",
        ) {
            prop_assert!(!wildcard_matches(&pattern, &candidate));
        }

        /// Property: a lone wildcard matches any whitespace-free name
        #[test]
        fn test_lone_wildcard_matches_single_token(candidate in "[A-Za-z0-9-]{0,16}") {
            prop_assert!(wildcard_matches("x", &candidate));
        }
    }
}
