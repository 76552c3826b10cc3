//! Query phrase parsing.
//!
//! A phrase becomes an ordered list of lowercase terms. Whether a filter is
//! active depends on the raw phrase, not on the terms: `"  "` is an active
//! filter with no terms.

/// A parsed filter phrase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    phrase: String,
    terms: Vec<String>,
}

impl Query {
    /// Parse a phrase into lowercase terms split on single spaces
    pub fn parse(phrase: &str) -> Self {
        let terms = phrase
            .to_lowercase()
            .split(' ')
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            phrase: phrase.to_string(),
            terms,
        }
    }

    /// True unless the phrase is exactly empty
    pub fn has_filter(&self) -> bool {
        !self.phrase.is_empty()
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Every term must be a substring of `text`, which the caller has
    /// already lowercased. Zero terms always match.
    pub fn matches(&self, text: &str) -> bool {
        self.terms.iter().all(|term| text.contains(term.as_str()))
    }

    /// Text for the match counter: empty when no filter is active
    pub fn count_label(&self, match_count: usize) -> String {
        if self.has_filter() {
            format!("{} game(s)", match_count)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_and_lowercases() {
        let query = Query::parse("Unreal  TOURNAMENT 2004");
        assert!(query.has_filter());
        assert_eq!(query.terms(), &["unreal", "tournament", "2004"]);
        assert_eq!(query.phrase(), "Unreal  TOURNAMENT 2004");
    }

    #[test]
    fn test_empty_phrase_has_no_filter() {
        let query = Query::parse("");
        assert!(!query.has_filter());
        assert!(query.terms().is_empty());
        assert_eq!(query.count_label(12), "");
    }

    #[test]
    fn test_space_only_phrase_is_active_without_terms() {
        let query = Query::parse("   ");
        assert!(query.has_filter());
        assert!(query.terms().is_empty());
        assert!(query.matches("anything at all"));
        assert_eq!(query.count_label(3), "3 game(s)");
    }

    #[test]
    fn test_only_spaces_separate_terms() {
        // Tabs are not separators, so the tab stays inside the term
        let query = Query::parse("a\tb");
        assert_eq!(query.terms(), &["a\tb"]);
        assert!(!query.matches("a b"));
    }

    #[test]
    fn test_matches_requires_every_term() {
        let query = Query::parse("foo engine");
        assert!(query.matches("foo engine a"));
        assert!(query.matches("engine x foo"));
        assert!(!query.matches("foo only"));
        assert!(!query.matches("bar engine b"));
    }

    #[test]
    fn test_matches_is_substring_based() {
        let query = Query::parse("TOUR");
        assert!(query.matches("unreal tournament"));
        assert!(!query.matches("unreal"));
    }

    #[test]
    fn test_count_label_format() {
        let query = Query::parse("foo");
        assert_eq!(query.count_label(0), "0 game(s)");
        assert_eq!(query.count_label(1), "1 game(s)");
        assert_eq!(query.count_label(42), "42 game(s)");
    }
}
