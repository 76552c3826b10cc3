//! Initial phrase from a page URL.
//!
//! A compatibility page can be linked as `compat.html?unreal+tournament`.
//! The whole query string is the phrase: it is percent-decoded, a trailing
//! tracking parameter appended by link shorteners and social sites is cut
//! off, and `+` becomes a space.

use crate::cli::PhraseSource;
use crate::{FilterError, Result};
use percent_encoding::percent_decode_str;
use url::Url;

/// Extract the initial filter phrase from a URL or a bare query string.
///
/// Returns `None` when there is no query at all. An absolute URL that fails
/// to parse is an error. Input without a scheme needs a `?`: the query is
/// whatever follows it, up to any `#fragment`.
pub fn phrase_from_url<S: AsRef<str>>(
    input: &str,
    tracking_params: &[S],
) -> Result<Option<String>> {
    let raw_query = match raw_query(input)? {
        Some(query) if !query.is_empty() => query,
        _ => return Ok(None),
    };

    let decoded = percent_decode_str(&raw_query).decode_utf8_lossy();
    let stripped = strip_tracking(&decoded, tracking_params);
    let phrase = stripped.replace('+', " ");

    crate::logging::debug_log(&format!(
        "Bootstrap phrase from '{}': '{}'",
        input, phrase
    ));

    Ok(Some(phrase))
}

/// Resolve the phrase for the first filter pass. A URL without a query
/// means no filter. Phrases longer than `max_phrase_length` characters are
/// rejected whatever their source.
pub fn initial_phrase<S: AsRef<str>>(
    source: &PhraseSource,
    tracking_params: &[S],
    max_phrase_length: usize,
) -> Result<String> {
    let phrase = match source {
        PhraseSource::Phrase(phrase) => phrase.clone(),
        PhraseSource::Url(url) => phrase_from_url(url, tracking_params)?.unwrap_or_default(),
        PhraseSource::Empty => String::new(),
    };
    if phrase.chars().count() > max_phrase_length {
        return Err(FilterError::InvalidInput(format!(
            "phrase from {} is longer than {} characters",
            source.name(),
            max_phrase_length
        )));
    }
    crate::logging::info_log(&format!(
        "Initial phrase from {}: '{}'",
        source.name(),
        phrase
    ));
    Ok(phrase)
}

fn raw_query(input: &str) -> Result<Option<String>> {
    if input.contains("://") {
        let url = Url::parse(input).map_err(|e| FilterError::InvalidUrl {
            url: input.to_string(),
            reason: e.to_string(),
        })?;
        return Ok(url.query().map(str::to_string));
    }

    Ok(input.split_once('?').map(|(_, query)| {
        let query = query.split_once('#').map_or(query, |(query, _)| query);
        query.to_string()
    }))
}

/// Cut the query at the first `&param=` (or a leading `param=`) of any
/// tracking parameter
fn strip_tracking<S: AsRef<str>>(query: &str, tracking_params: &[S]) -> String {
    let cut = tracking_params
        .iter()
        .filter_map(|param| {
            let param = param.as_ref();
            if param.is_empty() {
                return None;
            }
            if query.starts_with(&format!("{}=", param)) {
                return Some(0);
            }
            query.find(&format!("&{}=", param))
        })
        .min();

    match cut {
        Some(index) => query[..index].to_string(),
        None => query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACKING: &[&str] = &["fbclid"];

    #[test]
    fn test_phrase_from_absolute_url() {
        let phrase =
            phrase_from_url("https://example.org/compat.html?unreal+tournament", TRACKING)
                .unwrap();
        assert_eq!(phrase.as_deref(), Some("unreal tournament"));
    }

    #[test]
    fn test_phrase_from_bare_query() {
        let cases = [
            ("?foo+bar", Some("foo bar")),
            ("foo", None),
            ("compat.html", None),
            ("compat.html?deus%20ex", Some("deus ex")),
            ("compat.html?foo#top", Some("foo")),
            ("compat.html#top", None),
            ("compat.html?", None),
            ("", None),
        ];

        for (input, expected) in cases {
            let phrase = phrase_from_url(input, TRACKING).unwrap();
            assert_eq!(phrase.as_deref(), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_url_without_query() {
        let phrase = phrase_from_url("https://example.org/compat.html", TRACKING).unwrap();
        assert_eq!(phrase, None);
    }

    #[test]
    fn test_tracking_parameter_stripped() {
        let phrase = phrase_from_url(
            "https://example.org/compat.html?lineage+2&fbclid=IwAR0abc&x=1",
            TRACKING,
        )
        .unwrap();
        assert_eq!(phrase.as_deref(), Some("lineage 2"));
    }

    #[test]
    fn test_only_tracking_parameter_gives_empty_phrase() {
        let phrase = phrase_from_url("?fbclid=IwAR0abc", TRACKING).unwrap();
        assert_eq!(phrase.as_deref(), Some(""));
    }

    #[test]
    fn test_escaped_separator_is_decoded_before_stripping() {
        let phrase = phrase_from_url("?bioshock%26fbclid%3Dabc", TRACKING).unwrap();
        assert_eq!(phrase.as_deref(), Some("bioshock"));
    }

    #[test]
    fn test_encoded_plus_becomes_space() {
        let phrase = phrase_from_url("?a%2Bb", TRACKING).unwrap();
        assert_eq!(phrase.as_deref(), Some("a b"));
    }

    #[test]
    fn test_other_ampersands_are_kept() {
        let phrase = phrase_from_url("?tom+&+jerry", TRACKING).unwrap();
        assert_eq!(phrase.as_deref(), Some("tom & jerry"));
    }

    #[test]
    fn test_multiple_tracking_params_cut_at_first() {
        let params = ["fbclid", "gclid"];
        let phrase = phrase_from_url("?x&gclid=1&fbclid=2", &params).unwrap();
        assert_eq!(phrase.as_deref(), Some("x"));
    }

    #[test]
    fn test_fragment_is_not_part_of_phrase() {
        let phrase =
            phrase_from_url("https://example.org/compat.html?foo+bar#top", TRACKING).unwrap();
        assert_eq!(phrase.as_deref(), Some("foo bar"));
    }

    #[test]
    fn test_initial_phrase_sources() {
        let source = PhraseSource::Phrase("Deus Ex".to_string());
        assert_eq!(initial_phrase(&source, TRACKING, 100).unwrap(), "Deus Ex");

        let source = PhraseSource::Url("compat.html?deus+ex&fbclid=1".to_string());
        assert_eq!(initial_phrase(&source, TRACKING, 100).unwrap(), "deus ex");

        let source = PhraseSource::Url("https://example.org/compat.html".to_string());
        assert_eq!(initial_phrase(&source, TRACKING, 100).unwrap(), "");

        let source = PhraseSource::Url("compat.html".to_string());
        assert_eq!(initial_phrase(&source, TRACKING, 100).unwrap(), "");

        assert_eq!(
            initial_phrase(&PhraseSource::Empty, TRACKING, 100).unwrap(),
            ""
        );
    }

    #[test]
    fn test_initial_phrase_length_limit() {
        let query = format!("?{}", "a".repeat(11));
        let source = PhraseSource::Url(query);
        let err = initial_phrase(&source, TRACKING, 10).unwrap_err();
        assert!(matches!(err, FilterError::InvalidInput(_)));
        assert_eq!(initial_phrase(&source, TRACKING, 11).unwrap().len(), 11);

        let source = PhraseSource::Phrase("abcdef".to_string());
        assert!(initial_phrase(&source, TRACKING, 5).is_err());
    }

    #[test]
    fn test_invalid_absolute_url() {
        let err = phrase_from_url("http://[bad/compat.html?x", TRACKING).unwrap_err();
        assert!(matches!(err, FilterError::InvalidUrl { .. }));
    }
}
