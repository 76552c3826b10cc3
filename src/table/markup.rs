//! Row markup scanning.
//!
//! Detects the classification markers in a row's raw inner markup and
//! reduces the markup to searchable plain text. Markers are matched
//! case-insensitively and with or without an opening quote, since hand-edited
//! and re-serialized HTML both show up in the wild.

use crate::{FilterError, Result};
use regex::Regex;

const SPANNING_PATTERN: &str = r#"(?i)colspan="#;
const ENGINE_PATTERN: &str = r#"(?i)class="?engine"#;
const YEAR_PATTERN: &str = r#"(?i)class="?year"#;
const STRIP_PATTERN: &str = r"<[^>]+>|&nbsp;|\r|\n";
const SQUEEZE_PATTERN: &str = r"\s+";

/// Markers found in a row's raw markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMarkers {
    pub spanning: bool,
    pub engine: bool,
    pub year: bool,
}

/// Classification of a data row, derived on every filter pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Nothing but whitespace once tags are stripped
    Blank,
    /// Engine info row, never hidden by matching
    Engine,
    /// Section header grouping the games below it
    Year,
    /// Wide row spanning several columns (footnotes and the like)
    Spanning,
    /// Catalog entry subject to term matching
    Game,
}

impl RowKind {
    /// Blank wins over every marker; engine, year and spanning are checked
    /// in that order before falling back to a game row. Blank needs at least
    /// one whitespace character, so a row with no content at all is a game.
    pub fn classify(markers: RowMarkers, text: &str) -> Self {
        if !text.is_empty() && text.trim().is_empty() {
            RowKind::Blank
        } else if markers.engine {
            RowKind::Engine
        } else if markers.year {
            RowKind::Year
        } else if markers.spanning {
            RowKind::Spanning
        } else {
            RowKind::Game
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RowKind::Blank => "blank",
            RowKind::Engine => "engine",
            RowKind::Year => "year",
            RowKind::Spanning => "spanning",
            RowKind::Game => "game",
        }
    }
}

/// Result of scanning one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRow {
    pub markers: RowMarkers,
    /// Tag-stripped, whitespace-collapsed, lowercased text
    pub text: String,
    pub kind: RowKind,
}

/// Compiled patterns for marker detection and tag stripping
#[derive(Debug, Clone)]
pub struct MarkupScanner {
    spanning: Regex,
    engine: Regex,
    year: Regex,
    strip: Regex,
    squeeze: Regex,
}

impl MarkupScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            spanning: compile(SPANNING_PATTERN)?,
            engine: compile(ENGINE_PATTERN)?,
            year: compile(YEAR_PATTERN)?,
            strip: compile(STRIP_PATTERN)?,
            squeeze: compile(SQUEEZE_PATTERN)?,
        })
    }

    /// Detect markers in raw markup
    pub fn markers(&self, markup: &str) -> RowMarkers {
        RowMarkers {
            spanning: self.spanning.is_match(markup),
            engine: self.engine.is_match(markup),
            year: self.year.is_match(markup),
        }
    }

    /// Replace tags, `&nbsp;` and line breaks with spaces, squeeze whitespace
    /// runs to one space, and lowercase
    pub fn plain_text(&self, markup: &str) -> String {
        let stripped = self.strip.replace_all(markup, " ");
        self.squeeze.replace_all(&stripped, " ").to_lowercase()
    }

    pub fn scan(&self, markup: &str) -> ScannedRow {
        let markers = self.markers(markup);
        let text = self.plain_text(markup);
        let kind = RowKind::classify(markers, &text);
        ScannedRow {
            markers,
            text,
            kind,
        }
    }
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| FilterError::invalid_pattern(pattern, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> MarkupScanner {
        MarkupScanner::new().unwrap()
    }

    #[test]
    fn test_marker_detection_tolerates_case_and_quotes() {
        let scanner = scanner();
        let cases = [
            (r#"<td class="engine">UE2</td>"#, false, true, false),
            (r#"<TD CLASS=engine>UE2</TD>"#, false, true, false),
            (r#"<td class="year">2004</td>"#, false, false, true),
            (r#"<td Class=Year>2004</td>"#, false, false, true),
            (r#"<td colspan="4">note</td>"#, true, false, false),
            (r#"<td COLSPAN=4>note</td>"#, true, false, false),
            (r#"<td>Unreal</td><td>UE1</td>"#, false, false, false),
            // single quotes are not recognized
            (r#"<td class='year'>2004</td>"#, false, false, false),
        ];

        for (markup, spanning, engine, year) in cases {
            let markers = scanner.markers(markup);
            assert_eq!(
                markers,
                RowMarkers {
                    spanning,
                    engine,
                    year
                },
                "Failed for markup: {}",
                markup
            );
        }
    }

    #[test]
    fn test_plain_text_strips_tags_and_squeezes() {
        let scanner = scanner();
        let text = scanner.plain_text("<td><b>Unreal</b>&nbsp;Tournament</td>\r\n  <td>UE1</td>");
        assert_eq!(text, " unreal tournament ue1 ");
    }

    #[test]
    fn test_plain_text_of_empty_cells_is_whitespace() {
        let scanner = scanner();
        let text = scanner.plain_text("<td>&nbsp;</td><td></td>\n");
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_nbsp_entity_is_case_sensitive() {
        let scanner = scanner();
        assert_eq!(scanner.plain_text("a&NBSP;b"), "a&nbsp;b");
    }

    #[test]
    fn test_classify_order() {
        let all = RowMarkers {
            spanning: true,
            engine: true,
            year: true,
        };
        assert_eq!(RowKind::classify(all, " x "), RowKind::Engine);
        assert_eq!(RowKind::classify(all, "   "), RowKind::Blank);
        assert_eq!(RowKind::classify(all, ""), RowKind::Engine);
        assert_eq!(RowKind::classify(RowMarkers::default(), ""), RowKind::Game);

        let year_and_span = RowMarkers {
            spanning: true,
            engine: false,
            year: true,
        };
        assert_eq!(RowKind::classify(year_and_span, "2004"), RowKind::Year);

        let span = RowMarkers {
            spanning: true,
            ..RowMarkers::default()
        };
        assert_eq!(RowKind::classify(span, "footnote"), RowKind::Spanning);
        assert_eq!(
            RowKind::classify(RowMarkers::default(), "game"),
            RowKind::Game
        );
    }

    #[test]
    fn test_scan_combines_markers_and_text() {
        let row = scanner().scan(r#"<td class="year" colspan=3>2004</td>"#);
        assert_eq!(row.kind, RowKind::Year);
        assert!(row.markers.spanning);
        assert_eq!(row.text, " 2004 ");
        assert_eq!(row.kind.name(), "year");
    }
}
