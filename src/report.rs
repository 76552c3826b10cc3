//! Batch filtering output.
//!
//! Applies a query to a loaded document and collects what the command line
//! prints: the visible data rows as plain text plus the count label.

use crate::filter::RowFilter;
use crate::query::Query;
use crate::table::{FilterRow, HtmlDocument, RowKind};
use colored::*;

/// Outcome of one filter pass over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub match_count: usize,
    /// Empty without an active filter, else "N game(s)"
    pub label: String,
    /// Visible data rows, tag-stripped and trimmed
    pub visible: Vec<(RowKind, String)>,
}

impl FilterReport {
    /// Filter `document` in place and summarize the result
    pub fn build(document: &mut HtmlDocument, filter: &RowFilter, query: &Query) -> Self {
        let match_count = filter.apply(query, document.rows_mut());
        let visible = document
            .visible_rows()
            .map(|row| {
                let scanned = filter.scanner().scan(row.markup());
                (scanned.kind, scanned.text.trim().to_string())
            })
            .collect();

        Self {
            match_count,
            label: query.count_label(match_count),
            visible,
        }
    }

    /// One line per visible row; year rows are highlighted
    pub fn lines(&self, color: bool) -> Vec<String> {
        self.visible
            .iter()
            .filter(|(kind, _)| *kind != RowKind::Blank)
            .map(|(kind, text)| match (kind, color) {
                (RowKind::Year, true) => text.yellow().bold().to_string(),
                (RowKind::Engine, true) => text.cyan().to_string(),
                (RowKind::Spanning, true) => text.dimmed().to_string(),
                (RowKind::Year, false) => format!("== {} ==", text),
                _ => text.clone(),
            })
            .collect()
    }
}
