//! Row filtering.
//!
//! One pass over the data rows of a table decides the visibility of every
//! row from its markup alone, so repeated passes with the same query give
//! the same result regardless of what the previous pass hid.

use crate::query::Query;
use crate::table::{FilterRow, MarkupScanner, RowKind};
use crate::Result;

/// Hides and shows table rows for a query
#[derive(Debug, Clone)]
pub struct RowFilter {
    scanner: MarkupScanner,
}

impl RowFilter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            scanner: MarkupScanner::new()?,
        })
    }

    pub fn scanner(&self) -> &MarkupScanner {
        &self.scanner
    }

    /// Convenience wrapper parsing `phrase` first
    pub fn apply_phrase<R: FilterRow>(&self, phrase: &str, rows: &mut [R]) -> usize {
        self.apply(&Query::parse(phrase), rows)
    }

    /// Recompute the visibility of every data row and return the number of
    /// game rows left visible. `rows[0]` is the header and is never touched.
    ///
    /// A year row stays pending until a game below it matches. With an
    /// active filter, a pending year row is hidden when the next year row
    /// starts or when the table ends.
    pub fn apply<R: FilterRow>(&self, query: &Query, rows: &mut [R]) -> usize {
        let has_filter = query.has_filter();
        let mut pending_year: Option<usize> = None;
        let mut match_count = 0;

        for index in 1..rows.len() {
            let scanned = self.scanner.scan(rows[index].markup());

            let hide = match scanned.kind {
                RowKind::Blank => has_filter,
                RowKind::Engine | RowKind::Spanning => false,
                RowKind::Year => {
                    if let Some(previous) = pending_year {
                        if has_filter {
                            rows[previous].set_hidden(true);
                        }
                    }
                    pending_year = Some(index);
                    false
                }
                RowKind::Game => {
                    let matched = query.matches(&scanned.text);
                    if matched {
                        match_count += 1;
                        pending_year = None;
                    }
                    !matched
                }
            };

            log::trace!(
                "row {}: {} hide={} text='{}'",
                index,
                scanned.kind.name(),
                hide,
                scanned.text.trim()
            );
            rows[index].set_hidden(hide);
        }

        if let Some(previous) = pending_year {
            if has_filter {
                rows[previous].set_hidden(true);
            }
        }

        log::debug!(
            "Filtered {} rows for '{}' ({} terms): {} matches",
            rows.len().saturating_sub(1),
            query.phrase(),
            query.terms().len(),
            match_count
        );

        match_count
    }
}
