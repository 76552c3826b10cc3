//! TUI application state

use crate::constants::{PHRASE_MAX_LENGTH, SCROLL_PAGE_SIZE};
use crate::filter::RowFilter;
use crate::query::Query;
use crate::table::{FilterRow, HtmlDocument, RowKind};

/// A visible data row as shown in the table pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub kind: RowKind,
    pub text: String,
}

/// Main TUI application state
pub struct App {
    /// Document being filtered
    pub document: HtmlDocument,

    /// Current contents of the search box
    pub phrase: String,

    /// Game rows visible after the last pass
    pub match_count: usize,

    /// First visible line of the table pane
    pub scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    filter: RowFilter,
    max_phrase_length: usize,
}

impl App {
    /// Create the app and run the first pass with the initial phrase
    pub fn new(document: HtmlDocument, filter: RowFilter, phrase: String) -> Self {
        let mut app = Self {
            document,
            phrase,
            match_count: 0,
            scroll: 0,
            should_quit: false,
            filter,
            max_phrase_length: PHRASE_MAX_LENGTH,
        };
        app.refilter();
        app
    }

    /// Limit how long the phrase can grow while typing
    pub fn with_max_phrase_length(mut self, max_phrase_length: usize) -> Self {
        self.max_phrase_length = max_phrase_length;
        self
    }

    /// Re-run the filter over the whole table
    pub fn refilter(&mut self) {
        self.match_count = self
            .filter
            .apply_phrase(&self.phrase, self.document.rows_mut());
        self.scroll = 0;
    }

    /// Text edits behave like the search field's change event
    pub fn input_char(&mut self, c: char) {
        if self.phrase.chars().count() >= self.max_phrase_length {
            return;
        }
        self.phrase.push(c);
        self.refilter();
    }

    pub fn delete_char(&mut self) {
        if self.phrase.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_phrase(&mut self) {
        if !self.phrase.is_empty() {
            self.phrase.clear();
            self.refilter();
        }
    }

    /// Enter re-applies the current phrase and keeps the session open
    pub fn submit(&mut self) {
        self.refilter();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.document.visible_rows().count().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(SCROLL_PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(SCROLL_PAGE_SIZE);
    }

    /// Set quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Counter text: empty without a filter, else "N game(s)"
    pub fn count_label(&self) -> String {
        Query::parse(&self.phrase).count_label(self.match_count)
    }

    /// Visible data rows with their classification and plain text
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        let scanner = self.filter.scanner();
        self.document
            .visible_rows()
            .map(|row| {
                let scanned = scanner.scan(row.markup());
                DisplayRow {
                    kind: scanned.kind,
                    text: scanned.text.trim().to_string(),
                }
            })
            .collect()
    }

    /// Plain text of the header row
    pub fn header_text(&self) -> String {
        self.document
            .rows()
            .first()
            .map(|row| self.filter.scanner().plain_text(row.markup()).trim().to_string())
            .unwrap_or_default()
    }
}
