//! Table model module
//!
//! Rows are anything that can hand out its inner markup and take a
//! visibility flag. Row 0 of a table is always the header.

pub mod document;
pub mod markup;

pub use document::{HtmlDocument, HtmlRow};
pub use markup::{MarkupScanner, RowKind, RowMarkers, ScannedRow};

/// A table row the filter can inspect and show or hide
pub trait FilterRow {
    /// Raw inner markup of the row
    fn markup(&self) -> &str;

    fn is_hidden(&self) -> bool;

    fn set_hidden(&mut self, hidden: bool);
}
