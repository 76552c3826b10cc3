//! HTML document holding the filtered table.
//!
//! Only the table with the requested id is split into rows. Everything else
//! in the document is kept verbatim so the filtered page can be written back.

use super::markup::compile;
use super::FilterRow;
use crate::{FilterError, Result};
use std::fs;
use std::path::Path;

const TABLE_OPEN_PATTERN: &str = r"(?i)<table\b[^>]*>";
const TABLE_CLOSE_PATTERN: &str = r"(?i)</table\s*>";
const ID_ATTR_PATTERN: &str = r#"(?i)\sid\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#;
const ROW_OPEN_PATTERN: &str = r"(?i)<tr\b[^>]*>";
const ROW_CLOSE_PATTERN: &str = r"(?i)</tr\s*>";

/// One `<tr>` of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRow {
    /// Byte offset just past `<tr`, where a style attribute can be inserted
    insert_at: usize,
    markup: String,
    hidden: bool,
}

impl HtmlRow {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            insert_at: 0,
            markup: markup.into(),
            hidden: false,
        }
    }
}

impl FilterRow for HtmlRow {
    fn markup(&self) -> &str {
        &self.markup
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

/// An HTML document with one table split into rows
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    source: String,
    table_id: String,
    rows: Vec<HtmlRow>,
}

impl HtmlDocument {
    /// Read and parse an HTML file
    pub fn load<P: AsRef<Path>>(path: P, table_id: &str) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            FilterError::file_access_error(&path.display().to_string(), &e.to_string())
        })?;
        Self::parse(source, table_id)
    }

    /// Locate `<table id="table_id">` and split it into rows
    pub fn parse(source: impl Into<String>, table_id: &str) -> Result<Self> {
        let source = source.into();
        let (body_start, body_end) = locate_table(&source, table_id)?;
        let rows = split_rows(&source[body_start..body_end], body_start)?;

        crate::logging::debug_log(&format!(
            "Table '{}' found at bytes {}..{} with {} rows",
            table_id,
            body_start,
            body_end,
            rows.len()
        ));

        Ok(Self {
            source,
            table_id: table_id.to_string(),
            rows,
        })
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn rows(&self) -> &[HtmlRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [HtmlRow] {
        &mut self.rows
    }

    /// Data rows (everything after the header) that are currently visible
    pub fn visible_rows(&self) -> impl Iterator<Item = &HtmlRow> {
        self.rows.iter().skip(1).filter(|row| !row.hidden)
    }

    /// The original document with `style="hidden_style"` added to every
    /// hidden row. Always rendered from the untouched source.
    pub fn render(&self, hidden_style: &str) -> String {
        let attr = format!(" style=\"{}\"", hidden_style);
        let hidden_count = self.rows.iter().filter(|row| row.hidden).count();
        let mut out = String::with_capacity(self.source.len() + hidden_count * attr.len());

        let mut last = 0;
        for row in self.rows.iter().filter(|row| row.hidden) {
            out.push_str(&self.source[last..row.insert_at]);
            out.push_str(&attr);
            last = row.insert_at;
        }
        out.push_str(&self.source[last..]);
        out
    }
}

/// Byte range of the table's contents, between its open and close tags
fn locate_table(source: &str, table_id: &str) -> Result<(usize, usize)> {
    let open = compile(TABLE_OPEN_PATTERN)?;
    let close = compile(TABLE_CLOSE_PATTERN)?;
    let id_attr = compile(ID_ATTR_PATTERN)?;

    let table_tag = open.find_iter(source).find(|tag| {
        id_attr
            .captures(tag.as_str())
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
            .is_some_and(|value| value.as_str() == table_id)
    });

    let Some(table_tag) = table_tag else {
        return Err(FilterError::TableNotFound {
            id: table_id.to_string(),
        });
    };

    let body_start = table_tag.end();
    let body_end = close
        .find(&source[body_start..])
        .map(|m| body_start + m.start())
        .unwrap_or(source.len());

    Ok((body_start, body_end))
}

/// Split table contents into rows. A row without `</tr>` ends at the next
/// `<tr` or at the end of the table.
fn split_rows(body: &str, offset: usize) -> Result<Vec<HtmlRow>> {
    let open = compile(ROW_OPEN_PATTERN)?;
    let close = compile(ROW_CLOSE_PATTERN)?;

    let tags: Vec<_> = open.find_iter(body).collect();
    let rows = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let limit = tags.get(i + 1).map(|next| next.start()).unwrap_or(body.len());
            let content = &body[tag.end()..limit];
            let end = close.find(content).map(|m| m.start()).unwrap_or(content.len());
            HtmlRow {
                insert_at: offset + tag.start() + "<tr".len(),
                markup: content[..end].to_string(),
                hidden: false,
            }
        })
        .collect();

    Ok(rows)
}
