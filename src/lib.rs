//! Compatibility Table Filter - live row filtering for HTML game tables
//!
//! Hides and shows the rows of a compatibility table by space-separated
//! terms, keeps year headers only while they head a visible game, and
//! reports how many games are left.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod logging;
pub mod query;
pub mod report;
pub mod table;
pub mod tui;

// Re-export `Cli` for use from `main`
pub use cli::Cli;
pub use error::{FilterError, Result};
pub use filter::RowFilter;
pub use query::Query;
