//! Terminal output helpers: coloured status messages, diffs and summary tables.

pub mod diff_viewer;
pub mod output_format;
pub mod summary_table;
