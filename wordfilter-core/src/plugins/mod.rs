// wordfilter-core/src/plugins/mod.rs
//! Plugins that ship with wordfilter.
//!
//! Each plugin is a separate file implementing the `Plugin` trait. Register
//! them on a `Filter` with `Filter::use_plugin`.

pub mod ansi;
pub mod markup;
pub mod word_list_file;

pub use ansi::AnsiStripPlugin;
pub use markup::MarkupStripPlugin;
pub use word_list_file::WordListPlugin;
