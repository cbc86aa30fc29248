//! Parsing for pager option files

pub mod options;

pub use options::{parse_options, parse_options_from_file, parse_options_from_str};
