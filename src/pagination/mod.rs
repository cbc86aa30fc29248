//! Page list generation and pager state

pub mod generator;
pub mod pager;

pub use generator::{generate, generate_raw};
pub use pager::{row_range, total_pages, PageView, Pager};
