//! FPL Enhanced pagination
//!
//! A library for the truncated pagination controls of the FPL Enhanced popup:
//! page list generation with ellipsis gaps, pager state for league and player
//! tables, text rendering, and WebAssembly bindings for the extension scripts.

pub mod models;
pub mod pagination;
pub mod parser;
pub mod render;
pub mod wasm;
#[cfg(feature = "cli")]
pub mod cli;

pub use models::{PageList, PageSlot, PagerOptions, PaginationError, Preset};
pub use pagination::{generate, generate_raw, PageView, Pager};

use anyhow::Result;
use std::path::Path;

/// Smallest pagination size for which the truncated layout is well formed.
pub const MIN_PAGINATION_SIZE: i64 = 5;

/// Open a pager over `item_count` rows and move it to `page`.
pub fn paginate(item_count: usize, page: i64, options: PagerOptions) -> Result<PageView> {
    let mut pager = Pager::new(item_count, options)?;
    Ok(pager.go_to(page)?)
}

/// Resolve pager options from an optional options file, falling back to a preset.
pub fn load_options(path: Option<&Path>, preset: Preset) -> Result<PagerOptions> {
    match path {
        Some(path) => parser::parse_options_from_file(path),
        None => Ok(PagerOptions::preset(preset)),
    }
}
