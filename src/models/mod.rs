//! Core data models for pagination

pub mod page_list;
pub mod options;
pub mod error;

pub use page_list::*;
pub use options::*;
pub use error::*;
