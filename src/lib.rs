mod entry;
mod error;
pub mod bst;
pub mod bucket_map;

pub use crate::error::{Error, Result};
