pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod export;
pub mod listing;
pub mod prompt;

use error::Result;
use portfolio_common::Catalog;
use std::path::Path;

/// Built-in catalog, or one read from `path`
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Ok(Catalog::from_file(path)?),
        None => Ok(Catalog::builtin().clone()),
    }
}
