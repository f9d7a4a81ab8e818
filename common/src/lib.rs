//! Portfolio Common Library
//!
//! Types, catalog and UI state shared by the CLI and the Web (WASM) frontend

pub mod types;
pub mod error;
pub mod filter;
pub mod catalog;
pub mod card;
pub mod routes;
pub mod navigation;
pub mod contact;
pub mod rotator;
pub mod gallery;
pub mod consent;

pub use types::{Category, ProjectRecord};
pub use error::{Error, Result, ValidationError};
pub use filter::{Categorized, Filter};
pub use catalog::Catalog;
pub use card::{ProjectCard, ProjectDetail};
pub use routes::Route;
pub use navigation::{NavShell, NavStyle, MenuState};
pub use contact::{ContactForm, ContactFormController, FormStatus, SubmitOutcome};
pub use rotator::ImageRotator;
pub use gallery::{GalleryCategory, GalleryItem, Lightbox};
pub use consent::ConsentChoice;
