//! Shared UI components

pub mod background;
pub mod contact_form;
pub mod cookie_banner;
pub mod footer;
pub mod navbar;
pub mod project_card;
