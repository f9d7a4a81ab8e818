//! Network calls made from the browser

pub mod contact;
