//! One component per route

pub mod about;
pub mod contact;
pub mod experience;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod portfolio;
pub mod privacy;
pub mod project_detail;
pub mod services;
pub mod team_portal;
