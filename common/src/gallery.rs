//! Gallery media and lightbox
//!
//! The media list is fixed; the page filters it by category and opens one
//! item at a time in a lightbox.

use crate::filter::{Categorized, Filter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn icon(&self) -> &'static str {
        match self {
            MediaType::Image => "📷",
            MediaType::Video => "🎥",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    Professional,
    Events,
    Projects,
    Achievements,
    Videos,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 5] = [
        GalleryCategory::Professional,
        GalleryCategory::Events,
        GalleryCategory::Projects,
        GalleryCategory::Achievements,
        GalleryCategory::Videos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Professional => "Professional",
            GalleryCategory::Events => "Events",
            GalleryCategory::Projects => "Projects",
            GalleryCategory::Achievements => "Achievements",
            GalleryCategory::Videos => "Videos",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalleryCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown gallery category: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub category: GalleryCategory,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
}

impl Categorized for GalleryItem {
    type Category = GalleryCategory;

    fn category(&self) -> GalleryCategory {
        self.category
    }
}

fn item(
    media_type: MediaType,
    category: GalleryCategory,
    title: &str,
    description: &str,
    stem: &str,
    extension: &str,
) -> GalleryItem {
    GalleryItem {
        media_type,
        category,
        title: title.to_string(),
        description: description.to_string(),
        url: format!("/gallery/{}.{}", stem, extension),
        thumbnail: format!("/gallery/{}-thumb.jpg", stem),
    }
}

lazy_static::lazy_static! {
    static ref GALLERY_ITEMS: Vec<GalleryItem> = {
        use GalleryCategory::*;
        use MediaType::*;
        vec![
            item(Image, Professional, "Professional Headshot", "Grangemouth, Scotland", "headshot", "jpg"),
            item(Image, Events, "MSc Graduation", "University of Stirling, 2025", "graduation", "jpg"),
            item(Video, Videos, "Project Showcase", "Analytics Dashboard Demo", "demo", "mp4"),
            item(Image, Achievements, "National Award", "NYSC Recognition, 2021", "award", "jpg"),
            item(Image, Projects, "Dashboard Presentation", "Client workshop", "presentation", "jpg"),
            item(Video, Videos, "Technical Tutorial", "Python Analytics Walkthrough", "tutorial", "mp4"),
        ]
    };
}

/// Media shown on the gallery page, in display order
pub fn gallery_items() -> &'static [GalleryItem] {
    &GALLERY_ITEMS
}

pub fn filter_items(items: &[GalleryItem], filter: Filter<GalleryCategory>) -> Vec<&GalleryItem> {
    filter.apply(items)
}

/// Optional selection shown in a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox<T> {
    selected: Option<T>,
}

impl<T> Default for Lightbox<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> Lightbox<T> {
    pub fn open(&mut self, item: T) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
