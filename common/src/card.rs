//! Project card and detail view models
//!
//! Pure transforms from a `ProjectRecord` into what the card grid and the
//! detail page display. No state, no I/O.

use crate::types::{Category, ProjectRecord};

/// Tags shown on a card before collapsing into "+N"
pub const MAX_CARD_TAGS: usize = 4;

/// Icon shown when a project has no screenshots
pub const PLACEHOLDER_ICON: &str = "📊";

/// Substituted when a screenshot fails to load
pub const SCREENSHOT_FALLBACK: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"300\"%3E%3Crect width=\"400\" height=\"300\" fill=\"%23374151\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"18\" fill=\"%239ca3af\"%3EImage Preview%3C/text%3E%3C/svg%3E";

pub const DATA_NOTICE: &str = "This project uses synthetic/open data to demonstrate capabilities while maintaining privacy and confidentiality. All methods and approaches are applicable to real-world scenarios.";

/// Badge background class for a category
pub fn badge_class(category: Category) -> &'static str {
    match category {
        Category::ProductAnalytics => "bg-blue-500/90",
        Category::MlAndAi => "bg-purple-500/90",
        Category::WorkforceAnalytics => "bg-green-500/90",
        Category::DataEngineering => "bg-orange-500/90",
        Category::OperationalAnalytics => "bg-teal-500/90",
        Category::Research => "bg-red-500/90",
    }
}

/// Card gradient and border classes for a category
pub fn card_gradient(category: Category) -> &'static str {
    match category {
        Category::ProductAnalytics => "from-blue-900/40 to-blue-800/40 border-blue-400/30 hover:border-blue-400",
        Category::MlAndAi => "from-purple-900/40 to-purple-800/40 border-purple-400/30 hover:border-purple-400",
        Category::WorkforceAnalytics => "from-green-900/40 to-green-800/40 border-green-400/30 hover:border-green-400",
        Category::DataEngineering => "from-orange-900/40 to-orange-800/40 border-orange-400/30 hover:border-orange-400",
        Category::OperationalAnalytics => "from-teal-900/40 to-teal-800/40 border-teal-400/30 hover:border-teal-400",
        Category::Research => "from-red-900/40 to-red-800/40 border-red-400/30 hover:border-red-400",
    }
}

/// External link attached to a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    LiveDemo,
    Code,
    Video,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::LiveDemo => "Live Demo",
            LinkKind::Code => "View Code",
            LinkKind::Video => "Watch Video",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::LiveDemo => "🚀",
            LinkKind::Code => "💻",
            LinkKind::Video => "🎥",
        }
    }
}

/// Card image: first screenshot, or the placeholder icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Screenshot(String),
    Placeholder(&'static str),
}

/// Summary card
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub category: Category,
    pub image: CardImage,
    pub tags: Vec<String>,
    /// Number of tags hidden behind "+N"
    pub hidden_tags: usize,
    pub detail_path: String,
    pub links: Vec<ProjectLink>,
}

impl ProjectCard {
    pub fn from_record(record: &ProjectRecord) -> Self {
        let image = match record.screenshots.first() {
            Some(src) => CardImage::Screenshot(src.clone()),
            None => CardImage::Placeholder(PLACEHOLDER_ICON),
        };

        let tags: Vec<String> = record.tech_stack.iter().take(MAX_CARD_TAGS).cloned().collect();
        let hidden_tags = record.tech_stack.len().saturating_sub(MAX_CARD_TAGS);

        let mut links = Vec::new();
        push_link(&mut links, LinkKind::LiveDemo, &record.live_demo_url);
        push_link(&mut links, LinkKind::Code, &record.github_url);

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            short_description: record.short_description.clone(),
            category: record.category,
            image,
            tags,
            hidden_tags,
            detail_path: record.detail_path(),
            links,
        }
    }

    /// "+N" text, when anything is hidden
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden_tags > 0).then(|| format!("+{}", self.hidden_tags))
    }

    pub fn badge_class(&self) -> &'static str {
        badge_class(self.category)
    }

    pub fn gradient_class(&self) -> &'static str {
        card_gradient(self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub src: String,
    pub alt: String,
}

/// Full detail page
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub short_description: String,
    pub links: Vec<ProjectLink>,
    pub screenshots: Vec<Screenshot>,
    pub challenge: String,
    pub solution: String,
    pub impact: String,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub learnings: Vec<String>,
    pub completion_date: String,
}

impl ProjectDetail {
    pub fn from_record(record: &ProjectRecord) -> Self {
        let mut links = Vec::new();
        push_link(&mut links, LinkKind::LiveDemo, &record.live_demo_url);
        push_link(&mut links, LinkKind::Code, &record.github_url);
        push_link(&mut links, LinkKind::Video, &record.video_url);

        let screenshots = record
            .screenshots
            .iter()
            .enumerate()
            .map(|(i, src)| Screenshot {
                src: src.clone(),
                alt: format!("{} screenshot {}", record.title, i + 1),
            })
            .collect();

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            category: record.category,
            short_description: record.short_description.clone(),
            links,
            screenshots,
            challenge: record.problem.clone(),
            solution: record.solution.clone(),
            impact: record.impact.clone(),
            tech_stack: record.tech_stack.clone(),
            features: record.features.clone(),
            learnings: record.learnings.clone(),
            completion_date: record.completion_date.clone(),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        badge_class(self.category)
    }
}

fn push_link(links: &mut Vec<ProjectLink>, kind: LinkKind, url: &Option<String>) {
    if let Some(url) = url.as_deref().filter(|u| !u.is_empty()) {
        links.push(ProjectLink {
            kind,
            url: url.to_string(),
        });
    }
}
