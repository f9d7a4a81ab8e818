//! Project record types
//!
//! Shared by the CLI and the Web (WASM) frontend:
//! - Category: closed classification of a project
//! - ProjectRecord: one case study in the catalog

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Product Analytics")]
    ProductAnalytics,
    #[serde(rename = "ML & AI")]
    MlAndAi,
    #[serde(rename = "Workforce Analytics")]
    WorkforceAnalytics,
    #[serde(rename = "Data Engineering")]
    DataEngineering,
    #[serde(rename = "Operational Analytics")]
    OperationalAnalytics,
    #[serde(rename = "Research")]
    Research,
}

impl Category {
    /// Every category, in the order the portfolio filter bar shows them.
    pub const ALL: [Category; 6] = [
        Category::ProductAnalytics,
        Category::MlAndAi,
        Category::WorkforceAnalytics,
        Category::DataEngineering,
        Category::OperationalAnalytics,
        Category::Research,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::ProductAnalytics => "Product Analytics",
            Category::MlAndAi => "ML & AI",
            Category::WorkforceAnalytics => "Workforce Analytics",
            Category::DataEngineering => "Data Engineering",
            Category::OperationalAnalytics => "Operational Analytics",
            Category::Research => "Research",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .or_else(|| match wanted.to_lowercase().as_str() {
                "product" | "product-analytics" => Some(Category::ProductAnalytics),
                "ml" | "ai" | "ml-ai" | "ml-and-ai" => Some(Category::MlAndAi),
                "workforce" | "workforce-analytics" => Some(Category::WorkforceAnalytics),
                "data" | "data-engineering" => Some(Category::DataEngineering),
                "operational" | "operational-analytics" => Some(Category::OperationalAnalytics),
                "research" => Some(Category::Research),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// One portfolio case study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub short_description: String,
    pub problem: String,
    pub solution: String,
    pub impact: String,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub live_demo_url: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(default)]
    pub screenshots: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub learnings: Vec<String>,

    pub completion_date: String,
}

impl ProjectRecord {
    /// Route of the detail page
    pub fn detail_path(&self) -> String {
        format!("/portfolio/{}", self.id)
    }
}

// The source data writes `videoUrl: ''` for "no video"
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "churn-prediction",
            "title": "Churn Prediction",
            "category": "Product Analytics",
            "shortDescription": "Predicts churn",
            "problem": "p",
            "solution": "s",
            "impact": "i",
            "techStack": ["Python", "XGBoost"],
            "githubUrl": "",
            "liveDemoUrl": "https://demo.example.com",
            "videoUrl": "",
            "screenshots": [],
            "features": ["f1"],
            "learnings": ["l1"],
            "completionDate": "2024"
        }"#
    }

    #[test]
    fn test_project_record_deserialize() {
        let record: ProjectRecord = serde_json::from_str(sample_json()).expect("parse failed");
        assert_eq!(record.id, "churn-prediction");
        assert_eq!(record.category, Category::ProductAnalytics);
        assert_eq!(record.tech_stack, vec!["Python", "XGBoost"]);
        assert_eq!(record.completion_date, "2024");
    }

    #[test]
    fn test_empty_url_is_absent() {
        let record: ProjectRecord = serde_json::from_str(sample_json()).expect("parse failed");
        assert_eq!(record.github_url, None);
        assert_eq!(record.video_url, None);
        assert_eq!(record.live_demo_url.as_deref(), Some("https://demo.example.com"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{
            "id": "x", "title": "X", "category": "Research",
            "shortDescription": "", "problem": "", "solution": "", "impact": "",
            "completionDate": "2023"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("parse failed");
        assert!(record.screenshots.is_empty());
        assert!(record.github_url.is_none());
    }

    #[test]
    fn test_serialize_skips_absent_urls() {
        let record: ProjectRecord = serde_json::from_str(sample_json()).expect("parse failed");
        let json = serde_json::to_string(&record).expect("serialize failed");
        assert!(json.contains("\"category\":\"Product Analytics\""));
        assert!(json.contains("\"liveDemoUrl\""));
        assert!(!json.contains("githubUrl"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = sample_json().replace("Product Analytics", "Marketing");
        assert!(serde_json::from_str::<ProjectRecord>(&json).is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("ML & AI".parse::<Category>(), Ok(Category::MlAndAi));
        assert_eq!("data engineering".parse::<Category>(), Ok(Category::DataEngineering));
        assert_eq!("ml".parse::<Category>(), Ok(Category::MlAndAi));
        assert!("Marketing".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.label());
        }
    }

    #[test]
    fn test_detail_path() {
        let record: ProjectRecord = serde_json::from_str(sample_json()).expect("parse failed");
        assert_eq!(record.detail_path(), "/portfolio/churn-prediction");
    }
}
