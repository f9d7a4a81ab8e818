//! Project catalog
//!
//! A fixed, ordered list of project records loaded once and read-only
//! afterwards. Lookups never fail loudly: a missing id is `None`, an empty
//! category is an empty list.

use crate::error::Result;
use crate::filter::{Categorized, Filter};
use crate::types::{Category, ProjectRecord};
use std::collections::{BTreeMap, BTreeSet, HashSet};

const BUILTIN_PROJECTS: &str = include_str!("../data/projects.json");

lazy_static::lazy_static! {
    static ref BUILTIN: Catalog = Catalog::from_json(BUILTIN_PROJECTS)
        .expect("embedded project data must parse");
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    /// The catalog shipped with the site
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a JSON array of records (camelCase fields)
    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Ok(Self::new(projects))
    }

    /// Load from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// First record whose id matches exactly.
    ///
    /// Ids are not checked for uniqueness; on duplicates the earliest record
    /// in catalog order wins.
    pub fn get_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn get_by_category(&self, category: Category) -> Vec<&ProjectRecord> {
        self.filtered(Filter::Only(category))
    }

    pub fn filtered(&self, filter: Filter<Category>) -> Vec<&ProjectRecord> {
        filter.apply(&self.projects)
    }

    /// Categories that occur at least once
    pub fn list_categories(&self) -> BTreeSet<Category> {
        self.projects.iter().map(|p| p.category).collect()
    }

    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for project in &self.projects {
            *counts.entry(project.category).or_insert(0) += 1;
        }
        counts
    }

    /// Ids that appear more than once, in order of their second occurrence
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .filter(|p| !seen.insert(p.id.as_str()))
            .map(|p| p.id.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter()
    }

    pub fn as_slice(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Categorized for ProjectRecord {
    type Category = Category;

    fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, category: Category) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            category,
            short_description: String::new(),
            problem: String::new(),
            solution: String::new(),
            impact: String::new(),
            tech_stack: vec![],
            github_url: None,
            live_demo_url: None,
            video_url: None,
            screenshots: vec![],
            features: vec![],
            learnings: vec![],
            completion_date: "2024".to_string(),
        }
    }

    /// 17 records, 5 of them "ML & AI"
    fn fixture() -> Catalog {
        use Category::*;
        let layout = [
            ("p01", ProductAnalytics),
            ("p02", MlAndAi),
            ("p03", DataEngineering),
            ("p04", MlAndAi),
            ("p05", Research),
            ("p06", WorkforceAnalytics),
            ("p07", OperationalAnalytics),
            ("p08", MlAndAi),
            ("p09", DataEngineering),
            ("p10", ProductAnalytics),
            ("p11", OperationalAnalytics),
            ("p12", MlAndAi),
            ("p13", WorkforceAnalytics),
            ("p14", DataEngineering),
            ("p15", Research),
            ("p16", MlAndAi),
            ("p17", OperationalAnalytics),
        ];
        Catalog::new(
            layout
                .iter()
                .map(|(id, category)| record(id, &format!("Project {}", id), *category))
                .collect(),
        )
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 18);
        assert!(catalog.duplicate_ids().is_empty());
    }

    #[test]
    fn test_builtin_every_id_resolves() {
        let catalog = Catalog::builtin();
        for project in catalog.iter() {
            let found = catalog.get_by_id(&project.id).expect("id should resolve");
            assert_eq!(found.id, project.id);
        }
    }

    #[test]
    fn test_builtin_ml_and_ai_projects() {
        let ids: Vec<_> = Catalog::builtin()
            .get_by_category(Category::MlAndAi)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "fall-risk-assessment",
                "social-isolation-detection",
                "anomaly-detection-system",
                "nhs-ae-wait-time-prediction",
                "feedback-topic-modeler",
                "predictive-risk-models",
                "pneumonia-detection-system",
            ]
        );
    }

    #[test]
    fn test_get_by_id_missing() {
        assert!(Catalog::builtin().get_by_id("does-not-exist").is_none());
        assert!(Catalog::builtin().get_by_id("").is_none());
        assert!(fixture().get_by_id("P01").is_none());
    }

    #[test]
    fn test_get_by_category_scenario() {
        let catalog = fixture();
        assert_eq!(catalog.len(), 17);

        let ml = catalog.get_by_category("ML & AI".parse().unwrap());
        let ids: Vec<_> = ml.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p02", "p04", "p08", "p12", "p16"]);
    }

    #[test]
    fn test_category_union_is_whole_catalog() {
        for catalog in [fixture(), Catalog::builtin().clone()] {
            let mut seen: Vec<&str> = Vec::new();
            for category in Category::ALL {
                for project in catalog.get_by_category(category) {
                    assert_eq!(project.category, category);
                    seen.push(&project.id);
                }
            }
            assert_eq!(seen.len(), catalog.len());
            let unique: HashSet<_> = seen.iter().collect();
            assert_eq!(unique.len(), catalog.len());
        }
    }

    #[test]
    fn test_get_by_category_empty() {
        let catalog = Catalog::new(vec![record("only", "Only", Category::Research)]);
        assert!(catalog.get_by_category(Category::MlAndAi).is_empty());
    }

    #[test]
    fn test_duplicate_id_first_match_wins() {
        let catalog = Catalog::new(vec![
            record("dup", "First", Category::Research),
            record("other", "Other", Category::Research),
            record("dup", "Second", Category::MlAndAi),
        ]);
        assert_eq!(catalog.get_by_id("dup").map(|p| p.title.as_str()), Some("First"));
        assert_eq!(catalog.duplicate_ids(), vec!["dup"]);
    }

    #[test]
    fn test_list_categories_dedup() {
        let catalog = Catalog::new(vec![
            record("a", "A", Category::Research),
            record("b", "B", Category::Research),
            record("c", "C", Category::DataEngineering),
        ]);
        let categories = catalog.list_categories();
        assert_eq!(categories.len(), 2);
        assert!(categories.contains(&Category::Research));
        assert!(categories.contains(&Category::DataEngineering));
    }

    #[test]
    fn test_builtin_has_every_category() {
        assert_eq!(Catalog::builtin().list_categories().len(), Category::ALL.len());
    }

    #[test]
    fn test_count_by_category() {
        let counts = fixture().count_by_category();
        assert_eq!(counts[&Category::MlAndAi], 5);
        assert_eq!(counts.values().sum::<usize>(), 17);
    }

    #[test]
    fn test_filtered_all() {
        let catalog = fixture();
        assert_eq!(catalog.filtered(Filter::All).len(), catalog.len());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Catalog::from_json("{not json").is_err());
        assert!(Catalog::from_json("[]").expect("empty array").is_empty());
    }
}
