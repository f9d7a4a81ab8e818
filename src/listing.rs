//! Terminal output for catalog queries

use portfolio_common::card::ProjectDetail;
use portfolio_common::{Catalog, ProjectCard, ProjectRecord};

/// One line per project: id, category, title, tags
pub fn format_table(projects: &[&ProjectRecord]) -> String {
    let id_width = projects.iter().map(|p| p.id.len()).max().unwrap_or(2).max(2);
    let mut out = format!("{:<id_width$}  {:<21}  {}\n", "ID", "CATEGORY", "TITLE");

    for project in projects {
        let card = ProjectCard::from_record(project);
        let mut tags = card.tags.join(", ");
        if let Some(more) = card.overflow_label() {
            tags.push_str(&format!(" {}", more));
        }
        out.push_str(&format!(
            "{:<id_width$}  {:<21}  {} [{}]\n",
            card.id,
            card.category.label(),
            card.title,
            tags
        ));
    }
    out
}

pub fn format_detail(record: &ProjectRecord) -> String {
    let detail = ProjectDetail::from_record(record);
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", detail.title, detail.category));
    out.push_str(&format!("{}\n\n", detail.short_description));
    out.push_str(&format!("Challenge: {}\n\n", detail.challenge));
    out.push_str(&format!("Solution: {}\n\n", detail.solution));
    out.push_str(&format!("Impact: {}\n\n", detail.impact));
    out.push_str(&format!("Tech stack: {}\n", detail.tech_stack.join(", ")));

    if !detail.features.is_empty() {
        out.push_str("\nKey features:\n");
        for feature in &detail.features {
            out.push_str(&format!("  - {}\n", feature));
        }
    }
    if !detail.learnings.is_empty() {
        out.push_str("\nLearnings:\n");
        for learning in &detail.learnings {
            out.push_str(&format!("  - {}\n", learning));
        }
    }
    for link in &detail.links {
        out.push_str(&format!("{} {}: {}\n", link.kind.icon(), link.kind.label(), link.url));
    }
    out.push_str(&format!("Completed: {}\n", detail.completion_date));
    out
}

pub fn format_categories(catalog: &Catalog) -> String {
    catalog
        .count_by_category()
        .iter()
        .map(|(category, count)| format!("{:<21}  {}\n", category.label(), count))
        .collect()
}
