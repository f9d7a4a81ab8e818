//! Site export tests

use portfolio_common::{Catalog, ProjectRecord};
use portfolio_site::export::{export_site, PROJECTS_FILE, ROUTES_FILE, SITEMAP_FILE};
use portfolio_site::load_catalog;
use tempfile::tempdir;

/// Export writes all three files
#[test]
fn test_export_builtin_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("out");

    let summary = export_site(Catalog::builtin(), &output, "https://example.com").expect("export failed");

    assert!(output.join(PROJECTS_FILE).exists());
    assert!(output.join(SITEMAP_FILE).exists());
    assert!(output.join(ROUTES_FILE).exists());
    assert_eq!(summary.route_count, 8 + Catalog::builtin().len());
}

/// projects.json reloads into an identical catalog
#[test]
fn test_exported_projects_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    export_site(Catalog::builtin(), dir.path(), "https://example.com").expect("export failed");

    let reloaded = load_catalog(Some(&dir.path().join(PROJECTS_FILE))).expect("reload failed");
    assert_eq!(&reloaded, Catalog::builtin());
}

/// Every project gets a sitemap entry
#[test]
fn test_sitemap_lists_detail_pages() {
    let dir = tempdir().expect("Failed to create temp dir");
    export_site(Catalog::builtin(), dir.path(), "https://example.com/").expect("export failed");

    let sitemap = std::fs::read_to_string(dir.path().join(SITEMAP_FILE)).unwrap();
    for project in Catalog::builtin().iter() {
        let loc = format!("<loc>https://example.com/portfolio/{}</loc>", project.id);
        assert!(sitemap.contains(&loc), "missing {}", loc);
    }
    assert!(!sitemap.contains("bauchi-team"));
}

/// Custom catalog file with an empty-string URL
#[test]
fn test_load_custom_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{
            "id": "solo", "title": "Solo", "category": "Research",
            "shortDescription": "s", "problem": "p", "solution": "s", "impact": "i",
            "techStack": [], "githubUrl": "", "screenshots": [],
            "features": [], "learnings": [], "completionDate": "2025"
        }]"#,
    )
    .unwrap();

    let catalog = load_catalog(Some(&path)).expect("load failed");
    let solo: &ProjectRecord = catalog.get_by_id("solo").expect("present");
    assert!(solo.github_url.is_none());

    let routes = std::fs::read_to_string({
        export_site(&catalog, dir.path(), "https://example.com").expect("export failed");
        dir.path().join(ROUTES_FILE)
    })
    .unwrap();
    assert!(routes.lines().any(|l| l == "/portfolio/solo"));
}

/// Missing catalog file is an IO error
#[test]
fn test_load_missing_catalog() {
    let result = load_catalog(Some(std::path::Path::new("/nonexistent/catalog.json")));
    assert!(result.is_err());
}
