pub mod sitemap;

use crate::error::Result;
use portfolio_common::Catalog;
use std::path::{Path, PathBuf};

pub const PROJECTS_FILE: &str = "projects.json";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROUTES_FILE: &str = "routes.txt";

/// Files written by one export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub projects: PathBuf,
    pub sitemap: PathBuf,
    pub routes: PathBuf,
    pub route_count: usize,
}

pub fn export_site(catalog: &Catalog, output_dir: &Path, base_url: &str) -> Result<ExportSummary> {
    std::fs::create_dir_all(output_dir)?;

    let projects = output_dir.join(PROJECTS_FILE);
    let json = serde_json::to_string_pretty(catalog.as_slice())?;
    std::fs::write(&projects, json)?;
    tracing::debug!(path = %projects.display(), count = catalog.len(), "wrote catalog");

    let routes = sitemap::site_routes(catalog);
    let lastmod = chrono::Local::now().format("%Y-%m-%d").to_string();

    let sitemap_path = output_dir.join(SITEMAP_FILE);
    std::fs::write(&sitemap_path, sitemap::render_sitemap(base_url, &routes, &lastmod))?;

    let routes_path = output_dir.join(ROUTES_FILE);
    let listing = routes
        .iter()
        .map(|r| r.path())
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&routes_path, listing + "\n")?;

    Ok(ExportSummary {
        projects,
        sitemap: sitemap_path,
        routes: routes_path,
        route_count: routes.len(),
    })
}
