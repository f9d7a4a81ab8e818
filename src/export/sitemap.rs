use portfolio_common::{Catalog, Route};

/// Every indexable route: static pages, then one detail page per project
pub fn site_routes(catalog: &Catalog) -> Vec<Route> {
    let mut routes: Vec<Route> = Route::STATIC
        .into_iter()
        .filter(Route::is_indexable)
        .collect();
    routes.extend(catalog.iter().map(|p| Route::ProjectDetail(p.id.clone())));
    routes
}

/// sitemaps.org XML for the given routes
pub fn render_sitemap(base_url: &str, routes: &[Route], lastmod: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in routes {
        let path = route.path();
        let loc = if path == "/" { format!("{}/", base) } else { format!("{}{}", base, path) };
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_include_details() {
        let routes = site_routes(Catalog::builtin());
        assert!(routes.contains(&Route::Home));
        assert!(routes.contains(&Route::ProjectDetail("churn-prediction".into())));
        assert!(!routes.contains(&Route::TeamPortal));
        assert_eq!(routes.len(), 8 + Catalog::builtin().len());
    }

    #[test]
    fn test_render_sitemap() {
        let routes = vec![Route::Home, Route::About];
        let xml = render_sitemap("https://example.com/", &routes, "2025-01-01");
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
