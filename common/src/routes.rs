//! Route table
//!
//! Every page the site serves. Each page renders its own navigation shell
//! and footer; there is no client-side router state beyond the path.

/// External target of the team-portal redirect stub
pub const TEAM_PORTAL_URL: &str = "https://aanda-computers-bauchi.onrender.com/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Portfolio,
    ProjectDetail(String),
    Services,
    Experience,
    Contact,
    Gallery,
    PrivacyPolicy,
    /// Redirects to `TEAM_PORTAL_URL`
    TeamPortal,
    NotFound,
}

impl Route {
    /// Pages without a path parameter
    pub const STATIC: [Route; 9] = [
        Route::Home,
        Route::About,
        Route::Portfolio,
        Route::Services,
        Route::Experience,
        Route::Contact,
        Route::Gallery,
        Route::PrivacyPolicy,
        Route::TeamPortal,
    ];

    /// Parse a request path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn from_path(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["portfolio"] => Route::Portfolio,
            ["portfolio", id] => Route::ProjectDetail((*id).to_string()),
            ["services"] => Route::Services,
            ["experience"] => Route::Experience,
            ["contact"] => Route::Contact,
            ["gallery"] => Route::Gallery,
            ["privacy-policy"] => Route::PrivacyPolicy,
            ["bauchi-team"] => Route::TeamPortal,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::About => "/about".into(),
            Route::Portfolio => "/portfolio".into(),
            Route::ProjectDetail(id) => format!("/portfolio/{}", id),
            Route::Services => "/services".into(),
            Route::Experience => "/experience".into(),
            Route::Contact => "/contact".into(),
            Route::Gallery => "/gallery".into(),
            Route::PrivacyPolicy => "/privacy-policy".into(),
            Route::TeamPortal => "/bauchi-team".into(),
            Route::NotFound => "/404".into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Portfolio | Route::ProjectDetail(_) => "Portfolio",
            Route::Services => "Services",
            Route::Experience => "Experience",
            Route::Contact => "Contact",
            Route::Gallery => "Gallery",
            Route::PrivacyPolicy => "Privacy Policy",
            Route::TeamPortal => "Team Portal",
            Route::NotFound => "Not Found",
        }
    }

    /// External URL for redirect stubs
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Route::TeamPortal => Some(TEAM_PORTAL_URL),
            _ => None,
        }
    }

    /// Whether the page belongs in the sitemap
    pub fn is_indexable(&self) -> bool {
        !matches!(self, Route::TeamPortal | Route::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes_round_trip() {
        for route in Route::STATIC {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_project_detail_route() {
        assert_eq!(
            Route::from_path("/portfolio/churn-prediction"),
            Route::ProjectDetail("churn-prediction".into())
        );
        assert_eq!(
            Route::ProjectDetail("churn-prediction".into()).path(),
            "/portfolio/churn-prediction"
        );
    }

    #[test]
    fn test_trailing_slash_and_query() {
        assert_eq!(Route::from_path("/about/"), Route::About);
        assert_eq!(Route::from_path("/gallery?filter=Events"), Route::Gallery);
        assert_eq!(Route::from_path("/contact#form"), Route::Contact);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/blog"), Route::NotFound);
        assert_eq!(Route::from_path("/portfolio/a/b"), Route::NotFound);
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(Route::TeamPortal.redirect_target(), Some(TEAM_PORTAL_URL));
        assert_eq!(Route::Home.redirect_target(), None);
        assert!(!Route::TeamPortal.is_indexable());
    }
}
