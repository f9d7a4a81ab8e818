//! Navigation shell state
//!
//! Two independent parts:
//! - menu: closed/open, toggled by the hamburger button, closed by any link
//! - style: normal/elevated, derived from the scroll offset alone

use crate::routes::Route;

/// Scroll offset (px) above which the header is elevated
pub const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavStyle {
    #[default]
    Normal,
    Elevated,
}

impl NavStyle {
    /// Style for a vertical scroll offset
    pub fn for_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            NavStyle::Elevated
        } else {
            NavStyle::Normal
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavStyle::Normal => "bg-black/40 backdrop-blur-md",
            NavStyle::Elevated => "bg-black/80 backdrop-blur-lg shadow-lg",
        }
    }
}

/// Per-page navigation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavShell {
    pub menu: MenuState,
    pub style: NavStyle,
}

impl NavShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Following any link closes the mobile menu
    pub fn on_link_activated(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.style = NavStyle::for_offset(offset);
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn is_scrolled(&self) -> bool {
        self.style == NavStyle::Elevated
    }
}

/// Header link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    pub fn href(&self) -> String {
        self.route.path()
    }

    /// Detail pages highlight "Portfolio"
    pub fn is_active(&self, current: &Route) -> bool {
        match (&self.route, current) {
            (Route::Portfolio, Route::ProjectDetail(_)) => true,
            (link, current) => link == current,
        }
    }
}

/// Header links, in display order
pub fn nav_links() -> Vec<NavLink> {
    [
        Route::Home,
        Route::About,
        Route::Portfolio,
        Route::Services,
        Route::Experience,
        Route::Gallery,
        Route::Contact,
    ]
    .into_iter()
    .map(|route| NavLink {
        label: route.title(),
        route,
    })
    .collect()
}
