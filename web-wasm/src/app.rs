//! Main application component
//!
//! Resolves the current path to a `Route` once per page load and renders the
//! shell (background, navbar, footer, cookie banner) around the matching page.

use leptos::prelude::*;
use portfolio_common::Route;
use crate::components::{
    background::Background,
    cookie_banner::CookieBanner,
    footer::Footer,
    navbar::Navbar,
};
use crate::pages::{
    about::AboutPage,
    contact::ContactPage,
    experience::ExperiencePage,
    gallery::GalleryPage,
    home::HomePage,
    not_found::NotFoundPage,
    portfolio::PortfolioPage,
    privacy::PrivacyPage,
    project_detail::ProjectDetailPage,
    services::ServicesPage,
    team_portal::TeamPortalPage,
};

/// Route for the address bar at load time
pub fn current_route() -> Route {
    let path = window().location().pathname().unwrap_or_else(|_| "/".to_string());
    Route::from_path(&path)
}

#[component]
pub fn App() -> impl IntoView {
    let route = current_route();
    document().set_title(&format!("{} | Ayoolumi Melehon", route.title()));

    // The team portal is a bare redirect without the site chrome
    if route.redirect_target().is_some() {
        return view! { <TeamPortalPage /> }.into_any();
    }

    let page = match route.clone() {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Portfolio => view! { <PortfolioPage /> }.into_any(),
        Route::ProjectDetail(id) => view! { <ProjectDetailPage id=id /> }.into_any(),
        Route::Services => view! { <ServicesPage /> }.into_any(),
        Route::Experience => view! { <ExperiencePage /> }.into_any(),
        Route::Contact => view! { <ContactPage /> }.into_any(),
        Route::Gallery => view! { <GalleryPage /> }.into_any(),
        Route::PrivacyPolicy => view! { <PrivacyPage /> }.into_any(),
        Route::TeamPortal => view! { <TeamPortalPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <Background />
        <Navbar current=route />
        <main class="page">{page}</main>
        <Footer />
        <CookieBanner />
    }
    .into_any()
}
