//! Team portal redirect
//!
//! Sends the browser straight to the external portal login. The link stays
//! on screen in case the navigation is blocked.

use leptos::prelude::*;
use portfolio_common::routes::TEAM_PORTAL_URL;

#[component]
pub fn TeamPortalPage() -> impl IntoView {
    Effect::new(move |_| {
        if let Err(err) = window().location().set_href(TEAM_PORTAL_URL) {
            gloo::console::warn!("team portal redirect failed", err);
        }
    });

    view! {
        <section class="team-portal">
            <h1>"A&A Computers Bauchi"</h1>
            <p class="subtitle">"Private Team Access"</p>
            <p>"Redirecting you to the team portal..."</p>
            <a href=TEAM_PORTAL_URL class="btn btn-primary btn-large">"Access Team Portal"</a>
            <a href="/" class="footer-link">"Back to Main Site"</a>
        </section>
    }
}
