//! 404 page

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"This page doesn't exist."</p>
            <a href="/" class="btn btn-primary">"Back to Home"</a>
        </section>
    }
}
