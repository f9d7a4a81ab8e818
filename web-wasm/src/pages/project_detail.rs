//! Project detail page
//!
//! Unknown ids render a not-found message instead of an error.

use leptos::prelude::*;
use portfolio_common::card::DATA_NOTICE;
use portfolio_common::{Catalog, ProjectDetail};
use crate::components::project_card::use_fallback_image;

#[component]
pub fn ProjectDetailPage(id: String) -> impl IntoView {
    match Catalog::builtin().get_by_id(&id) {
        Some(record) => view! { <DetailView detail=ProjectDetail::from_record(record) /> }.into_any(),
        None => view! { <MissingProject id=id /> }.into_any(),
    }
}

#[component]
fn MissingProject(id: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Project Not Found"</h1>
            <p>{format!("No project with id \"{}\".", id)}</p>
            <a href="/portfolio" class="btn btn-primary">"← Back to Portfolio"</a>
        </section>
    }
}

fn bullet_list(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="bullet-list">
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn DetailView(detail: ProjectDetail) -> impl IntoView {
    let ProjectDetail {
        title,
        category,
        short_description,
        links,
        screenshots,
        challenge,
        solution,
        impact,
        tech_stack,
        features,
        learnings,
        completion_date,
        ..
    } = detail.clone();

    let has_screenshots = !screenshots.is_empty();
    let has_learnings = !learnings.is_empty();

    view! {
        <section class="detail-hero">
            <a href="/portfolio" class="back-link">"← Back to Portfolio"</a>
            <span class=format!("badge {}", detail.badge_class())>{category.label()}</span>
            <h1>{title}</h1>
            <p class="lead">{short_description}</p>
            <p class="text-muted">{format!("Completed: {}", completion_date)}</p>
            <div class="detail-links">
                {links
                    .into_iter()
                    .map(|link| view! {
                        <a href=link.url target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            {format!("{} {}", link.kind.icon(), link.kind.label())}
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>

        {has_screenshots.then(|| view! {
            <section class="detail-section">
                <h2>"Screenshots"</h2>
                <div class="screenshot-grid">
                    {screenshots
                        .into_iter()
                        .map(|shot| view! {
                            <img src=shot.src alt=shot.alt on:error=move |ev| use_fallback_image(&ev) />
                        })
                        .collect_view()}
                </div>
            </section>
        })}

        <section class="detail-section overview">
            <h2>"Overview"</h2>
            <div class="overview-grid">
                <div class="overview-item">
                    <h3>"💡 Challenge"</h3>
                    <p>{challenge}</p>
                </div>
                <div class="overview-item">
                    <h3>"⚡ Solution"</h3>
                    <p>{solution}</p>
                </div>
                <div class="overview-item">
                    <h3>"🎯 Impact"</h3>
                    <p>{impact}</p>
                </div>
            </div>
        </section>

        <section class="detail-section">
            <h2>"🛠️ Tech Stack"</h2>
            <div class="card-tags">
                {tech_stack.into_iter().map(|tech| view! { <span class="tag">{tech}</span> }).collect_view()}
            </div>
        </section>

        <section class="detail-section">
            <h2>"✨ Key Features"</h2>
            {bullet_list(features)}
        </section>

        {has_learnings.then(|| view! {
            <section class="detail-section">
                <h2>"📚 What I Learned"</h2>
                {bullet_list(learnings)}
            </section>
        })}

        <section class="detail-section data-notice">
            <h2>"📊 Data Notes"</h2>
            <p>{DATA_NOTICE}</p>
        </section>
    }
}
