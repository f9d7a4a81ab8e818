//! Portfolio page: category filter bar over the project catalog

use leptos::prelude::*;
use portfolio_common::card::DATA_NOTICE;
use portfolio_common::{Catalog, Category, Filter, ProjectCard};
use crate::components::project_card::ProjectCardView;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let (filter, set_filter) = signal(Filter::<Category>::All);
    let catalog = Catalog::builtin();

    let visible = move || -> Vec<ProjectCard> {
        catalog
            .filtered(filter.get())
            .into_iter()
            .map(ProjectCard::from_record)
            .collect()
    };

    view! {
        <section class="page-hero">
            <h1>"Portfolio"</h1>
            <p>"Healthcare analytics, machine learning and data engineering case studies"</p>
        </section>

        <div class="filter-bar" role="toolbar">
            {Filter::options(&Category::ALL)
                .into_iter()
                .map(|option| view! {
                    <button
                        class=move || if filter.get() == option { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| set_filter.set(option)
                    >
                        {option.to_string()}
                    </button>
                })
                .collect_view()}
        </div>

        <p class="result-count">
            {move || format!("Showing {} of {} projects", catalog.filtered(filter.get()).len(), catalog.len())}
        </p>

        <div class="card-grid">
            <For
                each=visible
                key=|card| card.id.clone()
                children=move |card| view! { <ProjectCardView card=card /> }
            />
        </div>

        <Show when=move || catalog.filtered(filter.get()).is_empty()>
            <p class="text-muted">"No projects in this category yet."</p>
        </Show>

        <p class="data-notice">{DATA_NOTICE}</p>
    }
}
