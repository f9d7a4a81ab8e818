//! Landing page

use leptos::prelude::*;
use portfolio_common::{Catalog, ProjectCard};
use crate::components::project_card::ProjectCardView;

const FEATURED_COUNT: usize = 3;
const HIGHLIGHTS: [&str; 4] = ["MSc AI", "CompTIA Data+", "8+ years experience", "UK-based"];

/// Title and blurb for each specialty card
const APPROACH: [(&str, &str); 3] = [
    (
        "Healthcare AI",
        "I build predictive models for healthcare systems, from NHS wait-time predictions to diagnostic support tools.",
    ),
    (
        "Business Intelligence",
        "I design dashboards and reports that transform raw data into actionable insights for decision-makers.",
    ),
    (
        "Analytics Engineering",
        "I build data pipelines and automation systems that scale from small teams to enterprise operations.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let featured: Vec<ProjectCard> = Catalog::builtin()
        .iter()
        .take(FEATURED_COUNT)
        .map(ProjectCard::from_record)
        .collect();

    view! {
        <section class="hero">
            <span class="pill">"Available for Opportunities"</span>
            <h1>
                <span class="hero-name">"Ayoolumi Melehon"</span>
                <br />
                <span class="hero-role">"Data Analyst"</span>
            </h1>
            <p class="hero-lead">
                "Collect, process, analyse and present data - from supporting everyday business decisions to fuelling global change."
            </p>
            <div class="hero-actions">
                <a href="/portfolio" class="btn btn-primary btn-large">"See my portfolio"</a>
                <a href="/contact" class="btn btn-secondary btn-large">"Contact Me"</a>
            </div>
            <ul class="hero-highlights">
                {HIGHLIGHTS.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>
        </section>

        <section class="featured">
            <h2>"Featured Projects"</h2>
            <div class="card-grid">
                {featured.into_iter().map(|card| view! { <ProjectCardView card=card /> }).collect_view()}
            </div>
            <a href="/portfolio" class="btn btn-secondary">"View all projects"</a>
        </section>

        <section class="approach">
            <h2>"My Approach"</h2>
            <p class="section-lead">"Three core specialties that drive results"</p>
            <div class="card-grid">
                {APPROACH
                    .iter()
                    .map(|(title, blurb)| view! {
                        <article class="approach-card">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="cta">
            <h2>"Let's Work Together"</h2>
            <p class="section-lead">
                "Looking for a data analyst who can deliver actionable insights? Let's discuss your project."
            </p>
            <div class="hero-actions">
                <a href="/contact" class="btn btn-primary btn-large">"Get in Touch"</a>
                <a href="/portfolio" class="btn btn-secondary btn-large">"View Portfolio"</a>
            </div>
        </section>
    }
}
