//! Contact page: form plus direct channels

use leptos::prelude::*;
use portfolio_common::contact::FALLBACK_EMAIL;
use crate::components::contact_form::ContactForm;

/// (icon, label, value, link)
const CHANNELS: [(&str, &str, &str, Option<&str>); 7] = [
    ("📧", "Email", FALLBACK_EMAIL, Some("mailto:ayoolumimelehon@gmail.com")),
    ("📧", "Secondary Email", "info@ayofemimelehon.info", Some("mailto:info@ayofemimelehon.info")),
    ("💼", "LinkedIn", "linkedin.com/in/ayoolumi-melehon", Some("https://www.linkedin.com/in/ayoolumi-melehon-b63237179/")),
    ("🐙", "GitHub", "github.com/ayothetechguy", Some("https://github.com/ayothetechguy")),
    ("🎥", "YouTube", "youtube.com/@ayoolumi_oluwafemi", Some("https://www.youtube.com/@ayoolumi_oluwafemi")),
    ("📍", "Location", "Grangemouth, Scotland, UK · On-site | Hybrid | Remote", None),
    ("⏰", "Response Time", "Within 24 hours on business days", None),
];

const SEEKING: [&str; 5] = [
    "Data Analyst / Analytics Engineer roles",
    "Product Analytics positions",
    "Workforce/People Analytics",
    "Research Assistant opportunities",
    "ML/AI project roles",
];

const ALSO_AVAILABLE: [&str; 4] = [
    "Consulting projects (SMEs, nonprofits)",
    "Short-term contracts",
    "Training & workshops",
    "Research collaborations",
];

const NEXT_STEPS: [&str; 5] = [
    "You submit the form",
    "I review your requirements (usually within 24 hours)",
    "We schedule a free 30-minute discovery call",
    "I provide a proposal or consultation",
    "We agree on scope, timeline, and engagement",
];

fn arrow_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="arrow-list">
            {items.iter().map(|item| view! { <li>{format!("→ {}", item)}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Let's Build Something Together"</h1>
            <p>"Tell me about your data challenge and I'll get back to you within 24 hours."</p>
        </section>

        <div class="contact-layout">
            <section class="panel">
                <h2>"Send a Message"</h2>
                <ContactForm />
            </section>

            <aside class="contact-sidebar">
                <section class="panel">
                    <h2>"Direct Contact"</h2>
                    <ul class="channel-list">
                        {CHANNELS
                            .iter()
                            .map(|(icon, label, value, link)| {
                                let value = match link {
                                    Some(href) => view! {
                                        <a href=*href target="_blank" rel="noopener noreferrer">{*value}</a>
                                    }
                                    .into_any(),
                                    None => view! { <span>{*value}</span> }.into_any(),
                                };
                                view! {
                                    <li>
                                        <span class="channel-icon">{*icon}</span>
                                        <strong>{*label}</strong>
                                        {value}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="panel">
                    <h2>"Current Focus"</h2>
                    <h3>"I'm actively seeking opportunities in:"</h3>
                    {arrow_list(&SEEKING)}
                    <h3>"Also available for:"</h3>
                    {arrow_list(&ALSO_AVAILABLE)}
                </section>

                <section class="panel">
                    <h2>"What Happens Next"</h2>
                    <ol class="steps">
                        {NEXT_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                    </ol>
                </section>
            </aside>
        </div>
    }
}
