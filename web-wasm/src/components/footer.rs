//! Site footer

use leptos::prelude::*;
use portfolio_common::contact::FALLBACK_EMAIL;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://www.linkedin.com/in/ayoolumi-melehon-b63237179/"),
    ("GitHub", "https://github.com/ayothetechguy"),
    ("YouTube", "https://www.youtube.com/@ayoolumi_oluwafemi"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="social-links">
                <a href=format!("mailto:{}", FALLBACK_EMAIL) aria-label="Email">"Email"</a>
                {SOCIAL_LINKS
                    .iter()
                    .map(|(label, url)| view! {
                        <a href=*url target="_blank" rel="noopener noreferrer" aria-label=*label>{*label}</a>
                    })
                    .collect_view()}
            </div>
            <p class="copyright">"© 2025 Ayoolumi Melehon | Grangemouth, Scotland"</p>
            <a href="/privacy-policy" class="footer-link">"Privacy Policy"</a>
        </footer>
    }
}
