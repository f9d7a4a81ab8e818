//! Cookie consent banner
//!
//! Shown until the visitor accepts or declines; the choice is written to
//! `document.cookie`.

use leptos::prelude::*;
use portfolio_common::consent::{consent_cookie, should_show_banner};
use portfolio_common::ConsentChoice;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    document().dyn_into::<HtmlDocument>().ok()
}

fn read_cookies() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

fn store_choice(choice: ConsentChoice) {
    let stored = html_document().map(|doc| doc.set_cookie(&consent_cookie(choice)));
    if !matches!(stored, Some(Ok(()))) {
        gloo::console::warn!("could not store cookie consent");
    }
}

#[component]
pub fn CookieBanner() -> impl IntoView {
    let (visible, set_visible) = signal(should_show_banner(&read_cookies()));

    let decide = move |choice: ConsentChoice| {
        store_choice(choice);
        set_visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div class="cookie-banner" role="dialog" aria-live="polite">
                <p>
                    "This site uses cookies to remember your preferences. See the "
                    <a href="/privacy-policy">"Privacy Policy"</a>
                    " for details."
                </p>
                <div class="cookie-actions">
                    <button class="btn btn-secondary" on:click=move |_| decide(ConsentChoice::Declined)>
                        "Decline"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| decide(ConsentChoice::Accepted)>
                        "Accept"
                    </button>
                </div>
            </div>
        </Show>
    }
}
