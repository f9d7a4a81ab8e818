//! Portfolio project card

use leptos::prelude::*;
use portfolio_common::card::{CardImage, SCREENSHOT_FALLBACK};
use portfolio_common::ProjectCard;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// Swap a broken screenshot for the inline placeholder, once
pub fn use_fallback_image(ev: &web_sys::Event) {
    if let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
    {
        if img.src() != SCREENSHOT_FALLBACK {
            img.set_src(SCREENSHOT_FALLBACK);
        }
    }
}

#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let image = match card.image.clone() {
        CardImage::Screenshot(src) => view! {
            <img src=src alt=card.title.clone() class="card-image" on:error=move |ev| use_fallback_image(&ev) />
        }
        .into_any(),
        CardImage::Placeholder(icon) => view! {
            <div class=format!("card-placeholder {}", card.gradient_class())>
                <span class="placeholder-icon">{icon}</span>
            </div>
        }
        .into_any(),
    };

    let overflow = card.overflow_label();

    view! {
        <article class="project-card">
            <a href=card.detail_path.clone() class="card-media">{image}</a>
            <div class="card-body">
                <span class=format!("badge {}", card.badge_class())>{card.category.label()}</span>
                <h3 class="card-title">
                    <a href=card.detail_path.clone()>{card.title.clone()}</a>
                </h3>
                <p class="card-description">{card.short_description.clone()}</p>
                <div class="card-tags">
                    {card.tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                    {overflow.map(|label| view! { <span class="tag tag-more">{label}</span> })}
                </div>
                <div class="card-links">
                    <a href=card.detail_path.clone() class="btn btn-primary btn-small">"View Details"</a>
                    {card
                        .links
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn btn-secondary btn-small"
                            >
                                {format!("{} {}", link.kind.icon(), link.kind.label())}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
