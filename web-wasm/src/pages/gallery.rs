//! Gallery page
//!
//! Category filter over the fixed media list; clicking an item opens it in a
//! lightbox until closed.

use leptos::prelude::*;
use portfolio_common::gallery::{filter_items, gallery_items, MediaType};
use portfolio_common::{Filter, GalleryCategory, GalleryItem, Lightbox};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let (filter, set_filter) = signal(Filter::<GalleryCategory>::All);
    let lightbox = RwSignal::new(Lightbox::<GalleryItem>::default());

    let visible = move || -> Vec<GalleryItem> {
        filter_items(gallery_items(), filter.get())
            .into_iter()
            .cloned()
            .collect()
    };

    view! {
        <section class="page-hero">
            <h1>"Gallery"</h1>
            <p>"Moments, milestones and project showcases"</p>
        </section>

        <div class="filter-bar" role="toolbar">
            {Filter::options(&GalleryCategory::ALL)
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

        <div class="gallery-grid">
            <For
                each=visible
                key=|item| item.url.clone()
                children=move |item| {
                    let selected = item.clone();
                    view! {
                        <button class="gallery-item" on:click=move |_| lightbox.update(|l| l.open(selected.clone()))>
                            <img src=item.thumbnail.clone() alt=item.title.clone() loading="lazy" />
                            <span class="media-icon">{item.media_type.icon()}</span>
                            <div class="gallery-caption">
                                <h3>{item.title.clone()}</h3>
                                <p>{item.description.clone()}</p>
                            </div>
                        </button>
                    }
                }
            />
        </div>

        <Show when=move || filter_items(gallery_items(), filter.get()).is_empty()>
            <p class="text-muted">"Nothing here yet."</p>
        </Show>

        {move || {
            lightbox.with(|l| l.selected().cloned()).map(|item| view! {
                <div class="lightbox" role="dialog" on:click=move |_| lightbox.update(|l| l.close())>
                    <div class="lightbox-content" on:click=|ev| ev.stop_propagation()>
                        <button class="lightbox-close" aria-label="Close" on:click=move |_| lightbox.update(|l| l.close())>
                            "✕"
                        </button>
                        {match item.media_type {
                            MediaType::Image => view! { <img src=item.url.clone() alt=item.title.clone() /> }.into_any(),
                            MediaType::Video => view! { <video src=item.url.clone() controls autoplay></video> }.into_any(),
                        }}
                        <h3>{item.title.clone()}</h3>
                        <p>{item.description.clone()}</p>
                    </div>
                </div>
            })
        }}
    }
}
