//! Rotating page background

use leptos::prelude::*;
use portfolio_common::rotator::{BACKGROUND_IMAGES, ROTATION_PERIOD};
use portfolio_common::ImageRotator;

#[component]
pub fn Background() -> impl IntoView {
    let rotator = RwSignal::new(ImageRotator::default());

    match set_interval_with_handle(move || rotator.update(|r| r.tick()), ROTATION_PERIOD) {
        Ok(handle) => {
            on_cleanup(move || handle.clear());
        }
        Err(err) => {
            gloo::console::warn!("background rotation disabled", err);
        }
    }

    view! {
        <div class="background" aria-hidden="true">
            {BACKGROUND_IMAGES
                .iter()
                .enumerate()
                .map(|(index, src)| {
                    let style = format!("background-image: url('{}')", src);
                    view! {
                        <div
                            class=move || {
                                if rotator.with(|r| r.is_active(index)) { "bg-slide active" } else { "bg-slide" }
                            }
                            style=style
                        ></div>
                    }
                })
                .collect_view()}
            <div class="bg-overlay"></div>
        </div>
    }
}
