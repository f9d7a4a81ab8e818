//! Navigation bar
//!
//! Sticky header with a mobile menu. Menu and scroll styling are driven by
//! `NavShell`; the scroll listener is removed when the bar unmounts.

use leptos::prelude::*;
use portfolio_common::navigation::nav_links;
use portfolio_common::{NavShell, Route};

#[component]
pub fn Navbar(current: Route) -> impl IntoView {
    let shell = RwSignal::new(NavShell::new());

    let listener = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        shell.update(|s| s.on_scroll(offset));
    });
    on_cleanup(move || listener.remove());

    let links = nav_links();
    let mobile_links = links.clone();
    let current_mobile = current.clone();

    view! {
        <nav class=move || format!("navbar {}", shell.with(|s| s.style.class()))>
            <div class="navbar-inner">
                <a href="/" class="brand">
                    <img src="/head.jpg" alt="Ayoolumi Melehon" class="brand-avatar" />
                    <span class="brand-name">"AYOOLUMI MELEHON"</span>
                </a>

                <div class="nav-links desktop">
                    {links
                        .into_iter()
                        .map(|link| {
                            let class = if link.is_active(&current) { "nav-link active" } else { "nav-link" };
                            view! { <a href=link.href() class=class>{link.label}</a> }
                        })
                        .collect_view()}
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || shell.with(|s| s.is_menu_open()).to_string()
                    on:click=move |_| shell.update(|s| s.toggle_menu())
                >
                    {move || if shell.with(|s| s.is_menu_open()) { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || shell.with(|s| s.is_menu_open())>
                <div class="nav-links mobile">
                    {mobile_links
                        .iter()
                        .map(|link| {
                            let class = if link.is_active(&current_mobile) { "nav-link active" } else { "nav-link" };
                            view! {
                                <a
                                    href=link.href()
                                    class=class
                                    on:click=move |_| shell.update(|s| s.on_link_activated())
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
