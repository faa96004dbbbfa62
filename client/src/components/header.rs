//! Site header: logo, navigation, dark-mode toggle, and the linked
//! particle web drifting behind it all.
//!
//! The header compresses once the page scrolls past a threshold; that is
//! the only scroll-coupled style on the site.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::particle_canvas::{FieldVariant, ParticleCanvas};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Scroll offset (px) past which the header tightens and gains a shadow.
#[cfg(feature = "hydrate")]
const SCROLL_THRESHOLD: f64 = 50.0;

/// Route table for the navigation bar.
const NAV_ITEMS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Projects", "/projects"),
    ("Skills", "/skills"),
    ("Research", "/research"),
    ("Publications", "/publications"),
    ("Contact", "/contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0));
            scrolled.set(offset > SCROLL_THRESHOLD);
        });
        on_cleanup(move || scroll_handle.remove());
    }

    let pathname = location.pathname;
    let is_active = move |href: &str| pathname.get() == href;

    view! {
        <header class=move || {
            if scrolled.get() { "site-header site-header--scrolled" } else { "site-header" }
        }>
            <ParticleCanvas variant=FieldVariant::Header class="site-header__canvas"/>

            <div class="site-header__bar">
                <A href="/" attr:class="site-header__logo">
                    <span class="site-header__logo-badge">"AI"</span>
                    <span class="site-header__logo-text">
                        <span class="site-header__logo-name">{content::profile::SITE_NAME}</span>
                        {content::profile::SITE_SUFFIX}
                    </span>
                </A>

                <nav class="site-header__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(name, href)| {
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        if is_active(href) {
                                            "site-header__link site-header__link--active"
                                        } else {
                                            "site-header__link"
                                        }
                                    }
                                >
                                    {name}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <button
                    class="btn site-header__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <button
                    class="site-header__menu-button"
                    aria-label="Toggle menu"
                    on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
                >
                    <span class=move || menu_bar_class(ui.get().menu_open, 0)></span>
                    <span class=move || menu_bar_class(ui.get().menu_open, 1)></span>
                    <span class=move || menu_bar_class(ui.get().menu_open, 2)></span>
                </button>
            </div>

            <Show when=move || ui.get().menu_open>
                <nav class="site-header__mobile-nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(name, href)| {
                            view! {
                                <A
                                    href=href
                                    attr:class="site-header__mobile-link"
                                    on:click=move |_| ui.update(|u| *u = u.with_menu_closed())
                                >
                                    {name}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </Show>
        </header>
    }
}

/// Class for one bar of the hamburger icon, crossed when the menu is open.
fn menu_bar_class(open: bool, index: usize) -> &'static str {
    match (open, index) {
        (false, _) => "site-header__menu-bar",
        (true, 0) => "site-header__menu-bar site-header__menu-bar--tilt-down",
        (true, 1) => "site-header__menu-bar site-header__menu-bar--hidden",
        (true, _) => "site-header__menu-bar site-header__menu-bar--tilt-up",
    }
}
