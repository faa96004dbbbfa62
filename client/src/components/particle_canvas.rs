//! Bridge component between Leptos and the imperative particle field.
//!
//! On hydration this sizes the canvas to its parent, seeds a
//! `motion::field::ParticleField` from the clock, and drives it with a
//! 33 ms interval owned by the component. The interval handle drops on
//! unmount, which stops the loop; a missing 2D context skips the effect
//! entirely and the page renders without the animation.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use motion::field::{FieldConfig, ParticleField};
#[cfg(feature = "hydrate")]
use motion::render;

#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::canvas::{context_2d, fit_to_parent, seed_from_clock};

/// Animation tick period (~30 fps).
#[cfg(feature = "hydrate")]
const TICK_MS: u32 = 33;

/// Which particle field this host runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldVariant {
    /// Monochrome linked web behind the navigation header.
    Header,
    /// Colored glow drift behind the hero section.
    Hero,
}

/// Decorative particle canvas. Fills its parent element.
#[component]
pub fn ParticleCanvas(variant: FieldVariant, #[prop(optional)] class: &'static str) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let _ = variant;

    #[cfg(feature = "hydrate")]
    {
        let ui = expect_context::<RwSignal<UiState>>();
        let tick = Rc::new(RefCell::new(None::<Interval>));
        let field = Rc::new(RefCell::new(None::<ParticleField>));

        let tick_mount = Rc::clone(&tick);
        let field_mount = Rc::clone(&field);
        let canvas_mount = canvas_ref.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_mount.get() else {
                return;
            };
            if tick_mount.borrow().is_some() {
                return;
            }
            let Some(ctx) = context_2d(&canvas) else {
                return;
            };

            let (width, height) = fit_to_parent(&canvas);
            let config = match variant {
                FieldVariant::Header => FieldConfig::header(),
                FieldVariant::Hero => FieldConfig::hero(),
            };
            *field_mount.borrow_mut() = Some(ParticleField::new(config, width, height, seed_from_clock()));

            let field_tick = Rc::clone(&field_mount);
            let interval = Interval::new(TICK_MS, move || {
                let mut slot = field_tick.borrow_mut();
                let Some(field) = slot.as_mut() else {
                    return;
                };
                field.step();
                let result = if field.linked() {
                    let dark = ui.get_untracked().dark_mode;
                    let (fill, stroke) = if dark {
                        ("rgba(237, 237, 237, 0.5)", "rgba(237, 237, 237, 0.2)")
                    } else {
                        ("rgba(23, 23, 23, 0.5)", "rgba(23, 23, 23, 0.2)")
                    };
                    render::draw_linked_field(&ctx, field, fill, stroke)
                } else {
                    render::draw_glow_field(&ctx, field)
                };
                if result.is_err() {
                    // Context lost mid-flight; stop drawing quietly.
                    slot.take();
                }
            });
            *tick_mount.borrow_mut() = Some(interval);
        });

        let field_resize = Rc::clone(&field);
        let canvas_resize = canvas_ref.clone();
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
            let Some(canvas) = canvas_resize.get_untracked() else {
                return;
            };
            if let Some(field) = field_resize.borrow_mut().as_mut() {
                let (width, height) = fit_to_parent(&canvas);
                field.resize(width, height);
            }
        });

        let tick_cleanup = Rc::clone(&tick);
        on_cleanup(move || {
            tick_cleanup.borrow_mut().take();
            resize_handle.remove();
        });
    }

    view! { <canvas node_ref=canvas_ref class=class aria-hidden="true"></canvas> }
}
