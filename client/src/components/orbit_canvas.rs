//! Host for the 3D neural scene.
//!
//! The scene is illustrative only and carries no model data, so the host
//! just spins the simulation and repaints. A caption overlay explains what
//! the visitor is looking at.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use motion::orbit::OrbitScene;
#[cfg(feature = "hydrate")]
use motion::render;

#[cfg(feature = "hydrate")]
use crate::util::canvas::{context_2d, fit_to_parent, seed_from_clock};

#[cfg(feature = "hydrate")]
const TICK_MS: u32 = 33;

/// 3D neural network panel with caption.
#[component]
pub fn OrbitCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let tick = Rc::new(RefCell::new(None::<Interval>));

        let tick_mount = Rc::clone(&tick);
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

            fit_to_parent(&canvas);
            let scene = Rc::new(RefCell::new(OrbitScene::new(seed_from_clock())));

            let canvas_tick = canvas_mount.clone();
            let interval = Interval::new(TICK_MS, move || {
                let Some(canvas) = canvas_tick.get_untracked() else {
                    return;
                };
                let mut scene = scene.borrow_mut();
                scene.step();
                let (width, height) = (f64::from(canvas.width()), f64::from(canvas.height()));
                let _ = render::draw_orbit(&ctx, &scene, width, height);
            });
            *tick_mount.borrow_mut() = Some(interval);
        });

        let canvas_resize = canvas_ref.clone();
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(canvas) = canvas_resize.get_untracked() {
                fit_to_parent(&canvas);
            }
        });

        let tick_cleanup = Rc::clone(&tick);
        on_cleanup(move || {
            tick_cleanup.borrow_mut().take();
            resize_handle.remove();
        });
    }

    view! {
        <div class="orbit-panel">
            <canvas node_ref=canvas_ref class="orbit-panel__canvas" aria-hidden="true"></canvas>
            <div class="orbit-panel__caption">
                <p>"Interactive 3D Neural Network Visualization"</p>
                <p class="orbit-panel__caption-sub">"Layered spheres light up as activity flows through"</p>
            </div>
        </div>
    }
}
