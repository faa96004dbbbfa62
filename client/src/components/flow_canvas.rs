//! Host for the layered signal-flow animation.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use motion::flow::FlowNet;
#[cfg(feature = "hydrate")]
use motion::render;

#[cfg(feature = "hydrate")]
use crate::util::canvas::{context_2d, fit_to_parent, seed_from_clock};

#[cfg(feature = "hydrate")]
const TICK_MS: u32 = 33;

/// Decorative signal-flow canvas. Fills its parent element.
#[component]
pub fn FlowCanvas(#[prop(optional)] class: &'static str) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let tick = Rc::new(RefCell::new(None::<Interval>));
        let net = Rc::new(RefCell::new(None::<FlowNet>));

        let tick_mount = Rc::clone(&tick);
        let net_mount = Rc::clone(&net);
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
            *net_mount.borrow_mut() = Some(FlowNet::new(width, height, seed_from_clock()));

            let net_tick = Rc::clone(&net_mount);
            let canvas_tick = canvas_mount.clone();
            let interval = Interval::new(TICK_MS, move || {
                let mut slot = net_tick.borrow_mut();
                let (Some(net), Some(canvas)) = (slot.as_mut(), canvas_tick.get_untracked()) else {
                    return;
                };
                net.step();
                let (width, height) = (f64::from(canvas.width()), f64::from(canvas.height()));
                if render::draw_flow(&ctx, net, width, height).is_err() {
                    slot.take();
                }
            });
            *tick_mount.borrow_mut() = Some(interval);
        });

        let net_resize = Rc::clone(&net);
        let canvas_resize = canvas_ref.clone();
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
            let Some(canvas) = canvas_resize.get_untracked() else {
                return;
            };
            if let Some(net) = net_resize.borrow_mut().as_mut() {
                let (width, height) = fit_to_parent(&canvas);
                net.resize(width, height);
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
