//! Hero section: headline, rotating specialty label, call-to-action
//! buttons, and the glow particle field drifting behind everything.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::particle_canvas::{FieldVariant, ParticleCanvas};

/// Milliseconds between specialty label rotations.
#[cfg(feature = "hydrate")]
const ROTATE_MS: u32 = 2000;

/// Fixed ornament node placements (top %, left %, diameter px). Fixed
/// rather than randomized so SSR and hydration markup stay identical.
const ORNAMENT_NODES: [(f64, f64, f64); 8] = [
    (14.0, 22.0, 9.0),
    (28.0, 68.0, 12.0),
    (38.0, 40.0, 7.0),
    (52.0, 80.0, 10.0),
    (60.0, 18.0, 13.0),
    (72.0, 55.0, 8.0),
    (82.0, 30.0, 11.0),
    (24.0, 47.0, 6.0),
];

/// Short tech-stack badges under the hero copy.
const STACK_BADGES: [&str; 5] = ["tensorflow", "pytorch", "python", "react", "aws"];

#[component]
pub fn Hero() -> impl IntoView {
    let technologies = content::profile::technologies();
    let tech_index = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let len = technologies.len();
        let tick = Rc::new(RefCell::new(None::<gloo_timers::callback::Interval>));
        let tick_mount = Rc::clone(&tick);
        Effect::new(move || {
            if tick_mount.borrow().is_some() {
                return;
            }
            let interval = gloo_timers::callback::Interval::new(ROTATE_MS, move || {
                tech_index.update(|i| *i = content::profile::next_technology_index(*i, len));
            });
            *tick_mount.borrow_mut() = Some(interval);
        });
        on_cleanup(move || {
            tick.borrow_mut().take();
        });
    }

    let current_tech = {
        let technologies = technologies.clone();
        move || technologies[tech_index.get() % technologies.len()]
    };

    view! {
        <section class="hero">
            <ParticleCanvas variant=FieldVariant::Hero class="hero__canvas"/>
            <div class="hero__overlay"></div>

            <div class="hero__content">
                <div class="hero__copy">
                    <h1 class="hero__title">
                        <span>"Transforming Ideas"</span>
                        <span class="hero__title-accent">"With Artificial Intelligence"</span>
                    </h1>
                    <p class="hero__tagline">
                        "AI Engineer specializing in "
                        <span class="hero__tech">{current_tech}</span>
                    </p>
                    <div class="hero__actions">
                        <A href="/projects" attr:class="btn btn--primary hero__cta">
                            "View Projects"
                        </A>
                        <A href="/contact" attr:class="btn btn--outline hero__cta">
                            "Contact Me"
                        </A>
                    </div>
                </div>

                <div class="hero__ornament" aria-hidden="true">
                    <div class="hero__brain">
                        {ORNAMENT_NODES
                            .into_iter()
                            .map(|(top, left, size)| {
                                view! {
                                    <span
                                        class="hero__node"
                                        style=format!(
                                            "top:{top}%;left:{left}%;width:{size}px;height:{size}px;",
                                        )
                                    ></span>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <div class="hero__core"></div>
                        <div class="hero__ring hero__ring--outer"></div>
                        <div class="hero__ring hero__ring--middle"></div>
                        <div class="hero__ring hero__ring--inner"></div>
                    </div>
                </div>
            </div>

            <div class="hero__stack">
                {STACK_BADGES
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <div class="hero__stack-badge" title=tech>
                                {tech.chars().next().unwrap_or('?').to_ascii_uppercase().to_string()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
