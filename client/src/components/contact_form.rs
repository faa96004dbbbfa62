//! Contact feature component: the validated form plus the contact-info
//! sidebar with social links and the abstract location map.
//!
//! Submission flow: validate locally, POST to the relay endpoint, flip to
//! a success panel and clear the fields after a fixed delay. Failures show
//! a generic message and leave every field intact for retry. The submit
//! button is disabled while a send is pending; that is the only guard
//! against overlapping submissions.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use content::contact::ContactMessage;
use content::profile::{CONTACT_EMAIL, LOCATION, social_links};

/// Milliseconds the success panel stays up before the form resets.
#[cfg(feature = "hydrate")]
const RESET_DELAY_MS: u32 = 5000;

/// Fixed dot placements for the abstract map (left %, top %, diameter px,
/// opacity). Fixed rather than randomized so SSR and hydration markup
/// stay identical.
const MAP_POINTS: [(f64, f64, f64, f64); 15] = [
    (48.0, 32.0, 4.0, 0.7),
    (61.0, 44.0, 3.0, 0.5),
    (36.0, 55.0, 5.0, 0.6),
    (52.0, 63.0, 2.5, 0.4),
    (28.0, 38.0, 3.5, 0.8),
    (70.0, 30.0, 2.0, 0.3),
    (44.0, 47.0, 4.5, 0.6),
    (57.0, 25.0, 3.0, 0.5),
    (33.0, 70.0, 2.5, 0.4),
    (66.0, 58.0, 4.0, 0.7),
    (41.0, 22.0, 2.0, 0.35),
    (74.0, 48.0, 3.5, 0.55),
    (25.0, 52.0, 3.0, 0.45),
    (55.0, 74.0, 2.0, 0.3),
    (47.0, 40.0, 5.0, 0.75),
];

/// Lifecycle of one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    /// Whether the submit control should be disabled.
    #[must_use]
    pub fn busy(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// The inline error to show, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Assemble and validate a message from raw field values. Fields are
/// trimmed on the way out so the relay never sees padded values.
///
/// # Errors
///
/// Returns the user-facing validation message on failure.
pub fn build_message(name: &str, email: &str, subject: &str, message: &str) -> Result<ContactMessage, String> {
    let candidate = ContactMessage {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        subject: subject.trim().to_owned(),
        message: message.trim().to_owned(),
    };
    candidate.validate().map_err(|e| e.to_string())?;
    Ok(candidate)
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    // Typing after a failure clears the stale error.
    let clear_error = move || {
        if matches!(status.get_untracked(), SubmitStatus::Failed(_)) {
            status.set(SubmitStatus::Idle);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().busy() {
            return;
        }
        let payload = match build_message(&name.get(), &email.get(), &subject.get(), &message.get()) {
            Ok(payload) => payload,
            Err(validation) => {
                status.set(SubmitStatus::Failed(validation));
                return;
            }
        };
        status.set(SubmitStatus::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(&payload).await {
                Ok(()) => {
                    status.set(SubmitStatus::Sent);
                    gloo_timers::callback::Timeout::new(RESET_DELAY_MS, move || {
                        name.set(String::new());
                        email.set(String::new());
                        subject.set(String::new());
                        message.set(String::new());
                        status.set(SubmitStatus::Idle);
                    })
                    .forget();
                }
                Err(user_message) => status.set(SubmitStatus::Failed(user_message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    view! {
        <section class="contact" id="contact">
            <div class="section-heading">
                <h2 class="section-heading__title">"Get In Touch"</h2>
                <p class="section-heading__blurb">
                    "Feel free to reach out for collaborations, inquiries, or just to say hello. \
                     I'm always open to discussing new projects and opportunities."
                </p>
            </div>

            <div class="contact__layout">
                <div class="card contact__form-card">
                    <h3 class="card__title">"Send Me a Message"</h3>

                    <Show
                        when=move || status.get() != SubmitStatus::Sent
                        fallback=|| {
                            view! {
                                <div class="contact__success">
                                    <div class="contact__success-mark">"✓"</div>
                                    <h4>"Message Sent Successfully!"</h4>
                                    <p class="card__subtle">
                                        "Thank you for reaching out. I'll get back to you as soon \
                                         as possible."
                                    </p>
                                </div>
                            }
                        }
                    >
                        <form class="contact__form" on:submit=on_submit>
                            <Show when=move || status.get().error().is_some()>
                                <p class="contact__error">
                                    {move || status.get().error().unwrap_or_default().to_owned()}
                                </p>
                            </Show>

                            <input
                                class="contact__input"
                                type="text"
                                placeholder="Your Name"
                                prop:value=move || name.get()
                                on:input=move |ev| {
                                    name.set(event_target_value(&ev));
                                    clear_error();
                                }
                            />
                            <input
                                class="contact__input"
                                type="email"
                                placeholder="Your Email"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    clear_error();
                                }
                            />
                            <input
                                class="contact__input"
                                type="text"
                                placeholder="Subject (Optional)"
                                prop:value=move || subject.get()
                                on:input=move |ev| {
                                    subject.set(event_target_value(&ev));
                                    clear_error();
                                }
                            />
                            <textarea
                                class="contact__input contact__input--area"
                                rows="5"
                                placeholder="Your Message"
                                prop:value=move || message.get()
                                on:input=move |ev| {
                                    message.set(event_target_value(&ev));
                                    clear_error();
                                }
                            ></textarea>

                            <button
                                class="btn btn--primary contact__submit"
                                type="submit"
                                disabled=move || status.get().busy()
                            >
                                {move || if status.get().busy() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </Show>
                </div>

                <div class="contact__sidebar">
                    <div class="card contact__info">
                        <h3 class="card__title">"Contact Information"</h3>
                        <div class="contact__info-row">
                            <span class="contact__info-label">"Email"</span>
                            <a href=format!("mailto:{CONTACT_EMAIL}") class="contact__info-value">
                                {CONTACT_EMAIL}
                            </a>
                        </div>
                        <div class="contact__info-row">
                            <span class="contact__info-label">"Location"</span>
                            <span class="contact__info-value">{LOCATION}</span>
                        </div>

                        <h4 class="contact__connect-title">"Connect With Me"</h4>
                        <div class="contact__socials">
                            {social_links()
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="contact__social"
                                            title=link.name
                                        >
                                            <span class=format!(
                                                "contact__social-icon contact__social-icon--{}",
                                                link.icon,
                                            )></span>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="card contact__map">
                        <h3 class="card__title">"Currently Based In"</h3>
                        <p class="card__subtle">{LOCATION}</p>
                        <div class="contact__map-grid" aria-hidden="true">
                            {MAP_POINTS
                                .into_iter()
                                .map(|(left, top, size, opacity)| {
                                    view! {
                                        <span
                                            class="contact__map-point"
                                            style=format!(
                                                "left:{left}%;top:{top}%;width:{size}px;height:{size}px;opacity:{opacity};",
                                            )
                                        ></span>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            <span class="contact__map-ping"></span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
