//! Education page feature component: degree timeline, coursework groups,
//! and certifications behind a three-way tab.

use leptos::prelude::*;

use content::education::{certifications, course_categories, education_entries};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Education,
    Courses,
    Certifications,
}

const TABS: [(Tab, &str); 3] = [
    (Tab::Education, "Education"),
    (Tab::Courses, "Courses"),
    (Tab::Certifications, "Certifications"),
];

#[component]
pub fn EducationPanel() -> impl IntoView {
    let tab = RwSignal::new(Tab::Education);

    view! {
        <section class="education" id="education">
            <div class="section-heading">
                <h2 class="section-heading__title">"Academic Background"</h2>
                <p class="section-heading__blurb">
                    "Educational qualifications, relevant coursework, and professional \
                     certifications that have shaped my expertise in AI engineering and research."
                </p>
            </div>

            <div class="tab-row">
                {TABS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == value { "tab tab--active" } else { "tab" }
                                }
                                on:click=move |_| tab.set(value)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || tab.get() == Tab::Education>
                <div class="education__timeline">
                    {education_entries()
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="card education__entry">
                                    <div class="education__entry-period">{entry.period}</div>
                                    <h3 class="card__title">{entry.degree}</h3>
                                    <p class="card__subtle">
                                        {entry.institution} " · " {entry.location}
                                    </p>
                                    <p class="card__body">{entry.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <Show when=move || tab.get() == Tab::Courses>
                <div class="education__courses">
                    {course_categories()
                        .into_iter()
                        .map(|group| {
                            view! {
                                <div class="card education__course-group">
                                    <h3 class="card__title">
                                        <span class=format!("badge badge--{}", group.color)>
                                            {group.icon}
                                        </span>
                                        {group.category}
                                    </h3>
                                    <ul class="education__course-list">
                                        {group
                                            .courses
                                            .iter()
                                            .map(|course| view! { <li>{*course}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <Show when=move || tab.get() == Tab::Certifications>
                <div class="education__certifications">
                    {certifications()
                        .into_iter()
                        .map(|cert| {
                            view! {
                                <div class="card education__certification">
                                    <h3 class="card__title">{cert.name}</h3>
                                    <p class="card__subtle">{cert.organization} " · " {cert.date}</p>
                                    <p class="education__credential">
                                        "Credential: " {cert.credential}
                                    </p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </section>
    }
}
