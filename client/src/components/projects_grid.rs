//! Projects feature component: era tabs, category pills, and the card grid
//! over the merged project/supervision dataset.

use leptos::prelude::*;

use content::projects::{Project, ProjectCategory, ProjectTab, filtered};

#[component]
pub fn ProjectsGrid() -> impl IntoView {
    let tab = RwSignal::new(ProjectTab::Recent);
    let category = RwSignal::new(ProjectCategory::All);

    let visible = move || filtered(tab.get(), category.get());

    view! {
        <section class="projects" id="projects">
            <div class="section-heading">
                <h2 class="section-heading__title">"Projects Portfolio"</h2>
                <p class="section-heading__blurb">
                    "A showcase of AI, machine learning, and hardware engineering projects \
                     spanning from cutting-edge transformer architectures to innovative embedded \
                     systems solutions."
                </p>
            </div>

            <div class="tab-row">
                <button
                    class=move || tab_class(tab.get() == ProjectTab::Recent)
                    on:click=move |_| tab.set(ProjectTab::Recent)
                >
                    "Recent Key Projects"
                </button>
                <button
                    class=move || tab_class(tab.get() == ProjectTab::Past)
                    on:click=move |_| tab.set(ProjectTab::Past)
                >
                    "Past Projects & Supervision"
                </button>
            </div>

            <div class="pill-row projects__categories">
                {ProjectCategory::all()
                    .into_iter()
                    .map(|value| {
                        view! {
                            <button
                                class=move || pill_class(category.get() == value)
                                on:click=move |_| category.set(value)
                            >
                                {value.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="projects__grid">
                {move || visible().into_iter().map(project_card).collect::<Vec<_>>()}
            </div>

            <Show when=move || tab.get() == ProjectTab::Recent>
                <div class="card projects__callout">
                    <div class="projects__callout-icon">"🚀"</div>
                    <h3 class="card__title">"AI Research & Engineering Focus"</h3>
                    <p class="card__body">
                        "My recent work focuses on transformer architectures, large language \
                         models, and performance optimization techniques that push the boundaries \
                         of what's possible with modern AI systems."
                    </p>
                </div>
            </Show>
            <Show when=move || tab.get() == ProjectTab::Past>
                <div class="card projects__callout">
                    <div class="projects__callout-icon">"💡"</div>
                    <h3 class="card__title">"Interdisciplinary Engineering Background"</h3>
                    <p class="card__body">
                        "With a foundation in hardware design, embedded systems, and IoT \
                         solutions, I bring a unique interdisciplinary perspective to my AI and \
                         machine learning work."
                    </p>
                </div>
            </Show>
        </section>
    }
}

/// One card in the grid. Supervision entries get a "Supervised:" byline
/// instead of a description.
fn project_card(project: Project) -> impl IntoView {
    let supervised = project
        .student
        .zip(project.year)
        .map(|(student, year)| format!("Supervised: {student} ({year})"));
    let card_class = if project.featured {
        "card projects__card projects__card--featured"
    } else {
        "card projects__card"
    };

    view! {
        <div class=card_class>
            <div class="projects__card-head">
                <span class=format!("badge badge--{}", project.color)>{project.icon}</span>
                <div>
                    <h3 class="card__title">{project.title}</h3>
                    {supervised.map(|line| view! { <p class="card__subtle">{line}</p> })}
                </div>
            </div>
            <Show when=move || !project.description.is_empty()>
                <p class="card__body projects__card-body">{project.description}</p>
            </Show>
            <div class="chip-row projects__card-tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="chip">{*tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <a href=project.link class="projects__card-link">
                "View details →"
            </a>
        </div>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab tab--active" } else { "tab" }
}

fn pill_class(active: bool) -> &'static str {
    if active { "pill pill--active" } else { "pill" }
}
