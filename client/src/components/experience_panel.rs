//! Research page feature component: research/professional experience tabs
//! with one expandable entry at a time, plus the core competency chips.

use leptos::prelude::*;

use content::experience::{professional_experiences, research_experiences};
use content::skills::skill_categories;

/// Which experience list is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Research,
    Professional,
}

#[component]
pub fn ExperiencePanel() -> impl IntoView {
    let tab = RwSignal::new(Tab::Research);
    // First entry starts expanded.
    let expanded = RwSignal::new(Some(0_usize));

    let select_tab = move |next: Tab| {
        tab.set(next);
        expanded.set(Some(0));
    };
    let toggle = move |index: usize| {
        expanded.update(|e| *e = if *e == Some(index) { None } else { Some(index) });
    };

    view! {
        <section class="experience" id="experience">
            <div class="section-heading">
                <h2 class="section-heading__title">"Research & Professional Experience"</h2>
                <p class="section-heading__blurb">
                    "A career spanning academic research, teaching, and industry collaboration."
                </p>
            </div>

            <div class="tab-row">
                <button
                    class=move || tab_class(tab.get() == Tab::Research)
                    on:click=move |_| select_tab(Tab::Research)
                >
                    "Research Experience"
                </button>
                <button
                    class=move || tab_class(tab.get() == Tab::Professional)
                    on:click=move |_| select_tab(Tab::Professional)
                >
                    "Professional Experience"
                </button>
            </div>

            <Show when=move || tab.get() == Tab::Research>
                <div class="experience__list">
                    {research_experiences()
                        .into_iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            let is_open = move || expanded.get() == Some(index);
                            let duration = exp.duration.map_or_else(
                                || if exp.current { "Current".to_owned() } else { String::new() },
                                str::to_owned,
                            );
                            view! {
                                <div class="card experience__item">
                                    <div class="experience__item-head" on:click=move |_| toggle(index)>
                                        <span class=format!("badge badge--{}", exp.color)>{exp.icon}</span>
                                        <div class="experience__item-meta">
                                            <h3 class="card__title">{exp.title}</h3>
                                            <p class="card__subtle">{exp.organization}</p>
                                        </div>
                                        <span class="experience__duration">{duration}</span>
                                    </div>
                                    <Show when=is_open>
                                        <ul class="experience__details">
                                            {exp.details
                                                .iter()
                                                .map(|d| view! { <li>{*d}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                        <div class="chip-row">
                                            {exp.technologies
                                                .iter()
                                                .map(|t| view! { <span class="chip">{*t}</span> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <Show when=move || tab.get() == Tab::Professional>
                <div class="experience__list">
                    {professional_experiences()
                        .into_iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            let is_open = move || expanded.get() == Some(index);
                            view! {
                                <div class="card experience__item">
                                    <div class="experience__item-head" on:click=move |_| toggle(index)>
                                        <span class=format!("badge badge--{}", exp.color)>{exp.icon}</span>
                                        <div class="experience__item-meta">
                                            <h3 class="card__title">{exp.title}</h3>
                                            <p class="card__subtle">{exp.organization}</p>
                                            <p class="card__subtle">{exp.department}</p>
                                        </div>
                                        <span class="experience__duration">
                                            {exp.duration} " · " {exp.years}
                                        </span>
                                    </div>
                                    <Show when=is_open>
                                        <ul class="experience__details">
                                            {exp.responsibilities
                                                .iter()
                                                .map(|r| view! { <li>{*r}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <h3 class="experience__competencies-title">"Core Competencies"</h3>
            <div class="experience__competencies">
                {skill_categories()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div class="card experience__competency">
                                <h4 class="card__title">
                                    {category.icon} " " {category.name}
                                </h4>
                                <div class="chip-row">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|s| view! { <span class="chip">{s.name}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab tab--active" } else { "tab" }
}
