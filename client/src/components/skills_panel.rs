//! Skills feature component: category selector, proficiency meters, and
//! the technical achievement highlights.

use leptos::prelude::*;

use content::skills::{skill_categories, technical_achievements};

#[component]
pub fn SkillsPanel() -> impl IntoView {
    let categories = skill_categories();
    let active = RwSignal::new(0_usize);

    let meters = {
        let categories = categories.clone();
        move || {
            let index = active.get().min(categories.len().saturating_sub(1));
            let category = categories[index].clone();
            category
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class="skills__meter">
                            <div class="skills__meter-label">
                                <span>{skill.name}</span>
                                <span class="card__subtle">{format!("{}%", skill.level)}</span>
                            </div>
                            <div class="skills__meter-track">
                                <div
                                    class="skills__meter-fill"
                                    style=format!("width:{}%", skill.level)
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        }
    };

    view! {
        <section class="skills" id="skills">
            <div class="section-heading">
                <h2 class="section-heading__title">"Technical Skills"</h2>
                <p class="section-heading__blurb">
                    "Specialized in designing, training, and evaluating transformer-based \
                     generative language and vision models."
                </p>
            </div>

            <div class="skills__layout">
                <div class="skills__categories">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            let name = category.name;
                            let icon = category.icon;
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == index {
                                            "skills__category skills__category--active"
                                        } else {
                                            "skills__category"
                                        }
                                    }
                                    on:click=move |_| active.set(index)
                                >
                                    <span class="skills__category-icon">{icon}</span>
                                    {name}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="card skills__meters">{meters}</div>
            </div>

            <h3 class="skills__achievements-title">"Technical Achievements"</h3>
            <div class="skills__achievements">
                {technical_achievements()
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="card skills__achievement">
                                <span class="skills__achievement-icon">{item.icon}</span>
                                <h4 class="card__title">{item.title}</h4>
                                <p class="card__body">{item.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
