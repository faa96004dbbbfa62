//! Landing page: hero plus teaser sections linking into every other page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use content::projects::recent_projects;
use content::publications::{publications, statistics};
use content::skills::featured_skills;

use crate::components::hero::Hero;

#[component]
pub fn HomePage() -> impl IntoView {
    let (journals, conferences, fields) = statistics(&publications());
    let featured: Vec<_> = recent_projects().into_iter().filter(|p| p.featured).take(3).collect();

    view! {
        <Title text="AI Engineer Portfolio"/>
        <Hero/>

        <section class="teaser teaser--tinted">
            <h2 class="teaser__title">"Expert in AI Engineering"</h2>
            <p class="teaser__blurb">
                "Specialized in designing, training, and evaluating transformer-based generative \
                 language and vision models with extensive research experience."
            </p>
            <div class="chip-row teaser__chips">
                {featured_skills()
                    .into_iter()
                    .map(|skill| view! { <span class="chip chip--large">{skill}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <A href="/skills" attr:class="btn btn--primary">
                "View My Full Skillset"
            </A>
        </section>

        <section class="teaser">
            <h2 class="teaser__title">"Key Projects & Implementations"</h2>
            <p class="teaser__blurb">
                "From cutting-edge AI research to practical hardware solutions, bridging theory \
                 and application."
            </p>
            <div class="teaser__cards">
                {featured
                    .into_iter()
                    .map(|project| {
                        view! {
                            <div class="card teaser__card">
                                <span class=format!("badge badge--{}", project.color)>
                                    {project.icon}
                                </span>
                                <h3 class="card__title">{project.title}</h3>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <A href="/projects" attr:class="btn btn--primary">
                "Explore All Projects"
            </A>
        </section>

        <section class="teaser teaser--tinted">
            <h2 class="teaser__title">"Research & Teaching Experience"</h2>
            <p class="teaser__blurb">
                "Over a decade across academia and industry: leading AI research groups, \
                 supervising theses, and consulting on applied machine learning."
            </p>
            <A href="/research" attr:class="btn btn--primary">
                "See Experience"
            </A>
        </section>

        <section class="teaser">
            <h2 class="teaser__title">"Academic Background"</h2>
            <p class="teaser__blurb">
                "Ph.D. research in AI engineering, graduate work in computer science, and a \
                 foundation in electrical engineering."
            </p>
            <A href="/education" attr:class="btn btn--primary">
                "View Education"
            </A>
        </section>

        <section class="teaser teaser--tinted">
            <h2 class="teaser__title">"Publications & Awards"</h2>
            <p class="teaser__blurb">
                {format!(
                    "{journals} journal articles and {conferences} conference papers across \
                     {fields} research fields, alongside national academic honors.",
                )}
            </p>
            <A href="/publications" attr:class="btn btn--primary">
                "Browse Publications"
            </A>
        </section>
    }
}
