//! Projects page: the 3D neural scene panel above the project grid.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::orbit_canvas::OrbitCanvas;
use crate::components::projects_grid::ProjectsGrid;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects | AI Engineer Portfolio"/>
        <div class="page">
            <div class="section-heading">
                <h1 class="section-heading__title">"Neural Network Architecture"</h1>
                <p class="section-heading__blurb">
                    "Explore this 3D visualization of a neural network. This represents the \
                     fundamental architecture behind many of my AI and machine learning projects."
                </p>
            </div>
            <OrbitCanvas/>
            <ProjectsGrid/>
        </div>
    }
}
