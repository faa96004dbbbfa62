//! Skills page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::skills_panel::SkillsPanel;

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Title text="Skills | AI Engineer Portfolio"/>
        <div class="page">
            <SkillsPanel/>
        </div>
    }
}
