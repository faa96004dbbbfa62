//! Education page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::education_panel::EducationPanel;

#[component]
pub fn EducationPage() -> impl IntoView {
    view! {
        <Title text="Education | AI Engineer Portfolio"/>
        <div class="page">
            <EducationPanel/>
        </div>
    }
}
