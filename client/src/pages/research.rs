//! Research page: signal-flow animation above the experience panel.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::experience_panel::ExperiencePanel;
use crate::components::flow_canvas::FlowCanvas;

#[component]
pub fn ResearchPage() -> impl IntoView {
    view! {
        <Title text="Research Experience | AI Engineer Portfolio"/>
        <div class="page">
            <div class="flow-panel">
                <FlowCanvas class="flow-panel__canvas"/>
            </div>
            <ExperiencePanel/>
        </div>
    }
}
