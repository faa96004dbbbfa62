//! Publications page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::awards_publications::AwardsPublications;

#[component]
pub fn PublicationsPage() -> impl IntoView {
    view! {
        <Title text="Awards & Publications | AI Engineer Portfolio"/>
        <div class="page">
            <AwardsPublications/>
        </div>
    }
}
