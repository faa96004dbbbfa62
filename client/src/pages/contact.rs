//! Contact page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact | AI Engineer Portfolio"/>
        <div class="page">
            <ContactForm/>
        </div>
    }
}
