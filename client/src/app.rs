//! Application shell and router.
//!
//! `shell` produces the full HTML document for SSR; `App` is the reactive
//! root shared by SSR and hydration. Chrome state (`UiState`) is provided
//! here so the header and pages read one source of truth.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::pages::contact::ContactPage;
use crate::pages::education::EducationPage;
use crate::pages::home::HomePage;
use crate::pages::projects::ProjectsPage;
use crate::pages::publications::PublicationsPage;
use crate::pages::research::ResearchPage;
use crate::pages::skills::SkillsPage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML document shell rendered by the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta
                    name="description"
                    content="Personal portfolio of an AI engineer: projects, research, publications, and contact."
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Reactive application root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Apply the stored theme once the browser takes over.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="AI Engineer Portfolio"/>
        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/projects") view=ProjectsPage/>
                    <Route path=path!("/skills") view=SkillsPage/>
                    <Route path=path!("/research") view=ResearchPage/>
                    <Route path=path!("/publications") view=PublicationsPage/>
                    <Route path=path!("/education") view=EducationPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--missing">
            <h1>"Page not found"</h1>
            <p class="card__subtle">"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn--primary">
                "Back home"
            </a>
        </div>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>
                {content::profile::SITE_NAME}
                {content::profile::SITE_SUFFIX}
                " — AI Engineer Portfolio"
            </span>
            <nav class="site-footer__nav">
                <a href="/education">"Education"</a>
                <a href="/publications">"Publications"</a>
                <a href="/contact">"Contact"</a>
            </nav>
        </footer>
    }
}
