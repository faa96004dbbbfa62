//! Awards & Publications feature component.
//!
//! Two tabs: the award card grid and the publication list. The publication
//! list owns a type filter and a sort key; the actual transform lives in
//! `content::publications` so it stays testable off the DOM. Selecting a
//! publication expands an inline detail panel; switching tabs resets it.

use leptos::prelude::*;

use content::awards::awards;
use content::publications::{PubFilter, PubKind, PubSort, filter_and_sort, publications, statistics};

/// Which tab is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Section {
    #[default]
    Awards,
    Publications,
}

#[component]
pub fn AwardsPublications() -> impl IntoView {
    let section = RwSignal::new(Section::Awards);
    let selected = RwSignal::new(None::<usize>);
    let filter = RwSignal::new(PubFilter::All);
    let sort = RwSignal::new(PubSort::Year);

    let select_section = move |next: Section| {
        section.set(next);
        selected.set(None);
    };

    let visible = move || filter_and_sort(&publications(), filter.get(), sort.get());
    let (journals, conferences, fields) = statistics(&publications());

    let filter_pill = move |value: PubFilter, label: &'static str| {
        view! {
            <button
                class=move || pill_class(filter.get() == value)
                on:click=move |_| {
                    filter.set(value);
                    selected.set(None);
                }
            >
                {label}
            </button>
        }
    };
    let sort_pill = move |value: PubSort, label: &'static str| {
        view! {
            <button class=move || pill_class(sort.get() == value) on:click=move |_| sort.set(value)>
                {label}
            </button>
        }
    };

    view! {
        <section class="pubs" id="awards-publications">
            <div class="section-heading">
                <h2 class="section-heading__title">"Awards & Publications"</h2>
                <p class="section-heading__blurb">
                    "Academic recognitions and research contributions in the field of artificial \
                     intelligence and engineering."
                </p>
            </div>

            <div class="tab-row">
                <button
                    class=move || tab_class(section.get() == Section::Awards)
                    on:click=move |_| select_section(Section::Awards)
                >
                    "Awards & Honors"
                </button>
                <button
                    class=move || tab_class(section.get() == Section::Publications)
                    on:click=move |_| select_section(Section::Publications)
                >
                    "Publications"
                </button>
            </div>

            <Show when=move || section.get() == Section::Awards>
                <div class="pubs__awards-grid">
                    {awards()
                        .into_iter()
                        .map(|award| {
                            view! {
                                <div class="card pubs__award">
                                    <span class=format!("badge badge--{}", award.color)>
                                        {award.icon}
                                    </span>
                                    <div>
                                        <h3 class="card__title">{award.title}</h3>
                                        <p class="card__body">{award.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="card pubs__callout">
                    <div class="pubs__callout-icon">"🎖️"</div>
                    <h3 class="card__title">"Academic Excellence"</h3>
                    <p class="card__body">
                        "Recognized at national and institutional levels for academic and research \
                         excellence, including the highest national honors in Bangladesh for \
                         undergraduate achievement."
                    </p>
                </div>
            </Show>

            <Show when=move || section.get() == Section::Publications>
                <div class="pubs__controls">
                    <div class="pill-row">
                        {filter_pill(PubFilter::All, "All Publications")}
                        {filter_pill(PubFilter::Journal, "Journal Papers")}
                        {filter_pill(PubFilter::Conference, "Conference Papers")}
                    </div>
                    <div class="pill-row">
                        {sort_pill(PubSort::Year, "Sort by Year")}
                        {sort_pill(PubSort::Field, "Sort by Field")}
                    </div>
                </div>

                <div class="pubs__list">
                    {move || {
                        visible()
                            .into_iter()
                            .enumerate()
                            .map(|(index, publication)| {
                                let expanded = move || selected.get() == Some(index);
                                let kind_badge = match publication.kind {
                                    PubKind::Journal => "📰",
                                    PubKind::Conference => "🎤",
                                };
                                let kind_color = match publication.kind {
                                    PubKind::Journal => "violet",
                                    PubKind::Conference => "emerald",
                                };
                                let venue_label = match publication.kind {
                                    PubKind::Journal => "Journal:",
                                    PubKind::Conference => "Conference:",
                                };
                                let doi_url = publication.doi_url();
                                let summary = format!(
                                    "{} ({})",
                                    publication.short_authors(),
                                    publication.year,
                                );
                                let venue_line = publication.volume.map_or_else(
                                    || publication.venue.to_owned(),
                                    |volume| format!("{}, {volume}", publication.venue),
                                );
                                view! {
                                    <div class="card pubs__item">
                                        <div
                                            class="pubs__item-head"
                                            on:click=move |_| {
                                                selected
                                                    .update(|s| {
                                                        *s = if *s == Some(index) { None } else { Some(index) };
                                                    });
                                            }
                                        >
                                            <span class=format!("badge badge--{kind_color}")>
                                                {kind_badge}
                                            </span>
                                            <div class="pubs__item-meta">
                                                <h3 class="card__title">{publication.title}</h3>
                                                <p class="card__subtle">{summary}</p>
                                                <div class="chip-row">
                                                    <span class="chip">{publication.field}</span>
                                                    <span class="chip chip--kind">
                                                        {publication.kind.label()}
                                                    </span>
                                                </div>
                                            </div>
                                            <span class=move || {
                                                if expanded() {
                                                    "pubs__chevron pubs__chevron--open"
                                                } else {
                                                    "pubs__chevron"
                                                }
                                            }>"▾"</span>
                                        </div>

                                        <Show when=expanded>
                                            <div class="pubs__item-detail">
                                                <h4>"Authors:"</h4>
                                                <p>{publication.authors}</p>
                                                <h4>{venue_label}</h4>
                                                <p>{venue_line.clone()}</p>
                                                {doi_url
                                                    .clone()
                                                    .map(|url| {
                                                        view! {
                                                            <div>
                                                                <h4>"DOI:"</h4>
                                                                <a
                                                                    href=url.clone()
                                                                    target="_blank"
                                                                    rel="noopener noreferrer"
                                                                    class="pubs__doi"
                                                                >
                                                                    {url.clone()}
                                                                </a>
                                                            </div>
                                                        }
                                                    })}
                                            </div>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="card pubs__stats">
                    <h3 class="card__title">"Publication Statistics"</h3>
                    <div class="pubs__stats-grid">
                        <div class="pubs__stat">
                            <span class="pubs__stat-icon">"📰"</span>
                            <span class="pubs__stat-count">{journals}</span>
                            <span class="card__subtle">"Journal Articles"</span>
                        </div>
                        <div class="pubs__stat">
                            <span class="pubs__stat-icon">"🎤"</span>
                            <span class="pubs__stat-count">{conferences}</span>
                            <span class="card__subtle">"Conference Papers"</span>
                        </div>
                        <div class="pubs__stat">
                            <span class="pubs__stat-icon">"🔬"</span>
                            <span class="pubs__stat-count">{fields}</span>
                            <span class="card__subtle">"Research Fields"</span>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab tab--active" } else { "tab" }
}

fn pill_class(active: bool) -> &'static str {
    if active { "pill pill--active" } else { "pill" }
}
