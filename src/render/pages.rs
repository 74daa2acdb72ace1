//! Page renderers: one pure function per route, each a projection of its
//! content document through the shared section/component primitives.
//!
//! No page holds state or branches beyond "does this optional field exist".
//! Pages that resolve footnotes return `Result` - an unresolved source id
//! aborts that page's render rather than shipping a broken citation.

use crate::core::content::Store;
use crate::core::error::FolioError;
use crate::render::components::{car_item, evidence_gallery, source_footnotes};
use crate::render::section::section;
use maud::{Markup, html};

pub fn home(store: &Store) -> Markup {
    let doc = store.home();
    section(
        &doc.title,
        Some(&doc.tagline),
        html! {
            ul class="facts" {
                li { strong { "Dates: " } (doc.internship.dates) }
                li { strong { "Duration: " } (doc.internship.length) }
                li { strong { "Company: " } (doc.internship.company) }
                li { strong { "Tutor: " } (doc.internship.tutor) }
            }
        },
    )
}

pub fn company(store: &Store) -> Markup {
    let doc = store.company();
    section(
        "Company Profile",
        Some("Activity, market, and practices"),
        html! {
            (section("Activity & Business Model", None, html! { p { (doc.activity) } }))
            (section("Sector", None, html! { p { (doc.sector) } }))
            (section("History", None, html! { p { (doc.history) } }))
            (section("Organization", None, html! { p { (doc.organization) } }))
            (section("Practices & CSR", None, html! { p { (doc.practices) } }))
        },
    )
}

pub fn experience(store: &Store) -> Result<Markup, FolioError> {
    let doc = store.experience();
    let footnotes = source_footnotes(store, &doc.sources)?;
    Ok(section(
        "Professional Experience",
        Some("Missions, responsibilities, and outcomes"),
        html! {
            @for item in &doc.items {
                (car_item(item))
            }
            @if let Some(gallery) = evidence_gallery(&doc.proofs) {
                (gallery)
            }
            @if let Some(footnotes) = &footnotes {
                (footnotes)
            }
        },
    ))
}

pub fn critical_thinking(store: &Store) -> Result<Markup, FolioError> {
    let doc = store.critical_thinking();
    let footnotes = source_footnotes(store, &doc.sources)?;
    Ok(section(
        "Critical Thinking",
        Some("Analytical reflection on the internship"),
        html! {
            (section("What I Observed", None, html! { p { (doc.observed) } }))
            (section("Assumptions Going In", None, html! { p { (doc.assumptions) } }))
            (section("How They Held Up", None, html! { p { (doc.validation) } }))
            (section("Pros & Cons", None, html! { p { (doc.proscons) } }))
            @if let Some(footnotes) = &footnotes {
                (footnotes)
            }
        },
    ))
}

pub fn on_this_subject(store: &Store) -> Result<Markup, FolioError> {
    let doc = store.on_this_subject();
    let footnotes = source_footnotes(store, &doc.sources)?;
    Ok(section(
        "On This Subject",
        Some("Broadening perspectives beyond the internship"),
        html! {
            p {
                a href=(doc.cv.url) target="_blank" rel="noreferrer" { (doc.cv.label) }
            }
            p { (doc.career) }
            @if let Some(footnotes) = &footnotes {
                (footnotes)
            }
        },
    ))
}

/// Placeholder for paths outside the route table. The router recovers
/// unknown routes locally instead of leaving the content slot empty.
pub fn not_found(path: &str) -> Markup {
    section(
        "Page Not Found",
        None,
        html! {
            p { "No page exists at " code { (path) } "." }
            p { a href="/" { "Back to the overview" } }
        },
    )
}
