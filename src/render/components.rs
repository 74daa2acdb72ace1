//! Content components: small pure functions from a content fragment to markup.
//!
//! Edge policy, shared by all three: missing or empty OPTIONAL input omits
//! the corresponding block entirely (no empty chrome), while a reference
//! that cannot be resolved is an authoring bug and fails the render.

use crate::core::content::{CarItem, EvidenceItem, Store};
use crate::core::error::FolioError;
use maud::{Markup, html};

/// Alt text used when an image proof ships without a caption.
const DEFAULT_EVIDENCE_ALT: &str = "evidence";

/// Separator joining KPI strings into the summary line.
const KPI_SEPARATOR: &str = " · ";

/// Render one Context-Actions-Result block.
///
/// The actions list preserves input order and count; an empty `actions`
/// renders an empty list, not an omitted section. The KPI line appears only
/// when `kpis` is present and non-empty.
pub fn car_item(item: &CarItem) -> Markup {
    html! {
        article class="car" {
            h3 { "Context" }
            p { (item.context) }
            h3 { "Actions" }
            ul {
                @for action in &item.actions {
                    li { (action) }
                }
            }
            h3 { "Result" }
            p { (item.result) }
            @if let Some(kpis) = item.kpis.as_deref().filter(|k| !k.is_empty()) {
                p class="kpis" {
                    strong { "KPIs:" }
                    " "
                    (kpis.join(KPI_SEPARATOR))
                }
            }
        }
    }
}

/// Render the evidence gallery, or `None` when there is nothing to show.
///
/// Entries keep input order and dispatch on the media tag: images carry the
/// caption as alt text (falling back to a fixed default), videos render a
/// playable control surface. A caption line follows the media for both.
pub fn evidence_gallery(items: &[EvidenceItem]) -> Option<Markup> {
    if items.is_empty() {
        return None;
    }
    Some(html! {
        section aria-label="Evidence" {
            h3 { "Evidence" }
            ul class="gallery" {
                @for item in items {
                    li {
                        @match item {
                            EvidenceItem::Image { src, caption } => {
                                img src=(src) alt=(caption.as_deref().unwrap_or(DEFAULT_EVIDENCE_ALT));
                            }
                            EvidenceItem::Video { src, .. } => {
                                video controls src=(src) {}
                            }
                        }
                        @if let Some(caption) = item.caption() {
                            figcaption { (caption) }
                        }
                    }
                }
            }
        }
    })
}

/// Render the footnote list, or `None` when no ids are given.
///
/// Every id is resolved against the registry BEFORE any markup is emitted:
/// one unresolvable id fails the whole block with zero partial output, so a
/// broken citation can never ship silently. Duplicates render as given.
pub fn source_footnotes(store: &Store, ids: &[String]) -> Result<Option<Markup>, FolioError> {
    if ids.is_empty() {
        return Ok(None);
    }
    let entries = ids
        .iter()
        .map(|id| store.source(id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(html! {
        section aria-labelledby="sources-title" {
            h3 id="sources-title" { "Footnotes" }
            ol {
                @for entry in &entries {
                    li {
                        a href=(entry.url) target="_blank" rel="noreferrer" { (entry.label) }
                    }
                }
            }
        }
    }))
}
