//! Layout chrome: the document shell, navigation bar, and footer.
//!
//! Chrome is content-free and identical on every route; only the active
//! navigation link varies, by string-comparing the current path against the
//! route table. The current path is owned by the router and passed down -
//! the navbar never tracks it independently.

use crate::router::NAV_ITEMS;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Minimal base styling shipped inline so the built site is a single file
/// per route with no asset pipeline.
const BASE_CSS: &str = "\
body{font-family:system-ui,sans-serif;margin:0;color:#1e293b;line-height:1.6}\
nav{display:flex;gap:1rem;align-items:baseline;padding:1rem 1.5rem;border-bottom:1px solid #e2e8f0}\
nav .brand{font-weight:700;margin-right:auto;text-decoration:none;color:inherit}\
nav a.active{color:#2563eb;font-weight:600}\
main{max-width:48rem;margin:0 auto;padding:1.5rem}\
footer{border-top:1px solid #e2e8f0;padding:1.5rem;text-align:center;color:#64748b;font-size:.875rem}\
.skip-link{position:absolute;left:-9999px}\
.gallery{list-style:none;padding:0}\
.gallery img,.gallery video{max-width:100%}";

pub fn navbar(current_path: Option<&str>) -> Markup {
    html! {
        nav {
            a class="brand" href="/" { "Internship Report" }
            @for item in NAV_ITEMS.iter() {
                a href=(item.path)
                    class=[(current_path == Some(item.path)).then_some("active")] {
                    (item.label)
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer role="contentinfo" {
            p { "Academic Project for NEOMA Business School • GBBA Year 3 Professional Experience Report" }
            p { "© 2025 Internship Feedback Website" }
        }
    }
}

/// Wrap a page body in the full HTML document: head, skip link, navbar,
/// main mount point, footer.
pub fn page_shell(title: &str, current_path: Option<&str>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — Internship Report" }
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                a class="skip-link" href="#main" { "Skip to content" }
                (navbar(current_path))
                main id="main" role="main" { (body) }
                (footer())
            }
        }
    }
}
