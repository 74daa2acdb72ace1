//! Path-to-page routing.
//!
//! `NAV_ITEMS` is the single source of truth for both the navigation menu
//! and the route table, so the two can never drift apart. The `Router` is a
//! five-state machine (plus an implicit no-match state) that retains only
//! the current path; pages themselves are stateless.

use crate::core::content::Store;
use crate::core::error::FolioError;
use crate::render::{layout, pages};
use maud::Markup;

/// A `{path, label}` pair defining one menu entry and one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

/// The fixed, ordered navigation menu. Index-aligned with [`Route::ALL`].
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        path: "/",
        label: "Home",
    },
    NavItem {
        path: "/company",
        label: "Company",
    },
    NavItem {
        path: "/experience",
        label: "Experience",
    },
    NavItem {
        path: "/critical-thinking",
        label: "Critical Thinking",
    },
    NavItem {
        path: "/on-this-subject",
        label: "On This Subject",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Company,
    Experience,
    CriticalThinking,
    OnThisSubject,
}

impl Route {
    /// All routes, in navigation order. Discriminants index into
    /// [`NAV_ITEMS`].
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Company,
        Route::Experience,
        Route::CriticalThinking,
        Route::OnThisSubject,
    ];

    pub fn match_path(path: &str) -> Option<Route> {
        NAV_ITEMS
            .iter()
            .position(|item| item.path == path)
            .map(|i| Route::ALL[i])
    }

    pub fn path(self) -> &'static str {
        NAV_ITEMS[self as usize].path
    }

    pub fn label(self) -> &'static str {
        NAV_ITEMS[self as usize].label
    }

    /// Render this route's page body from the store. Pure: the same store
    /// always yields identical markup.
    pub fn render(self, store: &Store) -> Result<Markup, FolioError> {
        match self {
            Route::Home => Ok(pages::home(store)),
            Route::Company => Ok(pages::company(store)),
            Route::Experience => pages::experience(store),
            Route::CriticalThinking => pages::critical_thinking(store),
            Route::OnThisSubject => pages::on_this_subject(store),
        }
    }
}

/// The site map: (path, label) in navigation order.
pub fn site_map() -> Vec<(&'static str, &'static str)> {
    NAV_ITEMS.iter().map(|i| (i.path, i.label)).collect()
}

/// Result of one navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Already on this path; nothing is remounted.
    Unchanged,
    /// A known route was mounted; the full document is attached.
    Rendered(String),
    /// No route matched; the not-found document is attached.
    NotFound(String),
}

/// Routing state machine. Owns only the current path; transitions are
/// processed one at a time, and re-entering the current path is a no-op.
pub struct Router<'a> {
    store: &'a Store,
    current: Option<String>,
}

impl<'a> Router<'a> {
    pub fn new(store: &'a Store) -> Self {
        Router {
            store,
            current: None,
        }
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Process one navigation event. A failed page render (unresolved
    /// footnote) propagates out and leaves the previous state in place.
    pub fn navigate(&mut self, path: &str) -> Result<Outcome, FolioError> {
        if self.current.as_deref() == Some(path) {
            return Ok(Outcome::Unchanged);
        }
        let outcome = match Route::match_path(path) {
            Some(route) => {
                let body = route.render(self.store)?;
                let doc = layout::page_shell(route.label(), Some(path), body);
                Outcome::Rendered(doc.into_string())
            }
            None => {
                let doc = layout::page_shell("Page Not Found", Some(path), pages::not_found(path));
                Outcome::NotFound(doc.into_string())
            }
        };
        self.current = Some(path.to_string());
        Ok(outcome)
    }
}
