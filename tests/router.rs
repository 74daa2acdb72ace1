//! Route table and router state-machine tests.

use folio::core::content::Store;
use folio::router::{NAV_ITEMS, Outcome, Route, Router, site_map};

fn store() -> Store {
    Store::load().expect("embedded content must load")
}

/// The h1 each route's page must carry - and no other route's page may.
const PAGE_MARKERS: [(&str, &str); 5] = [
    ("/", "<h1>Internship Overview</h1>"),
    ("/company", "<h1>Company Profile</h1>"),
    ("/experience", "<h1>Professional Experience</h1>"),
    ("/critical-thinking", "<h1>Critical Thinking</h1>"),
    ("/on-this-subject", "<h1>On This Subject</h1>"),
];

#[test]
fn each_known_path_renders_exactly_its_page() {
    let store = store();
    for (path, marker) in PAGE_MARKERS {
        let mut router = Router::new(&store);
        let doc = match router.navigate(path).expect("navigate") {
            Outcome::Rendered(doc) => doc,
            other => panic!("{path}: expected Rendered, got {other:?}"),
        };
        assert!(doc.contains(marker), "{path}: missing {marker}");
        for (other_path, other_marker) in PAGE_MARKERS {
            if other_path != path {
                assert!(
                    !doc.contains(other_marker),
                    "{path}: leaked {other_path}'s page"
                );
            }
        }
    }
}

#[test]
fn active_nav_link_matches_the_current_path() {
    let store = store();
    for item in NAV_ITEMS.iter() {
        let mut router = Router::new(&store);
        let doc = match router.navigate(item.path).expect("navigate") {
            Outcome::Rendered(doc) => doc,
            other => panic!("expected Rendered, got {other:?}"),
        };
        assert_eq!(doc.matches(r#"class="active""#).count(), 1, "{}", item.path);
        assert!(doc.contains(&format!(r#"href="{}" class="active""#, item.path)));
    }
}

#[test]
fn unknown_path_renders_not_found_with_no_highlight() {
    let store = store();
    let mut router = Router::new(&store);
    let doc = match router.navigate("/does-not-exist").expect("navigate") {
        Outcome::NotFound(doc) => doc,
        other => panic!("expected NotFound, got {other:?}"),
    };
    assert!(doc.contains("<h1>Page Not Found</h1>"));
    assert!(doc.contains("<code>/does-not-exist</code>"));
    assert_eq!(doc.matches(r#"class="active""#).count(), 0);
}

#[test]
fn navigation_is_idempotent_per_path() {
    let store = store();
    let mut router = Router::new(&store);
    assert!(matches!(
        router.navigate("/experience").expect("navigate"),
        Outcome::Rendered(_)
    ));
    assert_eq!(
        router.navigate("/experience").expect("navigate"),
        Outcome::Unchanged
    );
    // Leaving and returning renders again.
    assert!(matches!(
        router.navigate("/").expect("navigate"),
        Outcome::Rendered(_)
    ));
    assert!(matches!(
        router.navigate("/experience").expect("navigate"),
        Outcome::Rendered(_)
    ));
}

#[test]
fn repeated_navigation_renders_identical_documents() {
    let store = store();
    let render = |path: &str| {
        let mut router = Router::new(&store);
        match router.navigate(path).expect("navigate") {
            Outcome::Rendered(doc) => doc,
            other => panic!("expected Rendered, got {other:?}"),
        }
    };
    assert_eq!(render("/critical-thinking"), render("/critical-thinking"));
}

#[test]
fn site_map_matches_the_navigation_list() {
    let map = site_map();
    assert_eq!(map.len(), NAV_ITEMS.len());
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        assert_eq!(map[i], (item.path, item.label));
    }
    // And the route table covers the same paths, in the same order.
    for (i, route) in Route::ALL.iter().enumerate() {
        assert_eq!(route.path(), NAV_ITEMS[i].path);
        assert_eq!(route.label(), NAV_ITEMS[i].label);
    }
}
