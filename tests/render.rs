//! Rendering contract tests: component edge policy, ordering, and the
//! all-or-nothing footnote failure mode.

use folio::core::content::{CarItem, EvidenceItem, Store};
use folio::core::error::FolioError;
use folio::render::components::{car_item, evidence_gallery, source_footnotes};
use folio::render::pages;

fn store() -> Store {
    Store::load().expect("embedded content must load")
}

#[test]
fn car_actions_render_in_order_with_exact_count() {
    let item = CarItem {
        context: "ctx".into(),
        actions: vec!["alpha".into(), "beta".into(), "gamma".into()],
        result: "res".into(),
        kpis: None,
    };
    let out = car_item(&item).into_string();
    let positions: Vec<usize> = ["alpha", "beta", "gamma"]
        .iter()
        .map(|a| out.find(&format!("<li>{a}</li>")).expect("action entry"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(out.matches("<li>").count(), 3);
}

#[test]
fn car_with_no_actions_keeps_the_empty_list() {
    let item = CarItem {
        context: "ctx".into(),
        actions: vec![],
        result: "res".into(),
        kpis: None,
    };
    let out = car_item(&item).into_string();
    assert!(out.contains("<ul></ul>"));
    assert!(out.contains("<h3>Actions</h3>"));
}

#[test]
fn kpi_line_renders_iff_present_and_non_empty() {
    let with = CarItem {
        context: "c".into(),
        actions: vec![],
        result: "r".into(),
        kpis: Some(vec!["+80% revenue".into(), "7 weeks".into()]),
    };
    assert!(car_item(&with).into_string().contains("+80% revenue · 7 weeks"));

    let empty = CarItem {
        kpis: Some(vec![]),
        ..with.clone()
    };
    assert!(!car_item(&empty).into_string().contains("KPIs"));

    let absent = CarItem {
        kpis: None,
        ..with
    };
    assert!(!car_item(&absent).into_string().contains("KPIs"));
}

#[test]
fn gallery_renders_nothing_at_all_for_empty_input() {
    assert!(evidence_gallery(&[]).is_none());
}

#[test]
fn captionless_image_falls_back_to_default_alt() {
    let items = [EvidenceItem::Image {
        src: "a.png".into(),
        caption: None,
    }];
    let out = evidence_gallery(&items).expect("one entry").into_string();
    assert!(out.contains(r#"<img src="a.png" alt="evidence">"#), "{out}");
}

#[test]
fn gallery_preserves_item_order_across_media_types() {
    let items = [
        EvidenceItem::Video {
            src: "v.mp4".into(),
            caption: Some("first".into()),
        },
        EvidenceItem::Image {
            src: "i.png".into(),
            caption: Some("second".into()),
        },
    ];
    let out = evidence_gallery(&items).expect("gallery").into_string();
    let video = out.find("v.mp4").expect("video entry");
    let image = out.find("i.png").expect("image entry");
    assert!(video < image);
}

#[test]
fn footnotes_are_none_for_empty_ids() {
    let store = store();
    assert!(source_footnotes(&store, &[]).expect("ok").is_none());
}

#[test]
fn footnotes_resolve_in_input_order_with_duplicates() {
    let store = store();
    let ids = vec![
        "foodtech-market".to_string(),
        "ouichef-pappers".to_string(),
        "foodtech-market".to_string(),
    ];
    let out = source_footnotes(&store, &ids)
        .expect("ok")
        .expect("some")
        .into_string();
    assert_eq!(out.matches("emergenresearch").count(), 2);
    assert_eq!(out.matches("<li>").count(), 3);
    assert!(out.contains(r#"target="_blank""#));
}

#[test]
fn one_bad_footnote_id_fails_the_whole_block() {
    let store = store();
    let ids = vec!["ouichef-pappers".to_string(), "no-such-source".to_string()];
    match source_footnotes(&store, &ids) {
        Err(FolioError::NotFound(msg)) => assert!(msg.contains("no-such-source")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn page_rendering_is_idempotent() {
    let store = store();
    for _ in 0..2 {
        assert_eq!(
            pages::company(&store).into_string(),
            pages::company(&store).into_string()
        );
        assert_eq!(
            pages::on_this_subject(&store).expect("render").into_string(),
            pages::on_this_subject(&store).expect("render").into_string()
        );
    }
}

#[test]
fn experience_page_composes_cars_gallery_and_footnotes() {
    let store = store();
    let out = pages::experience(&store).expect("render").into_string();
    assert!(out.contains(r#"<article class="car">"#));
    assert!(out.contains(r#"aria-label="Evidence""#));
    assert!(out.contains("<h3 id=\"sources-title\">Footnotes</h3>"));
}
