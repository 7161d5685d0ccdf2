//! Browser tests. Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use advocate::motion::{Pose, StyleUpdate, Timing};
use advocate::section::SectionId;
use advocate::state::{scroll_to_section, PageState};
use advocate_landing::dom::{self, DomAnchors};
use advocate_landing::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn insert_section(id: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let section = document.create_element("section").unwrap();
    section.set_id(id);
    document.body().unwrap().append_child(&section).unwrap();
    section.dyn_into::<HtmlElement>().unwrap()
}

#[wasm_bindgen_test]
fn missing_anchor_does_not_throw() {
    let mut state = PageState::default();
    state.toggle_menu();
    assert!(!scroll_to_section(&mut state, SectionId::Experience, &DomAnchors));
    assert_eq!(state.active(), SectionId::Experience);
    assert!(!state.is_menu_open());
}

#[wasm_bindgen_test]
fn present_anchor_is_scrolled_to() {
    let section = insert_section("resume");
    let mut state = PageState::default();
    assert!(scroll_to_section(&mut state, SectionId::Resume, &DomAnchors));
    section.remove();
}

#[wasm_bindgen_test]
fn style_updates_land_on_the_element() {
    let section = insert_section("advocacy");
    let update = StyleUpdate::Apply {
        pose: Pose {
            x_px: -100.0,
            opacity: 0.0,
            ..Pose::REST
        },
        timing: Some(Timing {
            duration_s: 1.0,
            delay_s: 0.2,
        }),
    };
    dom::apply_style(&section, &update);

    let style = section.style();
    assert_eq!(
        style.get_property_value("transform").unwrap(),
        "translateX(-100px)"
    );
    assert_eq!(style.get_property_value("opacity").unwrap(), "0");
    section.remove();
}

#[wasm_bindgen_test]
fn query_all_returns_every_match() {
    let a = insert_section("card-a");
    let b = insert_section("card-b");
    a.set_class_name("probe-card");
    b.set_class_name("probe-card");
    assert_eq!(dom::query_all(".probe-card").len(), 2);
    assert!(dom::query_all(".nothing-here").is_empty());
    a.remove();
    b.remove();
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn dispatch_scroll(y: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, y);
    window
        .dispatch_event(&Event::new("scroll").unwrap())
        .unwrap();
}

fn nav_class() -> Option<String> {
    document()
        .query_selector("nav")
        .unwrap()
        .map(|nav| nav.class_name())
}

#[wasm_bindgen_test]
async fn mounted_page_renders_anchors_and_tracks_scroll() {
    let body = document().body().unwrap();
    let spacer = insert_section("scroll-spacer");
    spacer.style().set_property("height", "5000px").unwrap();
    let root = document()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    body.prepend_with_node_1(&root).unwrap();

    let handle = leptos::mount::mount_to(root.clone(), App);

    for id in ["home", "services", "resume", "advocacy", "contact"] {
        assert!(document().get_element_by_id(id).is_some(), "#{id} missing");
    }
    for id in ["about", "experience"] {
        assert!(document().get_element_by_id(id).is_none(), "#{id} rendered");
    }
    assert_eq!(nav_class().as_deref(), Some("nav nav--transparent"));
    // Reveal and hover zoom sit on separate elements.
    assert!(document()
        .query_selector(".portrait-reveal > .portrait")
        .unwrap()
        .is_some());

    dispatch_scroll(200.0);
    leptos::task::tick().await;
    leptos::task::tick().await;
    assert_eq!(nav_class().as_deref(), Some("nav nav--scrolled"));

    // Unmounting disposes the page signals; a listener left behind would
    // touch them on the next scroll.
    drop(handle);
    assert_eq!(nav_class(), None);
    dispatch_scroll(0.0);
    leptos::task::tick().await;

    root.remove();
    spacer.remove();
}
