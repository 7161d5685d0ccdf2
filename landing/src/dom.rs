//! Thin helpers over `web_sys` for the page view.
//!
//! Every lookup is fail-soft: a missing window, document or element yields
//! `None`/`false`, never a panic.

use advocate::motion::{Pose, Rect, StyleUpdate, Viewport};
use advocate::state::{AnchorResolver, ScrollBehavior, ScrollRequest};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Resolves section anchors with `getElementById`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomAnchors;

impl AnchorResolver for DomAnchors {
    fn scroll_into_view(&self, request: &ScrollRequest) -> bool {
        let Some(element) = element_by_id(request.target.as_str()) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(selector).ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport() -> Viewport {
    let height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    Viewport::new(height)
}

pub fn rect_of(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.top(), rect.height())
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn set_pose(style: &web_sys::CssStyleDeclaration, pose: &Pose) {
    let _ = style.set_property("transform", &pose.transform());
    let _ = style.set_property("opacity", &pose.opacity_css());
}

/// Apply an animation style update to `element`.
pub fn apply_style(element: &Element, update: &StyleUpdate) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    match update {
        StyleUpdate::Apply { pose, timing } => {
            let transition = timing.map(|t| t.css()).unwrap_or_else(|| "none".into());
            let _ = style.set_property("transition", &transition);
            set_pose(&style, pose);
        }
        StyleUpdate::Restart { from, to, timing } => {
            let _ = style.set_property("transition", "none");
            set_pose(&style, from);
            // Force a style flush so the browser animates from `from`.
            let _ = html.offset_height();
            let _ = style.set_property("transition", &timing.css());
            set_pose(&style, to);
        }
        StyleUpdate::Freeze => {
            let computed = web_sys::window().and_then(|w| w.get_computed_style(element).ok().flatten());
            let _ = style.set_property("transition", "none");
            if let Some(computed) = computed {
                for property in ["transform", "opacity"] {
                    if let Ok(value) = computed.get_property_value(property) {
                        let _ = style.set_property(property, &value);
                    }
                }
            }
        }
    }
}
