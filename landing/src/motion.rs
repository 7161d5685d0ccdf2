//! Binds the configured scroll animations to DOM elements.
//!
//! Called once after the page mounts. The timeline lives behind an
//! `Rc<RefCell<..>>` shared by the scroll and resize listeners; both
//! listeners are removed when the owning view is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use advocate::config::{AnimationConfig, RevealSpec, ScrubSpec};
use advocate::motion::{register_scroll_engine, Binding, Timeline};
use leptos::ev;
use leptos::prelude::*;
use tracing::{debug, warn};
use web_sys::Element;

use crate::dom;

/// Build the timeline, render initial poses and start listening.
pub fn mount(config: &AnimationConfig) {
    register_scroll_engine();

    let mut timeline = Timeline::new();
    bind_scrub(&mut timeline, "hero", &config.hero);
    bind_reveal(&mut timeline, "service_cards", &config.service_cards);
    bind_reveal(&mut timeline, "resume", &config.resume);
    bind_scrub(&mut timeline, "advocacy", &config.advocacy);
    for (name, spec) in config.intros() {
        bind_reveal(&mut timeline, name, spec);
    }
    debug!(bindings = timeline.len(), "scroll animations bound");

    if timeline.is_empty() {
        return;
    }

    for (target, update) in timeline.initial_styles() {
        dom::apply_style(target, &update);
    }

    let timeline = Rc::new(RefCell::new(timeline));
    evaluate(&timeline);

    let on_scroll = {
        let timeline = Rc::clone(&timeline);
        window_event_listener(ev::scroll, move |_| evaluate(&timeline))
    };
    let on_resize = window_event_listener(ev::resize, move |_| evaluate(&timeline));

    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });
}

fn evaluate(timeline: &Rc<RefCell<Timeline<Element>>>) {
    let viewport = dom::viewport();
    let mut timeline = timeline.borrow_mut();
    for (target, update) in timeline.evaluate(viewport, dom::rect_of) {
        dom::apply_style(target, &update);
    }
}

fn bind_scrub(timeline: &mut Timeline<Element>, name: &str, spec: &ScrubSpec) {
    let tween = match spec.build() {
        Ok(tween) => tween,
        Err(e) => {
            warn!(binding = name, error = %e, "skipping animation");
            return;
        }
    };
    let Some(trigger) = dom::query(&spec.trigger) else {
        debug!(binding = name, trigger = %spec.trigger, "trigger not found");
        return;
    };
    for target in dom::query_all(&spec.target) {
        timeline.bind(target, trigger.clone(), Binding::Scrub(tween.clone()));
    }
}

fn bind_reveal(timeline: &mut Timeline<Element>, name: &str, spec: &RevealSpec) {
    let shared_trigger = match &spec.trigger {
        Some(selector) => match dom::query(selector) {
            Some(trigger) => Some(trigger),
            None => {
                debug!(binding = name, trigger = %selector, "trigger not found");
                return;
            }
        },
        None => None,
    };

    for (index, target) in dom::query_all(&spec.target).into_iter().enumerate() {
        let tween = match spec.build(index) {
            Ok(tween) => tween,
            Err(e) => {
                warn!(binding = name, error = %e, "skipping animation");
                return;
            }
        };
        let trigger = shared_trigger.clone().unwrap_or_else(|| target.clone());
        timeline.bind(target, trigger, Binding::Reveal(tween));
    }
}
