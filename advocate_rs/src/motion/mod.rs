//! Scroll-linked animation engine.
//!
//! Animations are declared once as (trigger element, scroll range,
//! interpolated property) tuples and evaluated against every scroll or
//! resize observation. The engine is generic over the element handle so the
//! browser view can bind DOM elements while tests bind plain values.
//!
//! ```text
//! Timeline<E>
//! └── Bound<E> { target: E, trigger: E, binding }
//!     ├── Binding::Scrub  -> ScrubTween  (progress -> pose)
//!     └── Binding::Reveal -> RevealTween (crossing -> toggle action -> pose + timing)
//! ```

mod position;
mod toggle;
mod tween;

pub use position::{Edge, Phase, Rect, ScrollRange, TriggerPosition, Viewport};
pub use toggle::{Crossing, ToggleAction, ToggleActions, TriggerTracker};
pub use tween::{Binding, Playhead, Pose, RevealTween, ScrubTween, StyleUpdate, Timing};

use once_cell::sync::OnceCell;
use tracing::info;

static SCROLL_ENGINE: OnceCell<()> = OnceCell::new();

/// Process-wide registration of the scroll engine.
///
/// Returns `true` for the call that performed the registration and `false`
/// for every later call, however many views mount.
pub fn register_scroll_engine() -> bool {
    let mut first = false;
    SCROLL_ENGINE.get_or_init(|| {
        first = true;
        info!("scroll engine registered");
    });
    first
}

pub fn is_scroll_engine_registered() -> bool {
    SCROLL_ENGINE.get().is_some()
}

/// A binding attached to concrete elements.
#[derive(Clone, Debug)]
pub struct Bound<E> {
    pub target: E,
    pub trigger: E,
    pub binding: Binding,
}

/// The set of bindings declared for one mounted view.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    bound: Vec<Bound<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self { bound: Vec::new() }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, target: E, trigger: E, binding: Binding) {
        self.bound.push(Bound {
            target,
            trigger,
            binding,
        });
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Styles to apply right after binding, before any scroll evaluation.
    pub fn initial_styles(&self) -> Vec<(&E, StyleUpdate)> {
        self.bound
            .iter()
            .filter_map(|b| b.binding.initial().map(|update| (&b.target, update)))
            .collect()
    }

    /// Evaluate every binding against the current layout.
    pub fn evaluate(
        &mut self,
        viewport: Viewport,
        mut measure: impl FnMut(&E) -> Rect,
    ) -> Vec<(&E, StyleUpdate)> {
        self.bound
            .iter_mut()
            .filter_map(|b| {
                let rect = measure(&b.trigger);
                b.binding
                    .update(rect, viewport)
                    .map(|update| (&b.target, update))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registration_happens_once() {
        let _ = register_scroll_engine();
        assert!(is_scroll_engine_registered());
        for _ in 0..3 {
            assert!(!register_scroll_engine());
        }
    }

    #[test]
    fn timeline_routes_updates_to_targets() {
        let range = ScrollRange::new("top center".parse().unwrap(), ScrollRange::DEFAULT_END);
        let from = Pose {
            x_px: -100.0,
            opacity: 0.0,
            ..Pose::REST
        };
        let mut timeline = Timeline::new();
        timeline.bind(
            "resume-content",
            "resume",
            Binding::Reveal(RevealTween::new(
                from,
                1.0,
                range,
                ToggleActions::PLAY_THEN_REVERSE,
            )),
        );
        assert_eq!(timeline.len(), 1);

        let initial = timeline.initial_styles();
        assert_eq!(initial, vec![(&"resume-content", StyleUpdate::snap(from))]);

        let viewport = Viewport::new(800.0);
        let far = timeline.evaluate(viewport, |_| Rect::new(900.0, 600.0));
        assert!(far.is_empty());

        let near = timeline.evaluate(viewport, |trigger| {
            assert_eq!(*trigger, "resume");
            Rect::new(390.0, 600.0)
        });
        assert_eq!(near.len(), 1);
        assert_eq!(*near[0].0, "resume-content");
    }
}
