//! Scrubbed and viewport-entry tweens.
//!
//! Neither tween owns a clock. A scrub maps scroll progress straight to a
//! pose; a reveal emits a target pose plus CSS transition timing and leaves
//! the interpolation to the browser.

use serde::Deserialize;

use super::position::{Rect, ScrollRange, Viewport};
use super::toggle::{ToggleAction, ToggleActions, TriggerTracker};

/// Transform and opacity of an animated element.
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(default)]
pub struct Pose {
    pub x_px: f64,
    pub y_px: f64,
    /// Vertical offset relative to the element's own height.
    pub y_percent: f64,
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        x_px: 0.0,
        y_px: 0.0,
        y_percent: 0.0,
        opacity: 1.0,
    };

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            x_px: mix(self.x_px, to.x_px),
            y_px: mix(self.y_px, to.y_px),
            y_percent: mix(self.y_percent, to.y_percent),
            opacity: mix(self.opacity, to.opacity),
        }
    }

    /// CSS `transform` value; `none` at rest.
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x_px != 0.0 {
            parts.push(format!("translateX({}px)", round(self.x_px)));
        }
        if self.y_px != 0.0 {
            parts.push(format!("translateY({}px)", round(self.y_px)));
        }
        if self.y_percent != 0.0 {
            parts.push(format!("translateY({}%)", round(self.y_percent)));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn opacity_css(&self) -> String {
        round(self.opacity.clamp(0.0, 1.0)).to_string()
    }
}

fn round(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// CSS transition timing for a reveal.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Timing {
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Timing {
    /// `transition` value covering transform and opacity.
    pub fn css(&self) -> String {
        format!(
            "transform {d}s ease-out {l}s, opacity {d}s ease-out {l}s",
            d = round(self.duration_s),
            l = round(self.delay_s)
        )
    }
}

/// Style change the view must apply to a bound element.
#[derive(Clone, PartialEq, Debug)]
pub enum StyleUpdate {
    /// Set the pose, animated when `timing` is present.
    Apply { pose: Pose, timing: Option<Timing> },
    /// Snap to `from`, then animate to `to`.
    Restart { from: Pose, to: Pose, timing: Timing },
    /// Hold the element at whatever computed pose it has reached.
    Freeze,
}

impl StyleUpdate {
    pub fn snap(pose: Pose) -> Self {
        StyleUpdate::Apply { pose, timing: None }
    }
}

/// Continuous, scroll-scrubbed interpolation between two poses.
#[derive(Clone, PartialEq, Debug)]
pub struct ScrubTween {
    pub from: Pose,
    pub to: Pose,
    pub range: ScrollRange,
    last_progress: Option<f64>,
}

impl ScrubTween {
    pub fn new(from: Pose, to: Pose, range: ScrollRange) -> Self {
        Self {
            from,
            to,
            range,
            last_progress: None,
        }
    }

    pub fn pose_at(&self, progress: f64) -> Pose {
        self.from.lerp(&self.to, progress)
    }

    pub fn update(&mut self, rect: Rect, viewport: Viewport) -> Option<StyleUpdate> {
        let progress = self.range.progress(rect, viewport);
        if self
            .last_progress
            .is_some_and(|last| (last - progress).abs() < 1e-4)
        {
            return None;
        }
        self.last_progress = Some(progress);
        Some(StyleUpdate::snap(self.pose_at(progress)))
    }
}

/// Where a reveal's playhead is heading.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Playhead {
    #[default]
    AtStart,
    Forward,
    Backward,
    Paused { forward: bool },
    AtEnd,
}

/// Fixed-duration tween from an offset pose to rest, started and reversed
/// by viewport crossings.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealTween {
    pub from: Pose,
    pub duration_s: f64,
    pub delay_s: f64,
    pub range: ScrollRange,
    pub actions: ToggleActions,
    tracker: TriggerTracker,
    playhead: Playhead,
}

impl RevealTween {
    pub fn new(from: Pose, duration_s: f64, range: ScrollRange, actions: ToggleActions) -> Self {
        Self {
            from,
            duration_s,
            delay_s: 0.0,
            range,
            actions,
            tracker: TriggerTracker::default(),
            playhead: Playhead::AtStart,
        }
    }

    pub fn with_delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    pub fn playhead(&self) -> Playhead {
        self.playhead
    }

    /// Style to apply before the first scroll evaluation.
    pub fn initial(&self) -> StyleUpdate {
        StyleUpdate::snap(self.from)
    }

    pub fn update(&mut self, rect: Rect, viewport: Viewport) -> Option<StyleUpdate> {
        let crossings = self.tracker.advance(self.range.phase(rect, viewport));
        let action = self.actions.resolve(crossings)?;
        self.apply(action)
    }

    fn forward(&self) -> Timing {
        Timing {
            duration_s: self.duration_s,
            delay_s: self.delay_s,
        }
    }

    fn backward(&self) -> Timing {
        Timing {
            duration_s: self.duration_s,
            delay_s: 0.0,
        }
    }

    fn apply(&mut self, action: ToggleAction) -> Option<StyleUpdate> {
        let update = match action {
            ToggleAction::Play => {
                if matches!(self.playhead, Playhead::Forward | Playhead::AtEnd) {
                    return None;
                }
                self.playhead = Playhead::Forward;
                StyleUpdate::Apply {
                    pose: Pose::REST,
                    timing: Some(self.forward()),
                }
            }
            ToggleAction::Reverse => {
                if matches!(self.playhead, Playhead::Backward | Playhead::AtStart) {
                    return None;
                }
                self.playhead = Playhead::Backward;
                StyleUpdate::Apply {
                    pose: self.from,
                    timing: Some(self.backward()),
                }
            }
            ToggleAction::Resume => match self.playhead {
                Playhead::Paused { forward: true } => {
                    self.playhead = Playhead::Forward;
                    StyleUpdate::Apply {
                        pose: Pose::REST,
                        timing: Some(self.backward()),
                    }
                }
                Playhead::Paused { forward: false } => {
                    self.playhead = Playhead::Backward;
                    StyleUpdate::Apply {
                        pose: self.from,
                        timing: Some(self.backward()),
                    }
                }
                _ => return None,
            },
            ToggleAction::Pause => {
                let forward = match self.playhead {
                    Playhead::Forward => true,
                    Playhead::Backward => false,
                    _ => return None,
                };
                self.playhead = Playhead::Paused { forward };
                StyleUpdate::Freeze
            }
            ToggleAction::Restart => {
                self.playhead = Playhead::Forward;
                StyleUpdate::Restart {
                    from: self.from,
                    to: Pose::REST,
                    timing: self.forward(),
                }
            }
            ToggleAction::Reset => {
                self.playhead = Playhead::AtStart;
                StyleUpdate::snap(self.from)
            }
            ToggleAction::Complete => {
                self.playhead = Playhead::AtEnd;
                StyleUpdate::snap(Pose::REST)
            }
            ToggleAction::None => return None,
        };
        Some(update)
    }
}

/// One scroll-linked animation attached to a target element.
#[derive(Clone, PartialEq, Debug)]
pub enum Binding {
    Scrub(ScrubTween),
    Reveal(RevealTween),
}

impl Binding {
    pub fn initial(&self) -> Option<StyleUpdate> {
        match self {
            Binding::Scrub(_) => None,
            Binding::Reveal(reveal) => Some(reveal.initial()),
        }
    }

    pub fn update(&mut self, rect: Rect, viewport: Viewport) -> Option<StyleUpdate> {
        match self {
            Binding::Scrub(scrub) => scrub.update(rect, viewport),
            Binding::Reveal(reveal) => reveal.update(rect, viewport),
        }
    }
}
