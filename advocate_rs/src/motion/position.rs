//! Trigger positions and scroll ranges.
//!
//! A position pairs an edge of the trigger element with an edge of the
//! viewport, e.g. `"top bottom-=100"`: the point is reached when the
//! element's top meets a line 100px above the viewport's bottom.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseTriggerError;

/// Bounding box of a trigger element, relative to the viewport (px).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Viewport {
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

/// A horizontal line on an element or on the viewport.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    /// Fraction of the height, parsed from `"25%"`.
    Percent(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
            Edge::Percent(p) => p / 100.0,
        }
    }
}

impl FromStr for Edge {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "center" => Ok(Edge::Center),
            "bottom" => Ok(Edge::Bottom),
            other => other
                .strip_suffix('%')
                .and_then(|p| p.parse::<f64>().ok())
                .filter(|p| p.is_finite())
                .map(Edge::Percent)
                .ok_or_else(|| ParseTriggerError::UnknownEdge(other.to_string())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Top => f.write_str("top"),
            Edge::Center => f.write_str("center"),
            Edge::Bottom => f.write_str("bottom"),
            Edge::Percent(p) => write!(f, "{p}%"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TriggerPosition {
    pub element: Edge,
    pub viewport: Edge,
    /// Added to the viewport line; negative moves it up.
    pub offset_px: f64,
}

impl TriggerPosition {
    pub const fn new(element: Edge, viewport: Edge, offset_px: f64) -> Self {
        Self {
            element,
            viewport,
            offset_px,
        }
    }

    /// Signed distance from the element line down to the viewport line.
    /// Shrinks as the page scrolls down; `<= 0` means the point was passed.
    pub fn distance(&self, rect: Rect, viewport: Viewport) -> f64 {
        let element_line = rect.top + self.element.fraction() * rect.height;
        let viewport_line = self.viewport.fraction() * viewport.height + self.offset_px;
        element_line - viewport_line
    }

    pub fn is_passed(&self, rect: Rect, viewport: Viewport) -> bool {
        self.distance(rect, viewport) <= 0.0
    }
}

impl FromStr for TriggerPosition {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let element = parts.next().ok_or(ParseTriggerError::Empty)?.parse()?;
        let viewport_token = parts
            .next()
            .ok_or_else(|| ParseTriggerError::MissingViewportEdge(s.to_string()))?;

        let (edge, offset_px) = match viewport_token.find(['+', '-']) {
            Some(at) => {
                let (edge, rest) = viewport_token.split_at(at);
                (edge, parse_offset(rest)?)
            }
            None => (viewport_token, 0.0),
        };

        Ok(Self {
            element,
            viewport: edge.parse()?,
            offset_px,
        })
    }
}

fn parse_offset(raw: &str) -> Result<f64, ParseTriggerError> {
    let invalid = || ParseTriggerError::InvalidOffset(raw.to_string());
    let (sign, amount) = if let Some(rest) = raw.strip_prefix("+=") {
        (1.0, rest)
    } else if let Some(rest) = raw.strip_prefix("-=") {
        (-1.0, rest)
    } else {
        return Err(invalid());
    };
    let amount = amount.strip_suffix("px").unwrap_or(amount);
    amount
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite())
        .map(|px| sign * px)
        .ok_or_else(invalid)
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)?;
        if self.offset_px > 0.0 {
            write!(f, "+={}", self.offset_px)
        } else if self.offset_px < 0.0 {
            write!(f, "-={}", -self.offset_px)
        } else {
            Ok(())
        }
    }
}

/// Where a trigger sits relative to its range.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScrollRange {
    pub start: TriggerPosition,
    pub end: TriggerPosition,
}

impl ScrollRange {
    /// End used when a trigger only names its start.
    pub const DEFAULT_END: TriggerPosition = TriggerPosition::new(Edge::Bottom, Edge::Top, 0.0);

    pub fn new(start: TriggerPosition, end: TriggerPosition) -> Self {
        Self { start, end }
    }

    /// Progress through the range, clamped to `[0, 1]`.
    pub fn progress(&self, rect: Rect, viewport: Viewport) -> f64 {
        let to_start = self.start.distance(rect, viewport);
        let to_end = self.end.distance(rect, viewport);
        let span = to_end - to_start;
        if span <= 0.0 {
            return if to_start <= 0.0 { 1.0 } else { 0.0 };
        }
        (-to_start / span).clamp(0.0, 1.0)
    }

    pub fn phase(&self, rect: Rect, viewport: Viewport) -> Phase {
        if !self.start.is_passed(rect, viewport) {
            Phase::Before
        } else if self.end.distance(rect, viewport) < 0.0 {
            Phase::After
        } else {
            Phase::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIEWPORT: Viewport = Viewport { height: 800.0 };

    #[test]
    fn parses_offsets_and_edges() {
        let pos: TriggerPosition = "top bottom-=100".parse().unwrap();
        assert_eq!(pos, TriggerPosition::new(Edge::Top, Edge::Bottom, -100.0));

        let pos: TriggerPosition = "center 25%+=40px".parse().unwrap();
        assert_eq!(
            pos,
            TriggerPosition::new(Edge::Center, Edge::Percent(25.0), 40.0)
        );

        let pos: TriggerPosition = "  top   center ".parse().unwrap();
        assert_eq!(pos, TriggerPosition::new(Edge::Top, Edge::Center, 0.0));
    }

    #[test]
    fn rejects_malformed_positions() {
        assert_eq!(
            "".parse::<TriggerPosition>().unwrap_err(),
            ParseTriggerError::Empty
        );
        assert_eq!(
            "top".parse::<TriggerPosition>().unwrap_err(),
            ParseTriggerError::MissingViewportEdge("top".into())
        );
        assert_eq!(
            "middle top".parse::<TriggerPosition>().unwrap_err(),
            ParseTriggerError::UnknownEdge("middle".into())
        );
        assert_eq!(
            "top bottom-100".parse::<TriggerPosition>().unwrap_err(),
            ParseTriggerError::InvalidOffset("-100".into())
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for raw in ["nan%", "inf%", "-inf%", "infinity%"] {
            assert_eq!(
                raw.parse::<Edge>().unwrap_err(),
                ParseTriggerError::UnknownEdge(raw.into())
            );
        }
        assert_eq!(
            "top bottom-=nan".parse::<TriggerPosition>().unwrap_err(),
            ParseTriggerError::InvalidOffset("-=nan".into())
        );
        assert_eq!(
            "top 50%+=inf".parse::<TriggerPosition>().unwrap_err(),
            ParseTriggerError::InvalidOffset("+=inf".into())
        );
    }

    #[test]
    fn display_matches_input_form() {
        for raw in ["top bottom-=100", "bottom top", "center 25%+=40"] {
            let pos: TriggerPosition = raw.parse().unwrap();
            assert_eq!(pos.to_string(), raw);
        }
    }

    #[test]
    fn card_start_is_100px_above_viewport_bottom() {
        let start: TriggerPosition = "top bottom-=100".parse().unwrap();
        assert!(!start.is_passed(Rect::new(701.0, 300.0), VIEWPORT));
        assert!(start.is_passed(Rect::new(700.0, 300.0), VIEWPORT));
        assert!(start.is_passed(Rect::new(-50.0, 300.0), VIEWPORT));
    }

    #[test]
    fn hero_progress_scrubs_across_its_own_height() {
        let range = ScrollRange::new(
            "top top".parse().unwrap(),
            "bottom top".parse().unwrap(),
        );
        // Section starts at the top of the page and is 1000px tall.
        assert_eq!(range.progress(Rect::new(0.0, 1000.0), VIEWPORT), 0.0);
        assert_eq!(range.progress(Rect::new(-250.0, 1000.0), VIEWPORT), 0.25);
        assert_eq!(range.progress(Rect::new(-1000.0, 1000.0), VIEWPORT), 1.0);
        assert_eq!(range.progress(Rect::new(-4000.0, 1000.0), VIEWPORT), 1.0);
        assert_eq!(range.progress(Rect::new(300.0, 1000.0), VIEWPORT), 0.0);
    }

    #[test]
    fn degenerate_range_snaps() {
        let range = ScrollRange::new(
            "top top".parse().unwrap(),
            "top top".parse().unwrap(),
        );
        assert_eq!(range.progress(Rect::new(10.0, 0.0), VIEWPORT), 0.0);
        assert_eq!(range.progress(Rect::new(-10.0, 0.0), VIEWPORT), 1.0);
    }

    #[test]
    fn phases_follow_start_and_end() {
        let range = ScrollRange::new("top center".parse().unwrap(), ScrollRange::DEFAULT_END);
        assert_eq!(range.phase(Rect::new(500.0, 600.0), VIEWPORT), Phase::Before);
        assert_eq!(range.phase(Rect::new(400.0, 600.0), VIEWPORT), Phase::Active);
        assert_eq!(range.phase(Rect::new(-600.0, 600.0), VIEWPORT), Phase::Active);
        assert_eq!(range.phase(Rect::new(-601.0, 600.0), VIEWPORT), Phase::After);
    }
}
