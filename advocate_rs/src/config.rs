//! Site configuration.
//!
//! The landing crate embeds `site.toml` at build time; every field has a
//! default matching the published page, so an empty document is valid.

use serde::Deserialize;
use tracing::warn;

use crate::error::{ConfigError, ParseTriggerError};
use crate::motion::{Pose, RevealTween, ScrollRange, ScrubTween, ToggleActions};
use crate::state::DEFAULT_SCROLL_THRESHOLD;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Offset (px) past which the navbar switches to its solid style.
    pub scroll_threshold: f64,
    /// Portrait shown next to the resume highlights.
    pub portrait_path: String,
    pub social: Vec<SocialLink>,
    pub animations: AnimationConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            portrait_path: "/robert-sanchez.webp".to_string(),
            social: vec![
                SocialLink {
                    label: "LinkedIn".to_string(),
                    href: "#".to_string(),
                    icon: SocialIcon::Linkedin,
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    href: "#".to_string(),
                    icon: SocialIcon::Twitter,
                },
            ],
            animations: AnimationConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `raw`, falling back to the defaults if it is invalid.
    pub fn load_or_default(raw: &str) -> Self {
        match Self::from_toml_str(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "invalid site config, using defaults");
                Self::default()
            }
        }
    }

    /// Check that every animation declaration can be built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.animations;
        let wrap = |binding: &'static str| {
            move |source: ParseTriggerError| ConfigError::Animation { binding, source }
        };
        a.hero.build().map_err(wrap("hero"))?;
        a.service_cards.build(0).map_err(wrap("service_cards"))?;
        a.resume.build(0).map_err(wrap("resume"))?;
        a.advocacy.build().map_err(wrap("advocacy"))?;
        for (binding, spec) in a.intros() {
            spec.build(0).map_err(wrap(binding))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Linkedin,
    Twitter,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: SocialIcon,
}

/// Declarations for the scroll-linked animations.
///
/// The first four are the page's parallax and card effects. The intro
/// entries fade each section's heading block in the first time it scrolls
/// into view and never reverse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub hero: ScrubSpec,
    pub service_cards: RevealSpec,
    pub resume: RevealSpec,
    pub advocacy: ScrubSpec,
    pub services_intro: RevealSpec,
    pub portrait: RevealSpec,
    pub advocacy_body: RevealSpec,
    pub contact_intro: RevealSpec,
}

impl AnimationConfig {
    /// The one-shot intro reveals, keyed by binding name.
    pub fn intros(&self) -> [(&'static str, &RevealSpec); 4] {
        [
            ("services_intro", &self.services_intro),
            ("portrait", &self.portrait),
            ("advocacy_body", &self.advocacy_body),
            ("contact_intro", &self.contact_intro),
        ]
    }
}

fn intro_reveal(target: &str, from: Pose) -> RevealSpec {
    RevealSpec {
        target: target.to_string(),
        trigger: None,
        start: "top bottom".to_string(),
        end: None,
        toggle_actions: "play none none none".to_string(),
        from,
        duration_s: 0.8,
        stagger_s: 0.0,
    }
}

const RISE: Pose = Pose {
    y_px: 20.0,
    opacity: 0.0,
    ..Pose::REST
};

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            hero: ScrubSpec {
                target: ".hero-content".to_string(),
                trigger: "#home".to_string(),
                start: "top top".to_string(),
                end: "bottom top".to_string(),
                from: Pose::REST,
                to: Pose {
                    y_percent: 30.0,
                    ..Pose::REST
                },
            },
            service_cards: RevealSpec {
                target: ".service-card".to_string(),
                trigger: None,
                start: "top bottom-=100".to_string(),
                end: None,
                toggle_actions: "play none none reverse".to_string(),
                from: Pose {
                    y_px: 100.0,
                    opacity: 0.0,
                    ..Pose::REST
                },
                duration_s: 1.0,
                stagger_s: 0.2,
            },
            resume: RevealSpec {
                target: ".resume-content".to_string(),
                trigger: Some("#resume".to_string()),
                start: "top center".to_string(),
                end: None,
                toggle_actions: "play none none reverse".to_string(),
                from: Pose {
                    x_px: -100.0,
                    opacity: 0.0,
                    ..Pose::REST
                },
                duration_s: 1.0,
                stagger_s: 0.0,
            },
            advocacy: ScrubSpec {
                target: ".advocacy-bg".to_string(),
                trigger: "#advocacy".to_string(),
                start: "top bottom".to_string(),
                end: "bottom top".to_string(),
                from: Pose::REST,
                to: Pose {
                    y_percent: -20.0,
                    ..Pose::REST
                },
            },
            services_intro: intro_reveal(".services .section-intro", RISE),
            portrait: intro_reveal(
                ".portrait-reveal",
                Pose {
                    x_px: -20.0,
                    opacity: 0.0,
                    ..Pose::REST
                },
            ),
            advocacy_body: intro_reveal(".advocacy-body", RISE),
            contact_intro: intro_reveal(".contact .container", RISE),
        }
    }
}

/// A scrubbed animation: `target` interpolates from `from` to `to` while
/// `trigger` travels from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrubSpec {
    pub target: String,
    pub trigger: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub from: Pose,
    pub to: Pose,
}

impl ScrubSpec {
    pub fn build(&self) -> Result<ScrubTween, ParseTriggerError> {
        let range = ScrollRange::new(self.start.parse()?, self.end.parse()?);
        Ok(ScrubTween::new(self.from, self.to, range))
    }
}

/// A viewport-entry animation from `from` to rest. Without `trigger`, each
/// matched target triggers itself and the n-th one waits `n * stagger_s`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevealSpec {
    pub target: String,
    #[serde(default)]
    pub trigger: Option<String>,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    pub toggle_actions: String,
    pub from: Pose,
    pub duration_s: f64,
    #[serde(default)]
    pub stagger_s: f64,
}

impl RevealSpec {
    pub fn build(&self, index: usize) -> Result<RevealTween, ParseTriggerError> {
        let end = match &self.end {
            Some(end) => end.parse()?,
            None => ScrollRange::DEFAULT_END,
        };
        let range = ScrollRange::new(self.start.parse()?, end);
        let actions: ToggleActions = self.toggle_actions.parse()?;
        Ok(RevealTween::new(self.from, self.duration_s, range, actions)
            .with_delay(index as f64 * self.stagger_s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Edge, Playhead, Rect, StyleUpdate, TriggerPosition, Viewport};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn shipped_site_toml_matches_defaults() {
        let shipped = SiteConfig::from_toml_str(include_str!("../../landing/site.toml")).unwrap();
        assert_eq!(shipped, SiteConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = SiteConfig::from_toml_str(
            r##"
scroll_threshold = 80.0

[animations.resume]
target = ".resume-content"
trigger = "#resume"
start = "top 75%"
toggle_actions = "play none none none"
from = { x_px = -40.0, opacity = 0.0 }
duration_s = 0.5
"##,
        )
        .unwrap();
        assert_eq!(config.scroll_threshold, 80.0);
        assert_eq!(config.portrait_path, "/robert-sanchez.webp");
        let resume = config.animations.resume.build(0).unwrap();
        assert_eq!(
            resume.range.start,
            TriggerPosition::new(Edge::Top, Edge::Percent(75.0), 0.0)
        );
        assert_eq!(resume.from.x_px, -40.0);
        assert_eq!(config.animations.hero, AnimationConfig::default().hero);
    }

    #[test]
    fn stagger_scales_with_index() {
        let cards = AnimationConfig::default().service_cards;
        let delays: Vec<f64> = (0..3).map(|i| cards.build(i).unwrap().delay_s).collect();
        assert_eq!(delays, vec![0.0, 0.2, 0.4]);
    }

    #[test]
    fn invalid_trigger_is_reported_with_binding_name() {
        let err = SiteConfig::from_toml_str(
            r##"
[animations.hero]
target = ".hero-content"
trigger = "#home"
start = "top sideways"
end = "bottom top"
to = { y_percent = 30.0 }
"##,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid animation `hero`: unknown edge `sideways` (expected top, center, bottom or a percentage)"
        );
    }

    #[test]
    fn intros_play_once_and_never_reverse() {
        let viewport = Viewport::new(800.0);
        let below = Rect::new(900.0, 200.0);
        let visible = Rect::new(500.0, 200.0);
        let above = Rect::new(-400.0, 200.0);

        for (name, spec) in AnimationConfig::default().intros() {
            let mut intro = spec.build(0).unwrap();
            assert_eq!(intro.update(below, viewport), None, "{name}");
            assert!(
                matches!(
                    intro.update(visible, viewport),
                    Some(StyleUpdate::Apply { timing: Some(_), .. })
                ),
                "{name}"
            );
            // Out the top, back in, then back below the fold: no further changes.
            for rect in [above, visible, below, visible, below] {
                assert_eq!(intro.update(rect, viewport), None, "{name}");
            }
            assert_eq!(intro.playhead(), Playhead::Forward, "{name}");
        }
    }

    #[test]
    fn intro_timing_and_offsets() {
        let a = AnimationConfig::default();
        assert_eq!(a.portrait.target, ".portrait-reveal");
        let portrait = a.portrait.build(0).unwrap();
        assert_eq!(portrait.from.x_px, -20.0);
        assert_eq!(portrait.from.opacity, 0.0);
        assert_eq!(portrait.duration_s, 0.8);
        let contact = a.contact_intro.build(0).unwrap();
        assert_eq!(contact.from.y_px, 20.0);
        assert_eq!(
            contact.range.start,
            TriggerPosition::new(Edge::Top, Edge::Bottom, 0.0)
        );
    }

    #[test]
    fn invalid_intro_is_reported_by_name() {
        let err = SiteConfig::from_toml_str(
            r#"
[animations.portrait]
target = ".portrait-reveal"
start = "top bottom"
toggle_actions = "play rewind"
from = { x_px = -20.0, opacity = 0.0 }
duration_s = 0.8
"#,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid animation `portrait`:"));
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let config = SiteConfig::load_or_default("scroll_threshold = \"lots\"");
        assert_eq!(config, SiteConfig::default());
    }
}
