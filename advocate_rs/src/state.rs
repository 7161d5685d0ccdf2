//! Transient UI state owned by the page view.
//!
//! Three independent values: the nav entry presumed current, whether the
//! page has scrolled past the navbar threshold, and whether the mobile menu
//! is open. They are only ever changed through the methods below, which the
//! view calls from its scroll listener and click handlers.

use tracing::debug;

use crate::section::SectionId;

/// Vertical offset (px) the page must exceed before the navbar turns solid.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// How a [`ScrollRequest`] should move the document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Request to bring a section anchor into view.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScrollRequest {
    pub target: SectionId,
    pub behavior: ScrollBehavior,
}

/// Resolves section ids to document elements and scrolls them into view.
///
/// Returns `false` when no element carries the id. A miss is not an error.
pub trait AnchorResolver {
    fn scroll_into_view(&self, request: &ScrollRequest) -> bool;
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PageState {
    active: SectionId,
    scrolled: bool,
    menu_open: bool,
    threshold: f64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl PageState {
    pub fn new(threshold: f64) -> Self {
        Self {
            active: SectionId::Home,
            scrolled: false,
            menu_open: false,
            threshold,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record the latest vertical scroll offset. Returns `true` if the
    /// scrolled flag flipped.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Mark `target` active, close the mobile menu and return the scroll
    /// request the view should hand to its [`AnchorResolver`].
    pub fn navigate(&mut self, target: SectionId) -> ScrollRequest {
        self.active = target;
        self.menu_open = false;
        ScrollRequest {
            target,
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Class list for the `<nav>` element.
    pub fn navbar_class(&self) -> &'static str {
        navbar_class(self.scrolled)
    }

    /// Class list for a desktop nav button.
    pub fn nav_link_class(&self, id: SectionId) -> &'static str {
        if self.active == id {
            "nav-link nav-link--active"
        } else {
            "nav-link"
        }
    }
}

pub fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "nav nav--scrolled"
    } else {
        "nav nav--transparent"
    }
}

/// Navigate and resolve in one step. Missing anchors are silently skipped.
pub fn scroll_to_section(
    state: &mut PageState,
    target: SectionId,
    resolver: &impl AnchorResolver,
) -> bool {
    let request = state.navigate(target);
    let found = resolver.scroll_into_view(&request);
    if !found {
        debug!(section = %target, "no anchor element for section, skipping scroll");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::NAV_ITEMS;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Pretends the rendered page only has the materialized sections.
    #[derive(Default)]
    struct FakeDocument {
        scrolled_to: RefCell<Vec<SectionId>>,
    }

    impl AnchorResolver for FakeDocument {
        fn scroll_into_view(&self, request: &ScrollRequest) -> bool {
            if !request.target.is_materialized() {
                return false;
            }
            self.scrolled_to.borrow_mut().push(request.target);
            true
        }
    }

    #[test]
    fn initial_state() {
        let state = PageState::default();
        assert!(!state.is_scrolled());
        assert!(!state.is_menu_open());
        assert_eq!(state.active(), SectionId::Home);
        assert_eq!(state.navbar_class(), "nav nav--transparent");
    }

    #[test]
    fn every_nav_click_activates_and_closes_menu() {
        let doc = FakeDocument::default();
        for item in NAV_ITEMS {
            let mut state = PageState::default();
            state.toggle_menu();
            scroll_to_section(&mut state, item.id, &doc);
            assert_eq!(state.active(), item.id);
            assert!(!state.is_menu_open());
        }
    }

    #[test]
    fn threshold_is_strict() {
        let mut state = PageState::default();
        assert!(!state.observe_scroll(50.0));
        assert!(!state.is_scrolled());
        assert!(state.observe_scroll(51.0));
        assert!(state.is_scrolled());
        assert!(!state.observe_scroll(400.0));
        assert!(state.observe_scroll(50.0));
        assert!(!state.is_scrolled());
        state.observe_scroll(120.0);
        state.observe_scroll(0.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn scrolling_to_200_switches_navbar_to_scrolled() {
        let mut state = PageState::default();
        state.observe_scroll(200.0);
        assert!(state.navbar_class().split(' ').any(|c| c == "nav--scrolled"));
    }

    #[test]
    fn menu_toggle_round_trips() {
        let mut state = PageState::default();
        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.is_menu_open());

        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn clicking_resume_requests_smooth_scroll() {
        let doc = FakeDocument::default();
        let mut state = PageState::default();
        assert!(scroll_to_section(&mut state, SectionId::Resume, &doc));
        assert_eq!(state.active(), SectionId::Resume);
        assert_eq!(*doc.scrolled_to.borrow(), vec![SectionId::Resume]);
        assert_eq!(
            state.navigate(SectionId::Resume).behavior,
            ScrollBehavior::Smooth
        );
    }

    #[test]
    fn missing_anchor_is_a_silent_no_op() {
        let doc = FakeDocument::default();
        let mut state = PageState::default();
        state.toggle_menu();
        assert!(!scroll_to_section(&mut state, SectionId::About, &doc));
        assert!(doc.scrolled_to.borrow().is_empty());
        assert!(!state.is_menu_open());
        // Active marker still follows the click even though nothing scrolled.
        assert_eq!(state.active(), SectionId::About);
    }

    #[test]
    fn active_link_is_highlighted() {
        let mut state = PageState::default();
        state.navigate(SectionId::Advocacy);
        assert_eq!(
            state.nav_link_class(SectionId::Advocacy),
            "nav-link nav-link--active"
        );
        assert_eq!(state.nav_link_class(SectionId::Resume), "nav-link");
    }

    #[test]
    fn active_section_ignores_scroll_position() {
        let mut state = PageState::default();
        state.navigate(SectionId::Contact);
        state.observe_scroll(0.0);
        assert_eq!(state.active(), SectionId::Contact);
    }
}
