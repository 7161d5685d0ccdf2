//! Section anchors and the static navigation list.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSectionError;

/// Identifier of a page region targeted by navigation.
///
/// The string form doubles as the DOM `id` of the section element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SectionId {
    #[default]
    Home,
    Services,
    About,
    Experience,
    Advocacy,
    Resume,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::About,
        SectionId::Experience,
        SectionId::Advocacy,
        SectionId::Resume,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Advocacy => "advocacy",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
        }
    }

    /// Whether the page renders an element carrying this id.
    ///
    /// `about` and `experience` are linked from the nav but have no section
    /// of their own, so navigating to them never scrolls.
    pub fn is_materialized(self) -> bool {
        !matches!(self, SectionId::About | SectionId::Experience)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// One entry of the navigation bar, mobile panel and footer quick links.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: SectionId::About,
        label: "About",
    },
    NavItem {
        id: SectionId::Experience,
        label: "Experience",
    },
    NavItem {
        id: SectionId::Advocacy,
        label: "Advocacy",
    },
    NavItem {
        id: SectionId::Resume,
        label: "Resume",
    },
    NavItem {
        id: SectionId::Contact,
        label: "Contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_parse_from_their_dom_form() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>().unwrap(), id);
        }
    }

    #[test]
    fn unknown_id_is_a_typed_error() {
        let err = "blog".parse::<SectionId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section id `blog`");
    }

    #[test]
    fn nav_links_two_sections_that_are_never_rendered() {
        let missing: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| !item.id.is_materialized())
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(missing, vec!["about", "experience"]);
    }

    #[test]
    fn nav_order_matches_the_menu() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec!["About", "Experience", "Advocacy", "Resume", "Contact"]
        );
    }
}
