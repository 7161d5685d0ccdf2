//! # advocate
//!
//! Core of the Robert A. Sanchez portfolio landing page: everything the
//! page does that is not DOM plumbing, testable on the host.
//!
//! ## Modules
//!
//! - [`section`] - section anchors and the static navigation list
//! - [`state`] - active section, scrolled flag and mobile menu state
//! - [`motion`] - scroll-linked animation engine (scrubs and reveals)
//! - [`content`] - static page copy, services and experience entries
//! - [`actions`] - pluggable contact / resume-download handlers
//! - [`config`] - `site.toml` configuration
//! - [`error`] - error types
//!
//! ## Quick Start
//!
//! ```rust
//! use advocate::section::SectionId;
//! use advocate::state::PageState;
//!
//! let mut page = PageState::default();
//! page.toggle_menu();
//! page.observe_scroll(200.0);
//!
//! let request = page.navigate(SectionId::Resume);
//! assert_eq!(request.target.as_str(), "resume");
//! assert!(!page.is_menu_open());
//! assert!(page.navbar_class().contains("scrolled"));
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod actions;
pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod section;
pub mod state;

pub use actions::{Feedback, PageAction, PageActions, TraceActions};
pub use config::SiteConfig;
pub use error::{ActionError, ConfigError};
pub use section::{NavItem, SectionId, NAV_ITEMS};
pub use state::{AnchorResolver, PageState, ScrollBehavior, ScrollRequest};
