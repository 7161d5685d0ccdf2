//! # advocate-landing
//!
//! Leptos CSR front end of the Robert A. Sanchez portfolio page. The
//! state, animation engine and copy live in the `advocate` crate; this
//! crate renders the sections and connects them to the browser.
//!
//! ```text
//! App
//! └── PageView (PageContext in context)
//!     ├── Nav (+ animated mobile panel)
//!     ├── Hero            #home
//!     ├── Services        #services
//!     ├── ResumeHighlights #resume
//!     ├── Advocacy        #advocacy
//!     ├── Contact         #contact
//!     ├── Footer
//!     └── FeedbackToast
//! ```

pub mod dom;
mod motion;
pub mod page;
pub mod sections;
pub mod telemetry;

use advocate::SiteConfig;
use leptos::prelude::*;
use page::PageView;

/// Site configuration embedded at build time.
pub const SITE_TOML: &str = include_str!("../site.toml");

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load_or_default(SITE_TOML);
    view! { <PageView config=config /> }
}

/// Entry point used by the trunk binary.
pub fn start() {
    console_error_panic_hook::set_once();
    telemetry::init(tracing::Level::INFO);
    leptos::mount::mount_to_body(App);
}
