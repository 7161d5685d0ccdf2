//! The page view: owns UI state and wires listeners.

use std::sync::Arc;

use advocate::actions::{run_action, Feedback, PageAction, PageActions, TraceActions};
use advocate::section::SectionId;
use advocate::state::{scroll_to_section, PageState};
use advocate::SiteConfig;
use leptos::ev;
use leptos::prelude::*;

use crate::dom::{self, DomAnchors};
use crate::motion;
use crate::sections::*;

pub type SharedActions = Arc<dyn PageActions + Send + Sync>;

/// Handles shared by every section through context.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub state: RwSignal<PageState>,
    pub feedback: RwSignal<Option<Feedback>>,
    pub config: StoredValue<SiteConfig>,
    actions: StoredValue<SharedActions>,
}

impl PageContext {
    fn new(config: SiteConfig, actions: SharedActions) -> Self {
        Self {
            state: RwSignal::new(PageState::new(config.scroll_threshold)),
            feedback: RwSignal::new(None),
            config: StoredValue::new(config),
            actions: StoredValue::new(actions),
        }
    }

    /// Activate `target`, close the mobile menu and scroll to its anchor.
    pub fn scroll_to_section(&self, target: SectionId) {
        let mut next = self.state.get_untracked();
        scroll_to_section(&mut next, target, &DomAnchors);
        self.state.set(next);
    }

    pub fn toggle_menu(&self) {
        self.state.update(|s| s.toggle_menu());
    }

    pub fn run(&self, action: PageAction) {
        let feedback = self.actions.with_value(|actions| run_action(actions.as_ref(), action));
        self.feedback.set(feedback);
    }

    fn observe_scroll(&self, offset: f64) {
        let changed = self.state.with_untracked(|s| {
            let mut probe = *s;
            probe.observe_scroll(offset)
        });
        if changed {
            self.state.update(|s| {
                s.observe_scroll(offset);
            });
        }
    }
}

pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}

#[component]
pub fn PageView(
    #[prop(optional)] config: Option<SiteConfig>,
    #[prop(optional)] actions: Option<SharedActions>,
) -> impl IntoView {
    let ctx = PageContext::new(
        config.unwrap_or_default(),
        actions.unwrap_or_else(|| Arc::new(TraceActions)),
    );
    provide_context(ctx);

    let scroll = window_event_listener(ev::scroll, move |_| ctx.observe_scroll(dom::scroll_y()));
    on_cleanup(move || scroll.remove());

    Effect::new(move || {
        ctx.config.with_value(|config| motion::mount(&config.animations));
    });

    view! {
        <div class="page">
            <Nav />
            <main>
                <Hero />
                <Services />
                <ResumeHighlights />
                <Advocacy />
                <Contact />
            </main>
            <Footer />
            <FeedbackToast />
        </div>
    }
}
