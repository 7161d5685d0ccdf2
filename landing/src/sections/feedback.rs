use leptos::prelude::*;

use crate::page::use_page;

/// Status line for failed page actions. Dismissed on click.
#[component]
pub fn FeedbackToast() -> impl IntoView {
    let page = use_page();

    view! {
        <Show when=move || page.feedback.with(|f| f.is_some())>
            <div class="toast" role="status" on:click=move |_| page.feedback.set(None)>
                {move || page.feedback.with(|f| f.as_ref().map(|f| f.message.clone()))}
            </div>
        </Show>
    }
}
