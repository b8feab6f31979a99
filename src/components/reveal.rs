use leptos::html::Div;
use leptos::prelude::*;

use crate::hooks::use_reveal;
use crate::motion::reveal::reveal_class;
use crate::motion::Threshold;

/// Wraps its children in a block that fades in the first time it scrolls into view
#[component]
pub fn Reveal(
    threshold: Threshold,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let visible = use_reveal(node_ref, threshold);

    view! {
        <div
            node_ref=node_ref
            class=move || format!("{} {}", class, reveal_class(visible.get()))
            style=format!("transition-delay: {}ms", delay_ms)
        >
            {children()}
        </div>
    }
}
