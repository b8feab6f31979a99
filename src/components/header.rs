use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::NAV_LINKS;
use crate::hooks::use_scrolled;

#[component]
pub fn Header() -> impl IntoView {
    let scrolled = use_scrolled();

    view! {
        <header class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
            <div class="header-inner">
                <A href="/" attr:class="brand">
                    <span class="text-gradient">"Innovate"</span>
                </A>

                <nav class="header-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| view! { <A href=*href attr:class="header-link">{*label}</A> })
                        .collect_view()}
                </nav>

                <div class="header-actions">
                    <button class="btn btn-ghost">"Sign In"</button>
                    <A href="/pricing" attr:class="btn btn-primary">"Get Started"</A>
                </div>
            </div>
        </header>
    }
}
