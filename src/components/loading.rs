use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(default = "Loading experience...")] message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p class="loading-message">{message}</p>
        </div>
    }
}
