use leptos::prelude::*;

use crate::components::FeaturesSection;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="features-page page-fade">
            <div class="page-header">
                <h1>"Powerful " <span class="text-gradient">"Features"</span> " That Make a Difference"</h1>
                <p class="subtitle">
                    "Discover the tools and capabilities that set our platform apart and help you achieve more."
                </p>
            </div>
            <FeaturesSection/>
        </div>
    }
}
