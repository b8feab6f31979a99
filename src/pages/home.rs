use leptos::prelude::*;

use crate::components::{FeaturesSection, HeroSection, StatSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <HeroSection/>
            <StatSection/>
            <FeaturesSection/>
        </div>
    }
}
