use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Header};
use crate::pages::*;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <a href="/" class="btn btn-primary">"Back to home"</a>
        </section>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/innovate.css"/>
        <Title text="Innovate - Transform Your Digital Experience"/>
        <Meta name="description" content="Modern solutions for modern teams: collaboration, analytics and automation in one platform"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/features") view=FeaturesPage/>
                    <Route path=path!("/pricing") view=PricingPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/showcase") view=ShowcasePage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
