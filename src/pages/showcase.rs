use leptos::html::Div;
use leptos::prelude::*;

use crate::components::{Carousel, LoadingScreen, Reveal};
use crate::hooks::use_scroll_progress;
use crate::models::ShowcaseItem;
use crate::motion::{parallax_offset, Threshold};
use crate::server_fns::get_showcase_items;

/// Background drift across the full height of the hero
const BACKGROUND_DRIFT_PERCENT: f64 = 30.0;

#[component]
fn ShowcaseRow(item: ShowcaseItem, index: usize) -> impl IntoView {
    let class = if index % 2 == 1 { "showcase-row reversed" } else { "showcase-row" };
    let alt = item.title.clone();

    view! {
        <Reveal threshold=Threshold::HIGH class=class delay_ms=100>
            <div class="showcase-media">
                <img src=item.image alt=alt/>
                <div class="showcase-tags">
                    {item.tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                </div>
            </div>
            <div class="showcase-copy">
                <h3>{item.title}</h3>
                <p>{item.description}</p>
                <button class="btn btn-primary">"Learn More"</button>
            </div>
        </Reveal>
    }
}

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let items = Resource::new(|| (), |_| get_showcase_items());
    let hero_ref = NodeRef::<Div>::new();
    let progress = use_scroll_progress(hero_ref);

    let background_style = move || {
        format!(
            "transform: translateY({:.2}%)",
            parallax_offset(progress.get(), BACKGROUND_DRIFT_PERCENT)
        )
    };

    view! {
        <Suspense fallback=|| view! { <LoadingScreen message="Loading showcase..."/> }>
            {move || {
                items
                    .get()
                    .map(|result| match result {
                        Ok(list) => {
                            view! {
                                <div class="showcase-page page-fade">
                                    <div node_ref=hero_ref class="showcase-hero">
                                        <div class="showcase-hero-bg" style=background_style></div>
                                        <div class="showcase-hero-shade"></div>
                                        <div class="showcase-hero-copy">
                                            <h1 class="enter-up">"Our " <span class="accent">"Showcase"</span></h1>
                                            <p class="enter-up" style="transition-delay: 200ms">
                                                "Explore our latest projects and see how our platform transforms businesses"
                                            </p>
                                            <div class="cta-buttons enter-up" style="transition-delay: 400ms">
                                                <button class="btn btn-light">"View All Projects"</button>
                                                <button class="btn btn-outline-light">"Request a Demo"</button>
                                            </div>
                                        </div>
                                    </div>

                                    <section class="featured-projects">
                                        <div class="section-header">
                                            <h2>"Featured Projects"</h2>
                                            <p>"Swipe through our most impressive implementations"</p>
                                        </div>
                                        <Carousel items=list.clone()/>
                                    </section>

                                    <div class="showcase-rows">
                                        {list
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, item)| view! { <ShowcaseRow item=item index=index/> })
                                            .collect_view()}
                                    </div>

                                    <section class="cta-band">
                                        <h2>"Ready to transform your business?"</h2>
                                        <p>
                                            "Join thousands of companies already using our platform to drive growth and innovation."
                                        </p>
                                        <div class="cta-buttons">
                                            <button class="btn btn-light">"Get Started"</button>
                                            <button class="btn btn-outline-light">"Contact Sales"</button>
                                        </div>
                                    </section>
                                </div>
                            }
                                .into_any()
                        }
                        Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
