use leptos::ev::MouseEvent;
use leptos::html::Section;
use leptos::prelude::*;

use crate::content::{Feature, FEATURES};
use crate::hooks::{pointer_sample, use_reveal};
use crate::motion::reveal::{reveal_class, stagger_delay};
use crate::motion::{Intensity, Threshold, TiltTracker};

const CARD_STAGGER_MS: u32 = 100;

#[component]
fn FeatureCard(
    feature: &'static Feature,
    index: usize,
    visible: ReadSignal<bool>,
    tracker: RwSignal<TiltTracker<&'static str>>,
) -> impl IntoView {
    let id = feature.id;

    let on_move = move |ev: MouseEvent| {
        if let Some(sample) = pointer_sample(&ev, Intensity::CARD) {
            tracker.update(|t| t.on_move(id, &sample));
        }
    };
    let on_leave = move |_: MouseEvent| tracker.update(|t| t.on_leave());

    view! {
        <div
            class=move || format!("feature-slot perspective {}", reveal_class(visible.get()))
            style=stagger_delay(index, CARD_STAGGER_MS)
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            <div
                class=move || {
                    if tracker.with(|t| t.is_active(&id)) {
                        "feature-card glass-card preserve-3d is-active"
                    } else {
                        "feature-card glass-card preserve-3d"
                    }
                }
                style=move || format!("transform: {}", tracker.with(|t| t.transform_for(&id)))
            >
                <div class="feature-icon">{feature.icon}</div>
                <h3>{feature.title}</h3>
                <p>{feature.description}</p>
                <a href="#" class="learn-more">"Learn more →"</a>
            </div>
        </div>
    }
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let visible = use_reveal(section_ref, Threshold::LOW);
    let tracker = RwSignal::new(TiltTracker::<&'static str>::new());

    view! {
        <section node_ref=section_ref id="solutions" class="features-section">
            <div class=move || format!("section-header {}", reveal_class(visible.get()))>
                <span class="pill pill-indigo">"Why Choose Us"</span>
                <h2>"Features designed for the modern workflow"</h2>
                <p>
                    "Our platform combines powerful functionality with elegant simplicity "
                    "to enhance your productivity and experience."
                </p>
            </div>

            <div class="features-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        view! { <FeatureCard feature=feature index=index visible=visible tracker=tracker/> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
