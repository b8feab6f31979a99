use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::hooks::{pointer_sample, use_mounted_after};
use crate::motion::reveal::reveal_class;
use crate::motion::{Intensity, TiltTracker};

const ENTER_DELAY: Duration = Duration::from_millis(200);

#[component]
pub fn HeroSection() -> impl IntoView {
    let loaded = use_mounted_after(ENTER_DELAY);
    let tracker = RwSignal::new(TiltTracker::<()>::new());

    let on_move = move |ev: MouseEvent| {
        if let Some(sample) = pointer_sample(&ev, Intensity::HERO) {
            tracker.update(|t| t.on_move((), &sample));
        }
    };
    let on_leave = move |_: MouseEvent| tracker.update(|t| t.on_leave());

    let stage = move |class: &'static str| move || format!("{} {}", class, reveal_class(loaded.get()));

    view! {
        <section class="hero" on:mousemove=on_move on:mouseleave=on_leave>
            <div class="hero-backdrop"></div>

            <div class="hero-inner">
                <div class="hero-row">
                    <div class=stage("hero-copy")>
                        <span class="pill">"Introducing the future"</span>
                        <h1>"Elevate your digital " <span class="text-gradient">"experience"</span></h1>
                        <p class="hero-lede">
                            "Discover the perfect blend of innovation and simplicity with our cutting-edge platform. "
                            "Designed to transform how you interact with technology."
                        </p>
                        <div class="cta-buttons">
                            <A href="/pricing" attr:class="btn btn-primary">"Get Started"</A>
                            <A href="/showcase" attr:class="btn btn-secondary">"Watch Demo"</A>
                        </div>
                        <div class="social-proof">
                            <div class="avatars">
                                {(0..4).map(|_| view! { <span class="avatar"></span> }).collect_view()}
                            </div>
                            <span><strong>"2,500+"</strong>" satisfied customers"</span>
                        </div>
                    </div>

                    <div class=stage("hero-art perspective")>
                        <div
                            class="hero-art-stage preserve-3d"
                            style=move || format!("transform: {}", tracker.with(|t| t.tilt().transform()))
                        >
                            <div class="shape shape-main animate-float">
                                <div class="shape-core animate-morph"></div>
                                <div class="orb orb-pink animate-float" style="animation-delay: 1.5s"></div>
                                <div class="orb orb-yellow animate-float" style="animation-delay: 0.8s"></div>
                                <div class="tile tile-emerald animate-float" style="animation-delay: 1.2s"></div>
                                <div class="tile tile-violet animate-float" style="animation-delay: 2s"></div>
                                <div class="shape-centre">
                                    <div class="pulse"></div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class=stage("logo-strip")>
                    <p>"Trusted by innovative companies worldwide"</p>
                    <div class="logos">
                        {(1..=5)
                            .map(|i| {
                                view! {
                                    <div class="logo-placeholder" style=format!("animation-delay: {:.1}s", i as f64 * 0.2)></div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class=stage("scroll-indicator")>
                <div class="scroll-mouse"><span></span></div>
            </div>
        </section>
    }
}
