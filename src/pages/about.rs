use leptos::html::Div;
use leptos::prelude::*;

use crate::components::Reveal;
use crate::content::{Milestone, TeamMember, TEAM, TIMELINE, VALUES};
use crate::hooks::use_reveal;
use crate::motion::reveal::{reveal_class, stagger_delay};
use crate::motion::Threshold;

const ITEM_STAGGER_MS: u32 = 100;

#[component]
fn TimelineEntry(milestone: &'static Milestone, index: usize) -> impl IntoView {
    let side = if Milestone::slides_from_left(index) {
        "timeline-item from-left"
    } else {
        "timeline-item from-right"
    };

    view! {
        <Reveal threshold=Threshold::HIGH class=side delay_ms=index as u32 * ITEM_STAGGER_MS>
            <div class="timeline-line"></div>
            <div class="timeline-year">{milestone.year}</div>
            <div class="timeline-dot"></div>
            <div class="timeline-body">
                <h3>{milestone.title}</h3>
                <p>{milestone.description}</p>
            </div>
        </Reveal>
    }
}

#[component]
fn TeamCard(member: &'static TeamMember, index: usize) -> impl IntoView {
    view! {
        <Reveal threshold=Threshold::MEDIUM class="team-card" delay_ms=index as u32 * ITEM_STAGGER_MS>
            <div class="team-photo">
                <img src=member.image alt=member.name/>
                <div class="team-role-overlay">
                    <h3>{member.role}</h3>
                </div>
            </div>
            <h3 class="team-name">{member.name}</h3>
            <p class="team-bio">{member.bio}</p>
        </Reveal>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let header_ref = NodeRef::<Div>::new();
    let header_visible = use_reveal(header_ref, Threshold::LOW);
    let header_class = move |class: &'static str| move || format!("{} {}", class, reveal_class(header_visible.get()));

    view! {
        <div class="about-page page-fade">
            <div node_ref=header_ref class="about-hero">
                <div class="about-hero-inner">
                    <h1 class=header_class("about-title")>"Our Story"</h1>
                    <p class=header_class("about-lede") style=stagger_delay(2, ITEM_STAGGER_MS)>
                        "We're on a mission to revolutionize how teams collaborate and build amazing products together. "
                        "Our platform combines cutting-edge technology with intuitive design to solve complex problems with elegant solutions."
                    </p>
                    <div class=header_class("about-actions") style=stagger_delay(3, ITEM_STAGGER_MS)>
                        <button class="btn btn-primary">"Join Our Team"</button>
                        <button class="btn btn-outline">"Contact Us"</button>
                    </div>
                </div>
            </div>

            <section class="values">
                <div class="section-header">
                    <h2>"Our Values"</h2>
                    <p>"These principles guide everything we do"</p>
                </div>
                <div class="values-grid">
                    {VALUES
                        .iter()
                        .enumerate()
                        .map(|(index, value)| {
                            view! {
                                <div class="value enter-up" style=stagger_delay(index + 2, ITEM_STAGGER_MS)>
                                    <div class="value-icon">{value.icon}</div>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="timeline">
                <div class="section-header">
                    <h2>"Our Journey"</h2>
                    <p>"From inception to industry leader"</p>
                </div>
                <div class="timeline-list">
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(index, milestone)| view! { <TimelineEntry milestone=milestone index=index/> })
                        .collect_view()}
                </div>
            </section>

            <section class="team">
                <div class="section-header">
                    <h2>"Meet Our Team"</h2>
                    <p>"The talented people behind our success"</p>
                </div>
                <div class="team-grid">
                    {TEAM
                        .iter()
                        .enumerate()
                        .map(|(index, member)| view! { <TeamCard member=member index=index/> })
                        .collect_view()}
                </div>
            </section>

            <section class="cta-band">
                <h2>"Join Our Mission"</h2>
                <p>"We're always looking for talented individuals who share our passion for innovation."</p>
                <div class="cta-buttons">
                    <button class="btn btn-light">"View Open Positions"</button>
                    <button class="btn btn-outline-light">"Learn About Our Culture"</button>
                </div>
            </section>
        </div>
    }
}
