use leptos::prelude::*;

use crate::content::{BillingPeriod, PricingPlan, PRICING_FAQ};
use crate::motion::reveal::stagger_delay;

#[component]
fn PlanCard(plan: &'static PricingPlan, period: BillingPeriod, index: usize) -> impl IntoView {
    let class = if plan.popular {
        "plan-card popular enter-up"
    } else {
        "plan-card enter-up"
    };
    let button_class = if plan.popular {
        "btn btn-primary btn-block"
    } else {
        "btn btn-muted btn-block"
    };

    view! {
        <div class=class style=stagger_delay(index, 100)>
            {plan.popular.then(|| view! { <div class="plan-badge">"Popular"</div> })}
            <h3>{plan.name}</h3>
            <div class="plan-price">
                <span class="price">{plan.price}</span>
                <span class="period">{period.suffix()}</span>
                {plan.per_month.map(|per_month| view! { <div class="per-month">{per_month}</div> })}
            </div>
            <p class="plan-description">{plan.description}</p>
            <button class=button_class>"Get Started"</button>
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <li><span class="check">"✓"</span>{*feature}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let (period, set_period) = signal(BillingPeriod::Monthly);

    let tab = move |value: BillingPeriod| {
        view! {
            <button
                class=move || if period.get() == value { "tab active" } else { "tab" }
                on:click=move |_| set_period.set(value)
            >
                {value.label()}
            </button>
        }
    };

    view! {
        <div class="pricing-page page-fade">
            <div class="page-header">
                <span class="pill pill-indigo">"Simple, transparent pricing"</span>
                <h1>"Choose the Right Plan for Your " <span class="text-gradient">"Needs"</span></h1>
                <p class="subtitle">"All plans include a 14-day free trial. No credit card required."</p>
            </div>

            <div class="tabs">
                {tab(BillingPeriod::Monthly)}
                {tab(BillingPeriod::Yearly)}
            </div>

            <div class="plan-grid">
                {move || {
                    let period = period.get();
                    period
                        .plans()
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| view! { <PlanCard plan=plan period=period index=index/> })
                        .collect_view()
                }}
            </div>

            <div class="faq">
                <h2>"Frequently Asked Questions"</h2>
                {PRICING_FAQ
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="faq-item">
                                <h3>{item.question}</h3>
                                <p>{item.answer}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
