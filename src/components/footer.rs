use std::time::Duration;

use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{FOOTER_COMPANY_LINKS, FOOTER_LEGAL_LINKS, FOOTER_PRODUCT_LINKS};
use crate::server_fns::SubscribeNewsletter;

const SUBSCRIBED_FLASH: Duration = Duration::from_secs(3);

fn link_column(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h3>{title}</h3>
            <ul>
                {links
                    .iter()
                    .map(|item| view! { <li><a href="#">{*item}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    let subscribe = ServerAction::<SubscribeNewsletter>::new();
    let (email, set_email) = signal(String::new());
    let (subscribed, set_subscribed) = signal(false);

    // Clear the field and show the confirmation for a few seconds
    Effect::new(move |_| {
        if let Some(Ok(())) = subscribe.value().get() {
            set_email.set(String::new());
            set_subscribed.set(true);
            set_timeout(move || set_subscribed.set(false), SUBSCRIBED_FLASH);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        subscribe.dispatch(SubscribeNewsletter { email: email.get_untracked() });
    };

    let button_label = move || {
        if subscribe.pending().get() {
            "Subscribing..."
        } else if subscribed.get() {
            "Subscribed!"
        } else {
            "Subscribe"
        }
    };

    view! {
        <footer class="site-footer">
            <div class="footer-top">
                <div class="footer-column footer-brand">
                    <a href="/" class="brand">
                        <span class="text-gradient">"Innovate"</span>
                    </a>
                    <p>"Transforming digital experiences with intuitive design and powerful technology."</p>
                </div>

                {link_column("Product", FOOTER_PRODUCT_LINKS)}
                {link_column("Company", FOOTER_COMPANY_LINKS)}

                <div class="footer-column newsletter">
                    <h3>"Stay updated"</h3>
                    <p>"Subscribe to our newsletter for the latest updates and news."</p>
                    <form on:submit=on_submit>
                        <input
                            type="email"
                            name="email"
                            required
                            placeholder="Your email address"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class=move || if subscribed.get() { "btn btn-success" } else { "btn btn-primary" }
                            disabled=move || subscribe.pending().get() || subscribed.get()
                        >
                            {button_label}
                        </button>
                        {move || {
                            subscribe
                                .value()
                                .get()
                                .and_then(|result| result.err())
                                .map(|e| view! { <p class="error">{e.to_string()}</p> })
                        }}
                    </form>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} Innovate, Inc. All rights reserved.", year)}</p>
                <div class="footer-legal">
                    {FOOTER_LEGAL_LINKS
                        .iter()
                        .map(|item| view! { <a href="#">{*item}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
