//! Contact Form Component
//!
//! Collects name/email/message and hands the payload to
//! [`crate::services::contact`], which walks the configured transports in
//! order. Field values survive a failed send so nothing is lost to a flaky
//! connection.

use leptos::prelude::*;
use shared::dto::contact::ContactRequest;

use crate::services::contact::{deliver, validate, DeliveryOutcome};
use crate::state::config::use_site_config;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_site_config();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(None::<String>);
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let payload = ContactRequest::from_fields(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        );
        if let Err(reason) = validate(&payload) {
            set_status.set(Some(reason.to_string()));
            return;
        }

        set_sending.set(true);
        set_status.set(Some("Sending…".to_string()));

        let config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = deliver(&config, &payload).await;
            set_sending.set(false);
            match outcome {
                DeliveryOutcome::Delivered => {
                    set_status.set(Some("Thanks! Your message is on its way.".to_string()));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                }
                DeliveryOutcome::MailFallback => {
                    set_status.set(Some(
                        "Opening your email app as a fallback…".to_string(),
                    ));
                }
                DeliveryOutcome::Failed => {
                    set_status.set(Some("Network error. Please try again.".to_string()));
                }
            }
        });
    };

    view! {
        <section class="contact" id="contact">
            <h2>"Say hello"</h2>
            <form id="contact-form" on:submit=on_submit>
                <input
                    type="text"
                    id="contact-name"
                    name="name"
                    placeholder="Your name"
                    autocomplete="name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    id="contact-email"
                    name="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <textarea
                    id="contact-message"
                    name="message"
                    placeholder="What's on your mind?"
                    rows="6"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn-send" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending…" } else { "Send" }}
                </button>
                <p class="form-status" id="form-status" role="status" aria-live="polite">
                    {move || status.get()}
                </p>
            </form>
        </section>
    }
}
