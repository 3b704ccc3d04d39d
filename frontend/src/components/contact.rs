use chrono::{SecondsFormat, Utc};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, RequestMode};
use yew::prelude::*;

use crate::behavior::contact_form::{
    ContactAction, ContactForm, Field, SubmitError, SubmitStatus, BANNER_MS, SETTLE_MS,
};
use crate::behavior::scroll_spy::SectionId;
use crate::components::reveal::Reveal;
use crate::config;

/// Fires the sheet request in the background.
///
/// The endpoint answers opaquely in no-cors mode, so the response is never
/// inspected. Only failures to build the request come back as errors.
fn send_submission(payload: String) -> Result<(), SubmitError> {
    web_sys::Url::new(config::FORM_ENDPOINT)
        .map_err(|e| SubmitError::Request(format!("{:?}", e)))?;

    wasm_bindgen_futures::spawn_local(async move {
        let result = Request::post(config::FORM_ENDPOINT)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(payload)
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("contact submission did not go through: {}", e);
        }
    });
    Ok(())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);

    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |submitting: &bool| {
                let pending = submitting
                    .then(|| Timeout::new(SETTLE_MS, move || dispatcher.dispatch(ContactAction::Settle)));
                move || drop(pending)
            },
            form.submitting,
        );
    }

    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |status: &Option<SubmitStatus>| {
                let pending = status.map(|_| {
                    Timeout::new(BANNER_MS, move || dispatcher.dispatch(ContactAction::ClearStatus))
                });
                move || drop(pending)
            },
            form.status,
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.submitting {
                return;
            }
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            let sent = form
                .fields
                .to_payload(&timestamp)
                .and_then(send_submission);
            match sent {
                Ok(()) => form.dispatch(ContactAction::Begin),
                Err(err) => {
                    log::error!("contact form submit failed: {}", err);
                    form.dispatch(ContactAction::Fail);
                }
            }
        })
    };

    let on_input = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
                    .map(|area| area.value()),
                _ => e
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value()),
            };
            if let Some(value) = value {
                dispatcher.dispatch(ContactAction::Edit(field, value));
            }
        })
    };

    html! {
        <section id={SectionId::Contact.as_str()} class="contact">
            <Reveal class="section-header">
                <p class="contact-kicker">{"Let's work together"}</p>
                <h2 class="section-title">{"Ready to Connect?"}</h2>
                <div class="section-underline"></div>
                <p class="section-subtitle">
                    {"Have a project in mind or just want to say hello? Drop me a message and I'll get back to you."}
                </p>
            </Reveal>

            <Reveal class="contact-card" delay={0.2}>
                <form class="contact-form" onsubmit={onsubmit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="contact-name">{"Full Name *"}</label>
                            <input
                                id="contact-name"
                                type="text"
                                name="name"
                                placeholder="Your name"
                                required=true
                                value={form.fields.name.clone()}
                                oninput={on_input(Field::Name)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-email">{"Email Address *"}</label>
                            <input
                                id="contact-email"
                                type="email"
                                name="email"
                                placeholder="you@example.com"
                                required=true
                                value={form.fields.email.clone()}
                                oninput={on_input(Field::Email)}
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="contact-phone">{"Phone Number *"}</label>
                        <input
                            id="contact-phone"
                            type="tel"
                            name="phone"
                            placeholder="+91 00000 00000"
                            required=true
                            value={form.fields.phone.clone()}
                            oninput={on_input(Field::Phone)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="contact-message">{"Message *"}</label>
                        <textarea
                            id="contact-message"
                            name="message"
                            rows="5"
                            placeholder="Tell me about your project..."
                            required=true
                            value={form.fields.message.clone()}
                            oninput={on_input(Field::Message)}
                        />
                    </div>

                    <button type="submit" class="contact-submit" disabled={form.submitting}>
                        if form.submitting {
                            <span class="spinner"></span>
                            {"Sending..."}
                        } else {
                            {"Send Message ➤"}
                        }
                    </button>

                    {
                        match form.status {
                            Some(SubmitStatus::Success) => html! {
                                <div class="form-banner success">
                                    {"Message sent successfully! I'll get back to you soon."}
                                </div>
                            },
                            Some(SubmitStatus::Failure) => html! {
                                <div class="form-banner error">
                                    {"Failed to send message. Please try again or email me directly."}
                                </div>
                            },
                            None => html! {},
                        }
                    }
                </form>
            </Reveal>

            <style>
                {r#"
                .contact {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .contact-kicker {
                    color: var(--primary);
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin: 0;
                }
                .contact-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--border-color);
                    background: var(--bg-card);
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .form-group label {
                    font-size: 0.875rem;
                    color: var(--text-secondary);
                }
                .form-group input,
                .form-group textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border-color);
                    background: var(--bg-secondary);
                    color: var(--text-primary);
                    font: inherit;
                }
                .form-group input:focus,
                .form-group textarea:focus {
                    outline: none;
                    border-color: var(--primary);
                }
                .contact-submit {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 0.75rem;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                }
                .contact-submit:disabled {
                    opacity: 0.7;
                    cursor: not-allowed;
                }
                .spinner {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid rgba(255, 255, 255, 0.4);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .form-banner {
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    text-align: center;
                }
                .form-banner.success {
                    color: #4ade80;
                    background: rgba(34, 197, 94, 0.1);
                    border: 1px solid rgba(34, 197, 94, 0.3);
                }
                .form-banner.error {
                    color: #f87171;
                    background: rgba(239, 68, 68, 0.1);
                    border: 1px solid rgba(239, 68, 68, 0.3);
                }
                @media (max-width: 640px) {
                    .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
