use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::icons::{ArrowRight, CheckCircle};
use crate::signup::SignupAttempt;

/// Email-capture form. Instantiated once in the hero and once in the
/// CTA section; each instance owns its own [`SignupAttempt`] and the two
/// never share state.
#[component]
pub fn SignupForm(
    /// Placeholder text for the email input
    #[prop(into)]
    placeholder: String,
    /// Label on the submit button
    #[prop(into)]
    button_label: String,
    /// Confirmation copy shown once submission completes
    #[prop(into)]
    success_message: String,
    /// Class on the form element, e.g. "signup-form" or "cta-form"
    #[prop(into)]
    form_class: String,
) -> impl IntoView {
    let (attempt, set_attempt) = signal(SignupAttempt::new());
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    // The browser's `required` check already blocks empty submits;
    // begin_submit re-checks and also rejects re-entry while a
    // submission is in flight (the disabled button covers the UI side).
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = false;
        set_attempt.update(|a| accepted = a.begin_submit());
        if !accepted {
            return;
        }
        set_error_message.set(None);
        let email = attempt.with_untracked(|a| a.email().to_string());
        spawn_local(async move {
            match api::submit_email(&email).await {
                Ok(()) => {
                    set_attempt.update(|a| a.finish_submit(true));
                }
                Err(e) => {
                    log::error!("signup submission failed: {}", e);
                    set_error_message.set(Some(format!("Something went wrong: {}", e)));
                    set_attempt.update(|a| a.finish_submit(false));
                }
            }
        });
    };

    view! {
        {move || {
            if attempt.with(|a| a.is_submitted()) {
                let message = success_message.clone();
                view! {
                    <div class="success-message">
                        <CheckCircle size=24 />
                        <span>{message}</span>
                    </div>
                }
                .into_any()
            } else {
                let class = form_class.clone();
                let placeholder = placeholder.clone();
                let label = button_label.clone();
                view! {
                    <form class=class on:submit=submit>
                        <div class="input-group">
                            <input
                                type="email"
                                placeholder=placeholder
                                required
                                class="email-input"
                                prop:value=move || attempt.with(|a| a.email().to_string())
                                on:input=move |ev| {
                                    set_attempt.update(|a| a.set_email(event_target_value(&ev)));
                                }
                                disabled=move || attempt.with(|a| a.is_submitting())
                            />
                            <button
                                type="submit"
                                class="submit-btn"
                                disabled=move || attempt.with(|a| a.is_submitting())
                            >
                                {move || {
                                    if attempt.with(|a| a.is_submitting()) {
                                        view! { <div class="loading-spinner"></div> }.into_any()
                                    } else {
                                        view! {
                                            <span class="submit-label">
                                                {label.clone()}
                                                <ArrowRight size=20 />
                                            </span>
                                        }
                                        .into_any()
                                    }
                                }}
                            </button>
                        </div>
                        {move || {
                            error_message
                                .get()
                                .map(|err| view! { <p class="form-error">{err}</p> })
                        }}
                    </form>
                }
                .into_any()
            }
        }}
    }
}
