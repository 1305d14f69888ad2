use leptos::prelude::*;

use crate::components::signup_form::SignupForm;

const CTA_PLACEHOLDER: &str = "Your email address";
const CTA_BUTTON_LABEL: &str = "Get Early Access";
const CTA_SUCCESS_MESSAGE: &str = "You're all set! We'll be in touch soon.";

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="container">
                <div class="cta-content">
                    <h2>"Ready to revolutionize how you connect?"</h2>
                    <p>"Join thousands of early adopters who are excited about proximity-based social networking"</p>

                    <SignupForm
                        placeholder=CTA_PLACEHOLDER
                        button_label=CTA_BUTTON_LABEL
                        success_message=CTA_SUCCESS_MESSAGE
                        form_class="cta-form"
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_signup_copy_is_exact() {
        assert_eq!(CTA_PLACEHOLDER, "Your email address");
        assert_eq!(CTA_BUTTON_LABEL, "Get Early Access");
        assert_eq!(CTA_SUCCESS_MESSAGE, "You're all set! We'll be in touch soon.");
    }
}
