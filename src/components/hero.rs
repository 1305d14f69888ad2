use leptos::prelude::*;

use crate::components::icons::{MapPin, MessageCircle, Shield, Users, Zap};
use crate::components::signup_form::SignupForm;

const SIGNUP_PLACEHOLDER: &str = "Enter your email for early access";
const SIGNUP_BUTTON_LABEL: &str = "Get Early Access";
const SIGNUP_SUCCESS_MESSAGE: &str =
    "You're on the list! We'll notify you when BlueChat launches.";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-background">
                <div class="gradient-orb orb-1"></div>
                <div class="gradient-orb orb-2"></div>
                <div class="gradient-orb orb-3"></div>
            </div>

            <div class="hero-content">
                <div class="logo">
                    <div class="logo-icon">
                        <MessageCircle size=40 />
                    </div>
                    <h1 class="logo-text">"BlueChat"</h1>
                </div>

                <h2 class="hero-title">"Chat with people nearby"</h2>

                <p class="hero-subtitle">
                    "Discover and connect with people around you through proximity-based ephemeral messaging"
                </p>

                <SignupForm
                    placeholder=SIGNUP_PLACEHOLDER
                    button_label=SIGNUP_BUTTON_LABEL
                    success_message=SIGNUP_SUCCESS_MESSAGE
                    form_class="signup-form"
                />

                <div class="scroll-indicator">
                    <div class="scroll-text">"Scroll to learn more"</div>
                    <div class="scroll-arrow"></div>
                </div>
            </div>

            <div class="hero-visual">
                <div class="hero-visual-content">
                    <h3>"Revolutionary Social Experience"</h3>
                    <p>"Connect with people physically near you through innovative proximity technology"</p>

                    <div class="feature-preview">
                        <div class="feature-preview-item">
                            <div class="feature-preview-icon">
                                <MapPin size=24 />
                            </div>
                            <div class="feature-preview-text">
                                <h4>"Proximity Detection"</h4>
                                <p>"Find people within 50 meters using Bluetooth"</p>
                            </div>
                        </div>
                        <div class="feature-preview-item">
                            <div class="feature-preview-icon">
                                <Shield size=24 />
                            </div>
                            <div class="feature-preview-text">
                                <h4>"Ephemeral Privacy"</h4>
                                <p>"Messages disappear when you leave - no data retention"</p>
                            </div>
                        </div>
                        <div class="feature-preview-item">
                            <div class="feature-preview-icon">
                                <Users size=24 />
                            </div>
                            <div class="feature-preview-text">
                                <h4>"Intimate Groups"</h4>
                                <p>"Join rooms with up to 25 people for meaningful conversations"</p>
                            </div>
                        </div>
                        <div class="feature-preview-item">
                            <div class="feature-preview-icon">
                                <Zap size=24 />
                            </div>
                            <div class="feature-preview-text">
                                <h4>"Real-time Chat"</h4>
                                <p>"Instant messaging with live updates and notifications"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_signup_copy_is_exact() {
        assert_eq!(SIGNUP_PLACEHOLDER, "Enter your email for early access");
        assert_eq!(SIGNUP_BUTTON_LABEL, "Get Early Access");
        assert_eq!(
            SIGNUP_SUCCESS_MESSAGE,
            "You're on the list! We'll notify you when BlueChat launches."
        );
    }
}
