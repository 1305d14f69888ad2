use leptos::prelude::*;

use crate::components::icons::{MapPin, Shield, Smartphone, Star, Users, Zap};

#[derive(Clone, Copy)]
enum FeatureIcon {
    MapPin,
    Shield,
    Users,
    Zap,
    Smartphone,
    Star,
}

struct Feature {
    icon: FeatureIcon,
    title: &'static str,
    copy: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: FeatureIcon::MapPin,
        title: "Proximity-Based",
        copy: "Find and connect with people physically near you using Bluetooth technology",
    },
    Feature {
        icon: FeatureIcon::Shield,
        title: "Ephemeral & Private",
        copy: "No permanent accounts. Your messages disappear when you leave - complete privacy",
    },
    Feature {
        icon: FeatureIcon::Users,
        title: "Room Management",
        copy: "Join chat rooms with up to 25 people. Rooms auto-lock when full for intimate conversations",
    },
    Feature {
        icon: FeatureIcon::Zap,
        title: "Real-time Chat",
        copy: "Instant messaging with live updates. No delays, no waiting - just pure connection",
    },
    Feature {
        icon: FeatureIcon::Smartphone,
        title: "Cross-Platform",
        copy: "Works seamlessly on iOS, Android, and Web. Connect regardless of your device",
    },
    Feature {
        icon: FeatureIcon::Star,
        title: "Modern Tech",
        copy: "Built with React Native, Firebase, and cutting-edge technologies for the best experience",
    },
];

fn feature_icon(icon: FeatureIcon) -> AnyView {
    match icon {
        FeatureIcon::MapPin => view! { <MapPin size=32 /> }.into_any(),
        FeatureIcon::Shield => view! { <Shield size=32 /> }.into_any(),
        FeatureIcon::Users => view! { <Users size=32 /> }.into_any(),
        FeatureIcon::Zap => view! { <Zap size=32 /> }.into_any(),
        FeatureIcon::Smartphone => view! { <Smartphone size=32 /> }.into_any(),
        FeatureIcon::Star => view! { <Star size=32 /> }.into_any(),
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <h2 class="section-title">"Why BlueChat is Revolutionary"</h2>

                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">{feature_icon(feature.icon)}</div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.copy}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_grid_has_six_cards() {
        assert_eq!(FEATURES.len(), 6);
    }

    #[test]
    fn test_feature_titles_are_unique() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in FEATURES.iter().skip(i + 1) {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
