use leptos::prelude::*;

use crate::components::cta::Cta;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <Hero />
            <Features />
            <Cta />
            <Footer />
        </div>
    }
}
