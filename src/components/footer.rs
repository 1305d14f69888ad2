use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>"\u{a9} 2024 BlueChat. Built with \u{2764} for meaningful connections."</p>
            </div>
        </footer>
    }
}
