//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 Estately • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="/" class="footer-link">"Buy"</a>
                <a href="/properties/Rental" class="footer-link">"Rent"</a>
                <a href="/seller" class="footer-link">"Sell"</a>
            </div>
        </footer>
    }
}
