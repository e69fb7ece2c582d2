//! Header component

use leptos::*;

use crate::{PORTFOLIO_SECTION_ID, SCROLL_TARGET_ID, SITE_OWNER};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="container nav">
                <h1 class="logo">{SITE_OWNER}</h1>
                <div class="nav-links">
                    <a href=format!("#{}", PORTFOLIO_SECTION_ID) class="nav-link">"Портфолио"</a>
                    <a href=format!("#{}", SCROLL_TARGET_ID) class="nav-link">"Контакты"</a>
                </div>
            </nav>
        </header>
    }
}
