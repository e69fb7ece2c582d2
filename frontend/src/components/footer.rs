//! Footer component

use leptos::*;

use crate::{COPYRIGHT_YEAR, SITE_OWNER};

/// Social links: (accessible label, icon class).
const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "icon-instagram"),
    ("Email", "icon-mail"),
    ("Телефон", "icon-phone"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p class="muted footer-copy">
                    {format!("© {} {}. Все права защищены.", COPYRIGHT_YEAR, SITE_OWNER)}
                </p>
                <div class="footer-links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(label, icon)| view! {
                            <a href="#" class="footer-link" aria-label={*label} title={*label}>
                                <span class=format!("icon {}", icon) aria-hidden="true"></span>
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
