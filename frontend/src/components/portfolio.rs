//! Portfolio gallery.
//!
//! Renders [`PORTFOLIO`] in declaration order. Captions are hidden until the
//! card is hovered or focused (see `.gallery-card` in `style.css`), so cards
//! carry `tabindex="0"` to reach them from the keyboard.

use leptos::*;

use crate::{PortfolioEntry, GALLERY_STAGGER_MS, PORTFOLIO, PORTFOLIO_SECTION_ID};

/// Inline style delaying the fade-in of the card at `index`.
pub fn reveal_delay(index: usize) -> String {
    format!("animation-delay: {}ms;", index * GALLERY_STAGGER_MS)
}

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section id=PORTFOLIO_SECTION_ID class="portfolio container">
            <div class="section-heading fade-in">
                <h2>"Портфолио"</h2>
                <p class="muted">"Избранные работы"</p>
            </div>

            <div class="gallery">
                {PORTFOLIO
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(index, entry)| view! { <GalleryCard entry=entry index=index/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn GalleryCard(entry: PortfolioEntry, index: usize) -> impl IntoView {
    view! {
        <figure
            class="card gallery-card scale-in"
            tabindex="0"
            style=reveal_delay(index)
            data-entry-id=entry.id.to_string()
        >
            <div class="gallery-frame">
                <img src=entry.image_url alt=entry.title class="gallery-image"/>
                <figcaption class="gallery-caption">
                    <p class="gallery-category">{entry.category}</p>
                    <h3 class="gallery-title">{entry.title}</h3>
                </figcaption>
            </div>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_delay_staggers_by_index() {
        assert_eq!(reveal_delay(0), "animation-delay: 0ms;");
        assert_eq!(reveal_delay(1), "animation-delay: 100ms;");
        assert_eq!(reveal_delay(2), "animation-delay: 200ms;");
    }
}
