//! Hero section component

use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::{HERO_IMAGE_URL, SCROLL_TARGET_ID};

/// Smooth-scroll the element with `id` into view.
fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::warn!("Scroll target #{} not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div
                class="hero-backdrop"
                style=format!("background-image: url('{}');", HERO_IMAGE_URL)
            >
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content fade-in">
                <h2 class="hero-title">"Фотограф"</h2>
                <p class="hero-tagline">"Создаю истории через объектив"</p>
                <button
                    type="button"
                    class="button button-light button-lg"
                    on:click=move |_| scroll_to(SCROLL_TARGET_ID)
                >
                    "Связаться со мной"
                </button>
            </div>
        </section>
    }
}
