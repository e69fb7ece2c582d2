//! Portfolio - Frontend Rust/Leptos Application
//!
//! A WebAssembly one-page site for a photographer: hero banner,
//! portfolio gallery and a contact form posting to a remote endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (owner name, section anchors)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HomePage                                                    │
//! │  ├── Hero (banner, scroll-to-contact button)                │
//! │  ├── PortfolioSection (static gallery)                      │
//! │  └── ContactSection (form → services::contact)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster (success / failure notifications)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Compile-time constants and gallery data
//! - [`types`] - Common types (ContactForm, Toast, AppError, etc.)
//! - [`components`] - UI components (Header, Hero, Portfolio, Contact, etc.)
//! - [`services`] - Remote communication (contact submission)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Portfolio
    PortfolioEntry,
    // Contact
    ContactField, ContactForm, FieldKind,
    // Toasts
    Toast, ToastKind,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and logger, then mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📷 Portfolio - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{} - Фотограф", SITE_OWNER)/>
        <Meta name="description" content="Портретная, пейзажная и предметная съёмка. Портфолио и контакты."/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let toasts = create_rw_signal(Vec::<ToastEntry>::new());

    view! {
        <div class="page">
            <Header/>
            <Hero/>
            <PortfolioSection/>
            <ContactSection toasts=toasts/>
            <Footer/>
            <Toaster toasts=toasts/>
        </div>
    }
}
