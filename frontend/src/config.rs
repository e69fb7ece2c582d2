//! Application configuration.
//!
//! Centralized constants for the portfolio page. Everything here is
//! fixed at compile time; the page reads no runtime configuration.

use crate::types::PortfolioEntry;

/// Remote endpoint receiving contact requests.
///
/// Accepts `POST` with a JSON body `{name, email, phone, message}`.
/// Any 2xx status means the request was accepted.
pub const CONTACT_ENDPOINT: &str =
    "https://functions.poehali.dev/35f8460b-004f-4a36-9f7a-1e117e975e51";

/// Photographer's name, shown in the header, footer and document title.
pub const SITE_OWNER: &str = "Александра Смирнова";

/// Copyright year printed in the footer.
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Background image of the hero banner.
pub const HERO_IMAGE_URL: &str = "https://cdn.poehali.dev/projects/abe62bad-860d-4320-a8ed-cdd299d38cec/files/bda4bc74-ba3b-4cf8-8f95-05648acc3f2e.jpg";

/// DOM id of the contact section (hero button scrolls here).
pub const SCROLL_TARGET_ID: &str = "contact";

/// DOM id of the portfolio section.
pub const PORTFOLIO_SECTION_ID: &str = "portfolio";

/// Maximum toasts stacked on screen at once.
pub const MAX_TOASTS: usize = 3;

/// How long a toast stays visible (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Stagger between gallery cards' fade-in (in milliseconds).
pub const GALLERY_STAGGER_MS: usize = 100;

/// Gallery entries, rendered in declaration order.
pub const PORTFOLIO: [PortfolioEntry; 3] = [
    PortfolioEntry {
        id: 1,
        image_url: "https://cdn.poehali.dev/projects/abe62bad-860d-4320-a8ed-cdd299d38cec/files/3fc55912-d57e-454b-abef-f4ebfa36ed4a.jpg",
        title: "Портретная съёмка",
        category: "Портрет",
    },
    PortfolioEntry {
        id: 2,
        image_url: "https://cdn.poehali.dev/projects/abe62bad-860d-4320-a8ed-cdd299d38cec/files/62c26992-845f-471d-bb65-82132d6c585a.jpg",
        title: "Пейзажная фотография",
        category: "Пейзаж",
    },
    PortfolioEntry {
        id: 3,
        image_url: "https://cdn.poehali.dev/projects/abe62bad-860d-4320-a8ed-cdd299d38cec/files/bda4bc74-ba3b-4cf8-8f95-05648acc3f2e.jpg",
        title: "Предметная съёмка",
        category: "Предметка",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_portfolio_ids_unique_and_ordered() {
        let ids: Vec<u32> = PORTFOLIO.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), PORTFOLIO.len());
    }

    #[test]
    fn test_portfolio_images_are_absolute() {
        for entry in PORTFOLIO.iter() {
            assert!(entry.image_url.starts_with("https://"), "{}", entry.image_url);
        }
        assert!(HERO_IMAGE_URL.starts_with("https://"));
    }

    #[test]
    fn test_contact_endpoint_is_https() {
        assert!(CONTACT_ENDPOINT.starts_with("https://"));
    }
}
