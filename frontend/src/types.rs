//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Portfolio Types** - Static gallery records
//! - **Contact Types** - Contact form value and its fields
//! - **Toast Types** - User-facing notifications
//! - **Error Types** - Frontend error handling

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Portfolio Types
// =============================================================================

/// A single gallery image.
///
/// Declared once in [`crate::config::PORTFOLIO`] and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioEntry {
    /// Stable identifier, unique within the gallery
    pub id: u32,
    /// Absolute URL on the image CDN
    pub image_url: &'static str,
    /// Caption title
    pub title: &'static str,
    /// Caption category (shown above the title)
    pub category: &'static str,
}

// =============================================================================
// Contact Types
// =============================================================================

/// Contact form value.
///
/// Serialises to the exact JSON body the contact endpoint expects:
/// `{"name":..,"email":..,"phone":..,"message":..}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Optional, sent as an empty string when left blank
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// JSON request body.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::Encode(e.to_string()))
    }
}

/// How a contact field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line `<input>` with the given `type` attribute
    Input(&'static str),
    /// Multi-line `<textarea>`
    TextArea,
}

/// One field of the [`ContactForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// All fields, in display order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Current value of this field.
    pub fn value<'a>(&self, form: &'a ContactForm) -> &'a str {
        match self {
            ContactField::Name => &form.name,
            ContactField::Email => &form.email,
            ContactField::Phone => &form.phone,
            ContactField::Message => &form.message,
        }
    }

    /// Replace this field's value.
    pub fn set(&self, form: &mut ContactForm, value: String) {
        match self {
            ContactField::Name => form.name = value,
            ContactField::Email => form.email = value,
            ContactField::Phone => form.phone = value,
            ContactField::Message => form.message = value,
        }
    }

    /// DOM id, also the JSON key.
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Ваше имя",
            ContactField::Email => "Email",
            ContactField::Phone => "Телефон",
            ContactField::Message => "Сообщение",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Иван Иванов",
            ContactField::Email => "ivan@example.com",
            ContactField::Phone => "+7 (999) 123-45-67",
            ContactField::Message => "Расскажите о вашей идее съёмки...",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            ContactField::Name => FieldKind::Input("text"),
            ContactField::Email => FieldKind::Input("email"),
            ContactField::Phone => FieldKind::Input("tel"),
            ContactField::Message => FieldKind::TextArea,
        }
    }

    /// Phone is the only optional field.
    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Phone)
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Request accepted
    Success,
    /// Anything went wrong
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }

    /// ARIA role: errors interrupt, successes are polite.
    pub fn aria_role(&self) -> &'static str {
        match self {
            ToastKind::Success => "status",
            ToastKind::Error => "alert",
        }
    }
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    /// Shown after the endpoint accepted the request.
    pub fn contact_sent() -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Заявка отправлена".to_string(),
            description: "Спасибо! Я свяжусь с вами в ближайшее время.".to_string(),
        }
    }

    /// Shown for every failure cause.
    pub fn contact_failed() -> Self {
        Self {
            kind: ToastKind::Error,
            title: "Ошибка".to_string(),
            description: "Не удалось отправить заявку. Попробуйте позже.".to_string(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant ends up as the same failure toast; the distinction only
/// shows in the console log.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Request body could not be serialised.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status.
    #[error("Rejected by endpoint with status {status}")]
    Rejected { status: u16 },
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn ivan() -> ContactForm {
        ContactForm {
            name: "Ivan".to_string(),
            email: "ivan@example.com".to_string(),
            phone: String::new(),
            message: "hello".to_string(),
        }
    }

    #[test]
    fn test_body_matches_endpoint_contract() {
        let body = ivan().to_json().unwrap();
        assert_eq!(
            body,
            r#"{"name":"Ivan","email":"ivan@example.com","phone":"","message":"hello"}"#
        );
    }

    #[test]
    fn test_only_phone_is_optional() {
        let required: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(ContactField::is_required)
            .collect();
        assert_eq!(
            required,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_field_set_updates_only_that_field() {
        let mut form = ivan();
        ContactField::Phone.set(&mut form, "+7 (999) 123-45-67".to_string());

        assert_eq!(form.phone, "+7 (999) 123-45-67");
        assert_eq!(form.name, "Ivan");
        assert_eq!(ContactField::Phone.value(&form), "+7 (999) 123-45-67");
    }

    #[test]
    fn test_field_ids_match_json_keys() {
        let value: serde_json::Value = serde_json::from_str(&ivan().to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), ContactField::ALL.len());
        for field in ContactField::ALL {
            assert!(object.contains_key(field.id()), "missing key {}", field.id());
        }
    }

    #[test]
    fn test_rejected_error_display() {
        let err = AppError::Rejected { status: 400 };
        assert_eq!(err.to_string(), "Rejected by endpoint with status 400");
    }

    #[test]
    fn test_toast_kinds() {
        assert_eq!(Toast::contact_sent().kind, ToastKind::Success);
        assert_eq!(Toast::contact_failed().kind, ToastKind::Error);
        assert_eq!(ToastKind::Error.css_class(), "toast-error");
    }
}
