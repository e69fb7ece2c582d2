//! Contact form submission.
//!
//! One POST per submit, no retry. The response body is never read: a 2xx
//! status means the request was accepted, anything else (or no response at
//! all) is a failure. The in-flight flag is raised for the whole call and
//! lowered by [`InFlight`] on drop, whichever way the call ends.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, ContactForm, Toast};

/// Transport seam for the contact endpoint.
///
/// `Ok(status)` for any HTTP response, `Err` when no response arrived.
#[allow(async_fn_in_trait)]
pub trait ContactClient {
    async fn post_json(&self, url: &str, body: String) -> AppResult<u16>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooClient;

impl ContactClient for GlooClient {
    async fn post_json(&self, url: &str, body: String) -> AppResult<u16> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        Ok(response.status())
    }
}

/// Raises the in-flight flag on creation, lowers it on drop.
pub struct InFlight<F: FnMut(bool)> {
    notify: F,
}

impl<F: FnMut(bool)> InFlight<F> {
    pub fn begin(mut notify: F) -> Self {
        notify(true);
        Self { notify }
    }
}

impl<F: FnMut(bool)> Drop for InFlight<F> {
    fn drop(&mut self) {
        (self.notify)(false);
    }
}

/// Result of one submission as the user sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Endpoint answered 2xx
    Sent,
    /// Encoding, network or status failure
    Failed,
}

impl SubmitOutcome {
    /// Apply the outcome to the form and return the toast to show.
    ///
    /// The form is cleared only when the request was sent, so a failed
    /// attempt can be retried without retyping.
    pub fn apply(self, form: &mut ContactForm) -> Toast {
        match self {
            SubmitOutcome::Sent => {
                *form = ContactForm::default();
                Toast::contact_sent()
            }
            SubmitOutcome::Failed => Toast::contact_failed(),
        }
    }
}

/// Encode and POST the form.
///
/// Required fields are left to the inputs' `required` attribute and to the
/// endpoint, which answers non-2xx for an incomplete request.
pub async fn send_contact<C: ContactClient>(
    client: &C,
    endpoint: &str,
    form: &ContactForm,
) -> AppResult<()> {
    let body = form.to_json()?;
    let status = client.post_json(endpoint, body).await?;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AppError::Rejected { status })
    }
}

/// Submit the form, keeping `on_in_flight` informed.
///
/// `on_in_flight(true)` fires before anything else and `on_in_flight(false)`
/// fires exactly once when the call finishes.
pub async fn submit_contact<C, F>(
    client: &C,
    endpoint: &str,
    form: &ContactForm,
    on_in_flight: F,
) -> SubmitOutcome
where
    C: ContactClient,
    F: FnMut(bool),
{
    let _in_flight = InFlight::begin(on_in_flight);
    log::info!("📨 Sending contact request...");

    match send_contact(client, endpoint, form).await {
        Ok(()) => {
            log::info!("✅ Contact request accepted");
            SubmitOutcome::Sent
        }
        Err(e) => {
            log::warn!("❌ Contact request failed: {}", e);
            SubmitOutcome::Failed
        }
    }
}
