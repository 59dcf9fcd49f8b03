//! Thin REST client for the checkout backend.
//!
//! Two one-shot calls: the server-authoritative price for display, and a
//! PaymentIntent client secret authorizing a fixed amount. The wire format
//! is owned by the backend; this module only decodes the two documented
//! response shapes. No retry, no caching.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

/// Server-authoritative product price.
///
/// `amount` is in minor units (cents); display conversion happens in
/// [`crate::money`]. Fetched rather than configured client-side so it
/// cannot be tampered with in the browser.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProductDetails {
    pub amount: u64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct CreateIntentResponse {
    client_secret: String,
}

/// Failure talking to the checkout backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed, or the response body failed to decode.
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    /// The backend answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Fetch the display price. `GET {base}/product-details`.
pub async fn get_product_details(base: &str) -> Result<ProductDetails, ApiError> {
    let resp = Request::get(&format!("{base}/product-details"))
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<ProductDetails>().await?)
}

/// Create a PaymentIntent for the fixed product amount and return its
/// client secret. `POST {base}/create-payment-intent`.
pub async fn create_payment_intent(base: &str) -> Result<String, ApiError> {
    let resp = Request::post(&format!("{base}/create-payment-intent"))
        .header("Content-Type", "application/json")
        .body("{}")?
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<CreateIntentResponse>().await?.client_secret)
}
