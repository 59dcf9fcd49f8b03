//! High-level Rust API over the Stripe.js Card Element bindings.
//!
//! This module provides:
//! - `CardElementOptions` to customize the hosted card input.
//! - `BillingDetails` for the payer identity attached at confirmation.
//! - `mount_card_element()` to initialize Stripe, create Elements, and mount the Card Element.
//! - `confirm_card_payment()` to run `stripe.confirmCardPayment` and await its single result.
//! - `unmount_card_element()` / `clear_card_element()` for teardown and retries.
//!
//! # Example Usage
//! ```rust,ignore
//! use yew_checkout::{
//!     mount_card_element, confirm_card_payment, BillingDetails, CardPaymentResult,
//! };
//!
//! wasm_bindgen_futures::spawn_local(async move {
//!     let (stripe, _elements, card) =
//!         mount_card_element("pk_test_...", "#card-element", None).await?;
//!
//!     let billing = BillingDetails {
//!         name: "Jenny Rosen".into(),
//!         email: "jenny@example.com".into(),
//!     };
//!     match confirm_card_payment(&stripe, "pi_..._secret_...", &card, &billing).await {
//!         CardPaymentResult::Success(intent) => log::info!("paid: {intent}"),
//!         CardPaymentResult::Error(err) => log::error!("failed: {}", err.message),
//!     }
//! });
//! ```

use gloo_utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Object, Reflect};

use crate::bindings::{new_stripe, JsCardElement, JsElements, JsStripe};

/// Customization for `elements.create("card", ...)`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CardElementOptions {
    /// Inline style rules for the hosted input (Stripe's `style` object).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,

    /// Whether to omit the postal code field.
    #[serde(rename = "hidePostalCode", skip_serializing_if = "Option::is_none")]
    pub hide_postal_code: Option<bool>,

    /// Any other JSON-serializable settings.
    #[serde(flatten)]
    pub extra: Option<serde_json::Value>,
}

/// Payer identity forwarded as `billing_details` on confirmation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
}

/// Representation of a Stripe.js error object.
#[derive(Clone, Debug, Deserialize)]
pub struct StripeError {
    /// Human-readable message.
    pub message: String,
    /// Stripe's error type, e.g. `"card_error"`.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Optional Stripe error code, e.g. `"card_declined"`.
    #[serde(default)]
    pub code: Option<String>,
}

/// Strongly-typed outcome of a `confirmCardPayment` call.
#[derive(Debug)]
pub enum CardPaymentResult {
    /// The PaymentIntent was confirmed. Carries the full object as JSON,
    /// exactly as Stripe returned it.
    Success(serde_json::Value),
    /// Something went wrong. Contains Stripe's error details.
    Error(StripeError),
}

/// Initialize Stripe.js, create an Elements instance, and mount a Card Element.
///
/// # Arguments
///
/// * `publishable_key` – Your Stripe publishable key (starts with `pk_`).
/// * `mount_id` – CSS selector or DOM id, e.g. `"#card-element"`.
/// * `options` – Optional style/customization for the hosted input.
///
/// # Returns
///
/// On success, returns `(JsStripe, JsElements, JsCardElement)`. On failure,
/// returns a `StripeError`.
pub async fn mount_card_element(
    publishable_key: &str,
    mount_id: &str,
    options: Option<CardElementOptions>,
) -> Result<(JsStripe, JsElements, JsCardElement), StripeError> {
    // 1) Create Stripe instance
    let stripe = new_stripe(publishable_key);

    // 2) Card Elements take no factory options; the client secret is
    //    supplied at confirmation time instead.
    let elements = stripe
        .elements(JsValue::undefined())
        .map_err(js_to_stripe_error)?;

    // 3) Build JS args for create("card", ...)
    let opts_js = match options {
        Some(opts) => to_value(&opts).map_err(serde_error_to_stripe_error)?,
        None => JsValue::undefined(),
    };
    let card = elements
        .create_element("card", opts_js)
        .map_err(js_to_stripe_error)?;

    // 4) Mount into DOM
    card.mount(mount_id).map_err(js_to_stripe_error)?;

    Ok((stripe, elements, card))
}

/// Confirm a PaymentIntent using the mounted Card Element, handling SCA/3DS
/// challenges inside Stripe.js.
///
/// Builds `{ payment_method: { card, billing_details } }` and awaits the
/// single result object. A present `error` field, or a rejected promise,
/// becomes `CardPaymentResult::Error`; otherwise the `paymentIntent` field
/// is extracted as JSON.
pub async fn confirm_card_payment(
    stripe: &JsStripe,
    client_secret: &str,
    card: &JsCardElement,
    billing: &BillingDetails,
) -> CardPaymentResult {
    let billing_js = match to_value(billing) {
        Ok(v) => v,
        Err(e) => return CardPaymentResult::Error(serde_error_to_stripe_error(e)),
    };

    // Assemble the data object dynamically: the card handle is a live JS
    // value and cannot go through serde.
    let payment_method = Object::new();
    Reflect::set(&payment_method, &JsValue::from_str("card"), card.as_ref()).unwrap();
    Reflect::set(
        &payment_method,
        &JsValue::from_str("billing_details"),
        &billing_js,
    )
    .unwrap();
    let data = Object::new();
    Reflect::set(&data, &JsValue::from_str("payment_method"), &payment_method).unwrap();

    // Call stripe.confirmCardPayment(...)
    let promise = match stripe.confirm_card_payment(client_secret, data.into()) {
        Ok(p) => p,
        Err(e) => return CardPaymentResult::Error(js_to_stripe_error(e)),
    };

    // Await the JS Promise
    match JsFuture::from(promise).await {
        Ok(outcome) => {
            let error_field = Reflect::get(&outcome, &JsValue::from_str("error"))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null());
            if let Some(err) = error_field {
                return CardPaymentResult::Error(js_to_stripe_error(err));
            }
            let intent = Reflect::get(&outcome, &JsValue::from_str("paymentIntent"))
                .ok()
                .filter(|v| !v.is_undefined())
                .map(|v| {
                    v.into_serde::<serde_json::Value>()
                        .unwrap_or(serde_json::Value::Null)
                })
                .unwrap_or(serde_json::Value::Null);
            CardPaymentResult::Success(intent)
        }
        Err(js_err) => CardPaymentResult::Error(js_to_stripe_error(js_err)),
    }
}

/// Tear down a mounted Card Element.
///
/// # Errors
///
/// Returns `Err(StripeError)` if unmount fails.
pub fn unmount_card_element(card: &JsCardElement) -> Result<(), StripeError> {
    card.unmount().map_err(js_to_stripe_error)
}

/// Reset the hosted card input, keeping it mounted, so the payer can retry
/// with different details.
///
/// # Errors
///
/// Returns `Err(StripeError)` if the reset fails.
pub fn clear_card_element(card: &JsCardElement) -> Result<(), StripeError> {
    card.clear().map_err(js_to_stripe_error)
}

/// Convert any caught `JsValue` into a `StripeError` with best effort.
fn js_to_stripe_error(value: JsValue) -> StripeError {
    from_value::<StripeError>(value.clone()).unwrap_or_else(|_| StripeError {
        message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        error_type: None,
        code: None,
    })
}

/// Convert a `serde_wasm_bindgen::Error` (from `to_value`) into `StripeError`.
fn serde_error_to_stripe_error(err: serde_wasm_bindgen::Error) -> StripeError {
    StripeError {
        message: err.to_string(),
        error_type: None,
        code: None,
    }
}
