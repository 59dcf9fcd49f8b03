//! The drop-in checkout form component.
//!
//! Fetches the server-authoritative price and a PaymentIntent client secret,
//! mounts the hosted Stripe card input, collects payer name/email, and
//! confirms the payment. Renders the entry form until a confirmation
//! succeeds, then a read-only summary of the returned PaymentIntent.

use std::cell::Cell;
use std::rc::Rc;

use gloo_console as console;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::bindings::{JsCardElement, JsStripe};
use crate::client::{
    clear_card_element, confirm_card_payment, mount_card_element, unmount_card_element,
    BillingDetails, CardElementOptions, CardPaymentResult,
};
use crate::components::{LabeledInput, PayButton};
use crate::interop::use_stripejs;
use crate::model::{submit_disabled, PayerInfo, Submission, SubmitGate};
use crate::money::DisplayPrice;

/// Properties for the [`CheckoutForm`] component.
///
/// # Fields
///
/// * `publishable_key` – Your Stripe publishable key (`pk_…`).
/// * `api_base` – Base URL of the checkout backend serving the price and
///   intent endpoints.
/// * `on_success` – Callback invoked with the confirmed PaymentIntent JSON.
/// * `on_error` – Callback invoked with the provider's message when a
///   confirmation attempt fails.
/// * `button_label` – Override the pay button text (default: `"Pay"`).
#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutFormProps {
    pub publishable_key: String,
    pub api_base: String,
    #[prop_or_default]
    pub on_success: Callback<serde_json::Value>,
    #[prop_or_default]
    pub on_error: Callback<String>,
    #[prop_or_default]
    pub button_label: Option<AttrValue>,
}

/// Yew function component rendering the complete card checkout flow.
///
/// This component will:
/// 1. Load Stripe.js once per page and mount a Card Element into
///    `#card-element`.
/// 2. Issue two independent one-shot fetches at mount: the display price and
///    the PaymentIntent client secret. Neither is retried.
/// 3. Track payer name/email from input events bubbling up to the form; any
///    edit dismisses the message of a previously failed attempt.
/// 4. On submit, suppress default submission and call
///    `stripe.confirmCardPayment` with the hosted card input and the payer's
///    billing details. A synchronous gate rejects re-entrant submits while a
///    call is pending.
/// 5. On success, render a summary panel with the pretty-printed
///    PaymentIntent; on failure, show `"Payment failed: <message>"` inline
///    and re-enable submission.
#[function_component(CheckoutForm)]
pub fn checkout_form(props: &CheckoutFormProps) -> Html {
    let stripe_ready = use_stripejs();
    let widget = use_mut_ref(|| None::<(JsStripe, JsCardElement)>);
    let widget_ready = use_state(|| false);
    let price = use_state(|| None::<DisplayPrice>);
    let client_secret = use_state(|| None::<String>);
    let setup_error = use_state(|| None::<String>);
    let payer = use_state(PayerInfo::default);
    let submission = use_state(|| Submission::Idle);
    let gate = use_mut_ref(SubmitGate::new);

    // Two independent one-shot fetches at mount, no ordering between them.
    // The liveness flag flips in the destructor so a late completion never
    // touches unmounted state.
    {
        let price = price.clone();
        let client_secret = client_secret.clone();
        let setup_error = setup_error.clone();
        let api_base = props.api_base.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));

            {
                let alive = alive.clone();
                let price = price.clone();
                let setup_error = setup_error.clone();
                let base = api_base.clone();
                spawn_local(async move {
                    let fetched = api::get_product_details(&base).await;
                    if !alive.get() {
                        return;
                    }
                    match fetched {
                        Ok(details) => price.set(Some(DisplayPrice {
                            amount_minor: details.amount,
                            currency: details.currency,
                        })),
                        Err(err) => {
                            console::error!("product fetch failed:", err.to_string());
                            setup_error.set(Some(err.to_string()));
                        }
                    }
                });
            }

            {
                let alive = alive.clone();
                spawn_local(async move {
                    let fetched = api::create_payment_intent(&api_base).await;
                    if !alive.get() {
                        return;
                    }
                    match fetched {
                        Ok(secret) => client_secret.set(Some(secret)),
                        Err(err) => {
                            console::error!("intent fetch failed:", err.to_string());
                            setup_error.set(Some(err.to_string()));
                        }
                    }
                });
            }

            move || alive.set(false)
        });
    }

    // Mount the hosted card input once Stripe.js reports ready.
    {
        let widget = widget.clone();
        let widget_ready = widget_ready.clone();
        let setup_error = setup_error.clone();
        let pk = props.publishable_key.clone();
        use_effect_with(stripe_ready, move |ready| {
            if *ready && widget.borrow().is_none() {
                spawn_local(async move {
                    let options = CardElementOptions {
                        hide_postal_code: Some(true),
                        ..CardElementOptions::default()
                    };
                    match mount_card_element(&pk, "#card-element", Some(options)).await {
                        Ok((stripe, _elements, card)) => {
                            *widget.borrow_mut() = Some((stripe, card));
                            widget_ready.set(true);
                        }
                        Err(err) => setup_error.set(Some(err.message)),
                    }
                });
            }
            || ()
        });
    }

    // Any edit updates the field named by the input and dismisses the
    // message of a previously failed attempt, whichever field changed.
    // Events from unrecognized targets leave the payer info alone.
    let on_form_input = {
        let payer = payer.clone();
        let submission = submission.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*payer).clone();
                if next.apply_field(&input.name(), input.value()) {
                    payer.set(next);
                }
            }
            if submission.error().is_some() {
                let mut current = (*submission).clone();
                current.note_edit();
                submission.set(current);
            }
        })
    };

    let on_submit = {
        let widget = widget.clone();
        let gate = gate.clone();
        let submission = submission.clone();
        let client_secret = client_secret.clone();
        let payer = payer.clone();
        let on_success = props.on_success.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if submission.succeeded() {
                return;
            }
            let Some(secret) = (*client_secret).clone() else {
                return;
            };
            if !payer.is_complete() {
                return;
            }
            let Some((stripe, card)) = widget.borrow().clone() else {
                return;
            };
            // Taken before any suspension point: a second submit while the
            // confirmation is pending stops here.
            if !gate.borrow().try_acquire() {
                console::debug!("submission already pending, ignoring");
                return;
            }

            submission.set(Submission::Submitting);
            let billing = BillingDetails {
                name: payer.name.clone(),
                email: payer.email.clone(),
            };

            let gate = gate.clone();
            let submission = submission.clone();
            let on_success = on_success.clone();
            let on_error = on_error.clone();
            spawn_local(async move {
                match confirm_card_payment(&stripe, &secret, &card, &billing).await {
                    CardPaymentResult::Success(payment) => {
                        console::debug!("payment confirmed");
                        // The summary panel replaces the form; drop the widget.
                        let _ = unmount_card_element(&card);
                        on_success.emit(payment.clone());
                        submission.set(Submission::Succeeded(payment));
                    }
                    CardPaymentResult::Error(err) => {
                        console::error!("confirmation failed:", err.message.clone());
                        // Wipe the hosted input so the payer can retry.
                        let _ = clear_card_element(&card);
                        on_error.emit(err.message.clone());
                        submission.set(Submission::failed(&err.message));
                        gate.borrow().release();
                    }
                }
            });
        })
    };

    if let Submission::Succeeded(payment) = &*submission {
        let dump =
            serde_json::to_string_pretty(payment).unwrap_or_else(|_| payment.to_string());
        return html! {
            <div class="checkout-form">
                <div class="payment-success">
                    <h1>{ "Your payment succeeded" }</h1>
                    <p>{ "PaymentIntent response:" }</p>
                    <pre class="payment-dump"><code>{ dump }</code></pre>
                </div>
            </div>
        };
    }

    let price_label = price.as_ref().map(DisplayPrice::label).unwrap_or_default();
    // Setup failures block the form and outrank a submission message.
    let banner = setup_error
        .as_ref()
        .cloned()
        .or_else(|| submission.error().map(str::to_owned));
    let disabled = submit_disabled(&submission, client_secret.is_some(), *widget_ready, &payer)
        || setup_error.is_some();

    html! {
        <div class="checkout-form">
            <form onsubmit={on_submit} oninput={on_form_input}>
                <h1>{ price_label }</h1>
                <LabeledInput
                    name="name"
                    label="Name"
                    placeholder="Name"
                    autocomplete="cardholder"
                />
                <LabeledInput
                    name="email"
                    label="Email"
                    input_type="email"
                    placeholder="Email"
                    autocomplete="email"
                />
                <div class="field-row">
                    <label for="card-element">{ "Card details" }</label>
                    <div id="card-element" class="field-input card-input"></div>
                </div>
                {
                    if let Some(msg) = banner {
                        html! { <div class="error-banner" aria-live="polite">{ msg }</div> }
                    } else {
                        Html::default()
                    }
                }
                <PayButton
                    disabled={disabled}
                    busy={submission.in_flight()}
                    label={props.button_label.clone().unwrap_or(AttrValue::Static("Pay"))}
                />
            </form>
        </div>
    }
}
