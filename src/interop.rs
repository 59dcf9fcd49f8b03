//! Runtime loader for Stripe.js v3 (no inline JS, no bundler step).
//!
//! # Overview
//! The `use_stripejs()` hook injects a single
//! `<script id="stripejs-sdk" src="https://js.stripe.com/v3/" defer>`
//! into `<head>` on first use, returns `false` until the script's
//! `load` event fires, then returns `true` on every subsequent render.
//!
//! # Usage
//! ```rust,ignore
//! use yew::prelude::*;
//! use yew_checkout::use_stripejs;
//!
//! #[function_component(App)]
//! fn app() -> Html {
//!     let stripe_ready = use_stripejs();
//!     html! {
//!         if stripe_ready {
//!             <p>{"Stripe.js loaded"}</p>
//!         } else {
//!             <p>{"Loading Stripe.js..."}</p>
//!         }
//!     }
//! }
//! ```

use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::HtmlScriptElement;
use yew::functional::hook;
use yew::prelude::*;

const SCRIPT_ID: &str = "stripejs-sdk";
const SCRIPT_SRC: &str = "https://js.stripe.com/v3/";

/// `window.Stripe` already exists (script loaded by us or by the host page).
fn stripe_global_present() -> bool {
    web_sys::window()
        .map(|win| Reflect::has(&win, &JsValue::from_str("Stripe")).unwrap_or(false))
        .unwrap_or(false)
}

/// Custom hook: load Stripe.js v3 exactly once and track readiness.
///
/// # Returns
/// - `false` while the `<script>` is being fetched and parsed.
/// - `true` once `window.Stripe` exists.
///
/// All components using `use_stripejs()` share the same script tag.
#[hook]
pub fn use_stripejs() -> bool {
    let loaded = use_state(stripe_global_present);

    {
        let loaded = loaded.clone();
        use_effect(move || {
            if !*loaded {
                let document = web_sys::window()
                    .expect("no window")
                    .document()
                    .expect("no document");

                // Only inject if the tag is not already in place.
                if document.get_element_by_id(SCRIPT_ID).is_none() {
                    let script: HtmlScriptElement = document
                        .create_element("script")
                        .expect("create script")
                        .dyn_into()
                        .expect("cast script");

                    script.set_id(SCRIPT_ID);
                    script.set_src(SCRIPT_SRC);
                    script.set_defer(true);

                    let onload = Closure::wrap(Box::new(move || {
                        loaded.set(true);
                    }) as Box<dyn Fn()>);
                    script.set_onload(Some(onload.as_ref().unchecked_ref()));
                    // Must outlive this render; the load event fires at most once.
                    onload.forget();

                    document
                        .head()
                        .expect("head missing")
                        .append_child(&script)
                        .expect("append script");
                }
            }
            || ()
        });
    }

    *loaded
}
