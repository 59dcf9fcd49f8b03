//! Checkout form state, kept free of browser types so the transitions are
//! testable on the host.

use std::cell::Cell;

/// Outcome of the payment submission, as a single tagged state.
///
/// Exactly one of these holds at any time. `Failed` keeps its display
/// message until the next edit dismisses it; `Succeeded` is terminal.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// Nothing submitted yet, or a previous failure was dismissed.
    Idle,
    /// A confirmation call is in flight.
    Submitting,
    /// The confirmed PaymentIntent object, exactly as returned.
    Succeeded(serde_json::Value),
    /// The last attempt failed; the composed display message is retained.
    Failed(String),
}

impl Submission {
    /// Build the failed state from the provider's message.
    pub fn failed(provider_message: &str) -> Self {
        Submission::Failed(format!("Payment failed: {provider_message}"))
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Submission::Succeeded(_))
    }

    /// The retained failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Submission::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Any edit to the form dismisses a previous failure, whichever field
    /// changed. Other states are untouched.
    pub fn note_edit(&mut self) {
        if matches!(self, Submission::Failed(_)) {
            *self = Submission::Idle;
        }
    }
}

/// The two payer identity fields, updated field-by-field from input events.
/// Lives only for the component's mounted lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PayerInfo {
    pub name: String,
    pub email: String,
}

impl PayerInfo {
    /// Update the field named by the input's `name` attribute.
    ///
    /// Returns `false` for unrecognized names, which are ignored.
    pub fn apply_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => {
                self.name = value;
                true
            }
            "email" => {
                self.email = value;
                true
            }
            _ => false,
        }
    }

    /// Both fields non-empty; the only validation this form performs.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Whether the submit control must be disabled: a confirmation in flight,
/// no client secret yet, the hosted widget not mounted, or incomplete
/// payer info.
pub fn submit_disabled(
    submission: &Submission,
    have_secret: bool,
    widget_ready: bool,
    payer: &PayerInfo,
) -> bool {
    submission.in_flight() || !have_secret || !widget_ready || !payer.is_complete()
}

/// Synchronous re-entry lock for the submit handler.
///
/// Acquired before the confirmation call is spawned, so a second submit
/// arriving while one is pending never reaches the SDK. Released only
/// after a failed attempt; success is terminal.
#[derive(Debug, Default)]
pub struct SubmitGate(Cell<bool>);

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the gate. Returns `false` when it is already held.
    pub fn try_acquire(&self) -> bool {
        if self.0.get() {
            false
        } else {
            self.0.set(true);
            true
        }
    }

    /// Re-arm after a failed attempt.
    pub fn release(&self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_message_prefixes_provider_text() {
        let s = Submission::failed("Your card was declined.");
        assert_eq!(s.error(), Some("Payment failed: Your card was declined."));
        assert!(!s.in_flight());
    }

    #[test]
    fn edits_dismiss_a_failure_but_nothing_else() {
        let mut s = Submission::failed("insufficient funds");
        s.note_edit();
        assert_eq!(s, Submission::Idle);

        let mut s = Submission::Submitting;
        s.note_edit();
        assert_eq!(s, Submission::Submitting);

        let mut s = Submission::Succeeded(json!({ "id": "pi_1" }));
        s.note_edit();
        assert!(s.succeeded());
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut payer = PayerInfo::default();
        assert!(payer.apply_field("name", "Jenny Rosen".into()));
        assert!(!payer.apply_field("card-number", "4242".into()));
        assert_eq!(
            payer,
            PayerInfo {
                name: "Jenny Rosen".into(),
                email: String::new(),
            }
        );
    }

    #[test]
    fn completeness_requires_both_fields() {
        let mut payer = PayerInfo::default();
        assert!(!payer.is_complete());
        payer.apply_field("name", "Jenny Rosen".into());
        assert!(!payer.is_complete());
        payer.apply_field("email", "jenny@example.com".into());
        assert!(payer.is_complete());
    }

    #[test]
    fn submit_disabled_truth_table() {
        let complete = PayerInfo {
            name: "Jenny Rosen".into(),
            email: "jenny@example.com".into(),
        };
        let incomplete = PayerInfo {
            name: "Jenny Rosen".into(),
            email: String::new(),
        };

        assert!(!submit_disabled(&Submission::Idle, true, true, &complete));
        // submission stays available after a failure
        assert!(!submit_disabled(
            &Submission::failed("declined"),
            true,
            true,
            &complete
        ));

        assert!(submit_disabled(&Submission::Submitting, true, true, &complete));
        assert!(submit_disabled(&Submission::Idle, false, true, &complete));
        assert!(submit_disabled(&Submission::Idle, true, false, &complete));
        assert!(submit_disabled(&Submission::Idle, true, true, &incomplete));
    }

    #[test]
    fn gate_rejects_reentry_until_released() {
        let gate = SubmitGate::new();
        assert!(gate.try_acquire());
        assert!(!gate.try_acquire());
        gate.release();
        assert!(gate.try_acquire());
    }
}
