use yew::prelude::*;

/// A labeled form input wired for bubbling dispatch: it carries a `name`
/// attribute and no handler of its own, so edits reach the form's listener.
#[derive(Properties, PartialEq)]
pub struct LabeledInputProps {
    /// `name`/`id` attribute, used by the form to route the change.
    pub name: AttrValue,
    /// Label text
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: AttrValue,
}

#[function_component(LabeledInput)]
pub fn labeled_input(props: &LabeledInputProps) -> Html {
    html! {
        <div class="field-row">
            <label for={props.name.clone()}>{ props.label.clone() }</label>
            <input
                type={props.input_type.clone()}
                id={props.name.clone()}
                name={props.name.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                class="field-input"
            />
        </div>
    }
}

/// The pay button; swaps its label while a confirmation is pending.
#[derive(Properties, PartialEq)]
pub struct PayButtonProps {
    /// Disable state
    pub disabled: bool,
    /// A confirmation call is in flight
    pub busy: bool,
    #[prop_or(AttrValue::Static("Pay"))]
    pub label: AttrValue,
}

#[function_component(PayButton)]
pub fn pay_button(props: &PayButtonProps) -> Html {
    html! {
        <button type="submit" class="pay-button" disabled={props.disabled}>
            {
                if props.busy {
                    AttrValue::Static("Processing…")
                } else {
                    props.label.clone()
                }
            }
        </button>
    }
}
