// =============================================================================
// CA Journey Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// 3. Select
// =============================================================================
// Inputs are controlled: the value comes from a signal and every keystroke is
// reported through `on_input`, so the owning page decides where it is stored.

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Text input field with label.
#[component]
pub fn TextInput(
    /// Used for both `id` and `name`
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div class="form-field">
            <label class="form-label" for=name.clone()>{label}</label>
            <input
                type=input_type
                id=name.clone()
                name=name
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };

    view! {
        <div class="form-field">
            <label class="form-label" for=name.clone()>{label}</label>
            <textarea
                id=name.clone()
                name=name
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Select
// -----------------------------------------------------------------------------

/// Select dropdown option.
#[derive(Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Select dropdown component.
///
/// `placeholder` becomes an empty-valued first option, so a `required`
/// select blocks submission until a real option is picked.
#[component]
pub fn Select(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] options: Vec<SelectOption>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label" for=name.clone()>{label}</label>
            <select
                id=name.clone()
                name=name
                class="form-select"
                required=required
                prop:value=move || value.get()
                on:change=move |e| on_change.run(event_target_value(&e))
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                {options.into_iter().map(|opt| view! {
                    <option value=opt.value>{opt.label}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}
