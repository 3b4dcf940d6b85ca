//! Form Field Component
//!
//! Labelled controlled input shared by the login and signup forms.

use leptos::prelude::*;

/// Labelled input bound to one named form field
///
/// # Arguments
/// * `id` / `name` - element id and the field name reported to `on_input`
/// * `value` - current field value
/// * `on_input` - receives `(name, new_value)` on every keystroke
#[component]
pub fn FormField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = None)] autocomplete: Option<&'static str>,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<(&'static str, String)>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id class="form-label">{label}</label>
            <input
                id=id
                name=name
                type=input_type
                autocomplete=autocomplete
                required=true
                class="form-input"
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| on_input.run((name, event_target_value(&ev)))
            />
        </div>
    }
}
