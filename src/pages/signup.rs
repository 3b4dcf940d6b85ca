//! Signup Page
//!
//! Form shell only, same as login.

use leptos::prelude::*;
use leptos_router::components::A;

use super::set_page_title;
use crate::components::FormField;
use crate::models::{form_summary, SignupForm};

/// (id, name, label, input type, autocomplete)
const FIELDS: &[(&str, &str, &str, &str, Option<&str>)] = &[
    ("name", "name", "Full Name", "text", None),
    ("email-address", "email", "Email address", "email", Some("email")),
    ("password", "password", "Password", "password", Some("new-password")),
    ("confirmPassword", "confirmPassword", "Confirm Password", "password", Some("new-password")),
];

#[component]
pub fn SignupPage() -> impl IntoView {
    set_page_title(Some("Sign up"));

    let (form, set_form) = signal(SignupForm::default());

    let on_field = move |(name, value): (&'static str, String)| {
        set_form.update(|f| f.set_field(name, value));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::info!("Signup submitted: {}", form_summary(&form.get_untracked()));
    };

    let field_value = move |name: &'static str| {
        Signal::derive(move || {
            form.with(|f| match name {
                "name" => f.name.clone(),
                "email" => f.email.clone(),
                "password" => f.password.clone(),
                _ => f.confirm_password.clone(),
            })
        })
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <h2>"Create Account"</h2>
                    <p>"Join our community today!"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-fields">
                        {FIELDS.iter().map(|(id, name, label, input_type, autocomplete)| view! {
                            <FormField
                                id=*id
                                name=*name
                                label=*label
                                input_type=*input_type
                                autocomplete=*autocomplete
                                value=field_value(*name)
                                on_input=on_field
                            />
                        }).collect_view()}
                    </div>

                    <button type="submit" class="auth-submit">"Sign up"</button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login" attr:class="auth-link">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
