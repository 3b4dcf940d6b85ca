//! Login Page
//!
//! Form shell only: submitting logs the fields locally and stays on the page.

use leptos::prelude::*;
use leptos_router::components::A;

use super::set_page_title;
use crate::components::FormField;
use crate::models::{form_summary, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    set_page_title(Some("Log in"));

    let (form, set_form) = signal(LoginForm::default());

    let on_field = move |(name, value): (&'static str, String)| {
        set_form.update(|f| f.set_field(name, value));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::info!("Login submitted: {}", form_summary(&form.get_untracked()));
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <h2>"Welcome Back!"</h2>
                    <p>"Please sign in to your account"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-fields">
                        <FormField
                            id="email-address"
                            name="email"
                            label="Email address"
                            input_type="email"
                            autocomplete=Some("email")
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=on_field
                        />
                        <FormField
                            id="password"
                            name="password"
                            label="Password"
                            input_type="password"
                            autocomplete=Some("current-password")
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=on_field
                        />
                    </div>

                    <div class="auth-options">
                        <label class="remember-me">
                            <input
                                id="remember-me"
                                name="remember-me"
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.remember_me)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    set_form.update(|f| f.remember_me = checked);
                                }
                            />
                            "Remember me"
                        </label>
                        <a href="#" class="auth-link">"Forgot your password?"</a>
                    </div>

                    <button type="submit" class="auth-submit">"Sign in"</button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <A href="/signup" attr:class="auth-link">"Sign up now"</A>
                </p>
            </div>
        </div>
    }
}
