//! Login card shown to unauthenticated visitors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates field presence locally, then drives the auth gate. The submit
//! button is disabled while a login is in flight so the gate never sees
//! overlapping attempts from the UI.

use leptos::prelude::*;

use crate::state::auth::{AuthPhase, AuthState};
use crate::state::toast::Toast;
use crate::util::auth::validate_credentials;
use crate::util::brand::brand_name;

/// Login form for the unauthenticated root route.
#[component]
pub fn LoginForm(on_notify: Callback<Toast>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let busy = move || auth.get().phase() == AuthPhase::Authenticating;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            on_notify.run(Toast::destructive("Error", message));
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let success = crate::util::auth::login(auth, email_value, password_value).await;
            if !success {
                on_notify.run(Toast::destructive(
                    "Login Failed",
                    "Invalid credentials. Please try again.",
                ));
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{format!("Welcome to {}", brand_name())}</h1>
                <p class="login-card__subtitle">"Insurance Agent Productivity System"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email Address"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="agent@company.com"
                            prop:value=move || email.get()
                            prop:disabled=busy
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            prop:disabled=busy
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-card__hint">
                    <p>"Demo Credentials:"</p>
                    <p class="login-card__hint-mono">"admin@company.com (Admin)"</p>
                    <p class="login-card__hint-mono">"agent@company.com (Agent)"</p>
                    <p>"Password: any"</p>
                </div>
                <p class="login-card__register">
                    "Need an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
