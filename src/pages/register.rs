//! Registration page. Validates field presence and emits a success
//! notification; no account record is created anywhere.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};
use crate::util::brand::brand_name;

/// All four fields are required; returns the trimmed full name on success.
fn validate_registration(
    role: &str,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<String, &'static str> {
    let full_name = full_name.trim();
    if role.is_empty() || full_name.is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok(full_name.to_owned())
}

fn registered_toast(full_name: &str, role: &str) -> Toast {
    Toast::info(
        "User registered successfully!",
        format!("Welcome {full_name}! Your {role} account has been created."),
    )
}

/// The `/register` route.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let role = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_registration(&role.get(), &full_name.get(), &email.get(), &password.get()) {
            Ok(name) => {
                toasts.update(|state| {
                    state.push(registered_toast(&name, &role.get()));
                });
                role.set(String::new());
                full_name.set(String::new());
                email.set(String::new());
                password.set(String::new());
            }
            Err(message) => {
                toasts.update(|state| {
                    state.push(Toast::destructive("Error", message));
                });
            }
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>{brand_name()}</h1>
                <h2>"Create Account"</h2>
                <p class="register-card__subtitle">"Register for a new account"</p>
                <form class="register-form" on:submit=on_submit>
                    <label class="register-form__label">
                        "Role"
                        <select
                            class="register-form__input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="">"Select your role"</option>
                            <option value="admin">"Admin"</option>
                            <option value="agent">"Agent"</option>
                        </select>
                    </label>
                    <label class="register-form__label">
                        "Full Name"
                        <input
                            class="register-form__input"
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-form__label">
                        "Email"
                        <input
                            class="register-form__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-form__label">
                        "Password"
                        <input
                            class="register-form__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Create Account"
                    </button>
                </form>
                <p class="register-card__signin">
                    "Already have an account? "
                    <a href="/">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
