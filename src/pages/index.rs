//! Root route: chooses between the loading screen, the login form, and
//! the authenticated dashboard shell.

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

use leptos::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::layout::AppShell;
use crate::components::login_form::LoginForm;
use crate::state::auth::AuthState;
use crate::state::toast::{Toast, ToastState};
use crate::util::auth::should_redirect_unauth;
use crate::util::brand::brand_name;

/// What the root route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewChoice {
    Loading,
    Login,
    Shell,
}

/// Pure routing decision over auth state: spinner while the restore or a
/// login is pending, login form when signed out, shell otherwise.
fn choose_view(state: &AuthState) -> ViewChoice {
    if state.session.is_some() {
        ViewChoice::Shell
    } else if should_redirect_unauth(state) {
        ViewChoice::Login
    } else {
        ViewChoice::Loading
    }
}

/// The `/` route.
#[component]
pub fn IndexPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let on_notify = Callback::new(move |toast: Toast| {
        toasts.update(|state| {
            state.push(toast);
        });
    });

    move || match choose_view(&auth.get()) {
        ViewChoice::Loading => view! {
            <div class="loading-screen">
                <div class="loading-screen__spinner"></div>
                <p>{format!("Loading {}...", brand_name())}</p>
            </div>
        }
        .into_any(),
        ViewChoice::Login => view! { <LoginForm on_notify=on_notify/> }.into_any(),
        ViewChoice::Shell => view! {
            <AppShell>
                <Dashboard on_notify=on_notify/>
            </AppShell>
        }
        .into_any(),
    }
}
