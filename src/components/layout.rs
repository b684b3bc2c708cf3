//! Authenticated shell chrome: brand, nav, notifications, identity, logout.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use crate::components::notification_dropdown::NotificationDropdown;
use crate::state::auth::{AuthState, Role};
use crate::state::ui::UiState;
use crate::util::brand::brand_name;

/// Name and role label for the signed-in identity display.
fn identity_line(state: &AuthState) -> Option<(String, &'static str)> {
    state
        .session
        .as_ref()
        .map(|session| (session.name.clone(), session.role.label()))
}

/// Shell wrapper for authenticated routes.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let is_admin = move || {
        auth.get()
            .session
            .is_some_and(|session| session.role == Role::Administrator)
    };
    let identity = move || identity_line(&auth.get());

    let on_logout = move |_| {
        crate::util::auth::logout(auth);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <div class="shell">
            <header class="shell__header toolbar">
                <span class="toolbar__brand">{brand_name()}</span>
                <nav class="toolbar__nav">
                    <a class="toolbar__link" href="/">"Dashboard"</a>
                    <Show when=is_admin>
                        <a class="toolbar__link" href="/tables">"Data Management"</a>
                    </Show>
                </nav>

                <span class="toolbar__spacer"></span>

                <NotificationDropdown/>

                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <span class="toolbar__self">
                    {move || identity().map(|(name, role)| {
                        view! {
                            <>
                                {name}
                                " ("
                                <span class="toolbar__self-role">{role}</span>
                                ")"
                            </>
                        }
                    })}
                </span>

                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <main class="shell__content">{children()}</main>
        </div>
    }
}
