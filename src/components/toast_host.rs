//! Renders the shared toast queue with per-toast dismissal.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

fn variant_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    }
}

/// Toast stack overlay; mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div class=variant_class(toast.variant)>
                                <span class="toast__body">
                                    <span class="toast__title">{toast.title.clone()}</span>
                                    <span class="toast__message">{toast.message.clone()}</span>
                                </span>
                                <button
                                    class="toast__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(&id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
