//! Modal dialog for creating a new policy.
//!
//! Submission validates field presence, emits a success notification, and
//! resets the form; no policy record is actually written anywhere.

#[cfg(test)]
#[path = "policy_modal_test.rs"]
mod policy_modal_test;

use leptos::prelude::*;

use crate::state::toast::Toast;

/// All four fields are required; the gate is presence-only.
fn validate_policy_form(
    customer_name: &str,
    policy_type: &str,
    premium_amount: &str,
    phone_number: &str,
) -> Result<(), &'static str> {
    if customer_name.trim().is_empty()
        || policy_type.is_empty()
        || premium_amount.trim().is_empty()
        || phone_number.trim().is_empty()
    {
        return Err("Please fill in all fields");
    }
    Ok(())
}

fn created_toast(customer_name: &str, policy_type: &str) -> Toast {
    Toast::info(
        "Policy Created Successfully",
        format!("New {policy_type} policy for {customer_name}"),
    )
}

/// Create-policy dialog, shown from the dashboard quick actions.
#[component]
pub fn PolicyModal(on_close: Callback<()>, on_notify: Callback<Toast>) -> impl IntoView {
    let customer_name = RwSignal::new(String::new());
    let policy_type = RwSignal::new(String::new());
    let premium_amount = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let name = customer_name.get();
        let kind = policy_type.get();
        match validate_policy_form(&name, &kind, &premium_amount.get(), &phone_number.get()) {
            Ok(()) => {
                on_notify.run(created_toast(name.trim(), &kind));
                customer_name.set(String::new());
                policy_type.set(String::new());
                premium_amount.set(String::new());
                phone_number.set(String::new());
                on_close.run(());
            }
            Err(message) => on_notify.run(Toast::destructive("Error", message)),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Policy"</h2>
                <p class="dialog__subtitle">"Add a new insurance policy for a customer."</p>
                <label class="dialog__label">
                    "Customer Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Enter customer name"
                        prop:value=move || customer_name.get()
                        on:input=move |ev| customer_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Policy Type"
                    <select
                        class="dialog__input"
                        prop:value=move || policy_type.get()
                        on:change=move |ev| policy_type.set(event_target_value(&ev))
                    >
                        <option value="">"Select policy type"</option>
                        <option value="auto">"Auto Insurance"</option>
                        <option value="health">"Health Insurance"</option>
                        <option value="life">"Life Insurance"</option>
                        <option value="property">"Property Insurance"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Premium Amount (LKR)"
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="Enter premium amount"
                        prop:value=move || premium_amount.get()
                        on:input=move |ev| premium_amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Phone Number"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Enter phone number"
                        prop:value=move || phone_number.get()
                        on:input=move |ev| phone_number.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create Policy"
                    </button>
                </div>
            </div>
        </div>
    }
}
