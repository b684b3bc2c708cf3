//! Field-agent view of assigned customers, with outbound navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigate action is the app's only external interface: it opens a
//! Google Maps search for the customer's street address in a new tab.

#[cfg(test)]
#[path = "assigned_customers_table_test.rs"]
mod assigned_customers_table_test;

use leptos::prelude::*;

use crate::data::seed;
use crate::data::types::AssignedCustomer;
use crate::state::auth::AuthState;
use crate::state::toast::Toast;
use crate::util::maps;
use crate::util::search::matches_search;

/// Filter over customer name, location, and policy type.
fn filter_assigned(customers: &[AssignedCustomer], term: &str) -> Vec<AssignedCustomer> {
    customers
        .iter()
        .filter(|c| matches_search(&[&c.customer_name, &c.location, &c.policy_type], term))
        .cloned()
        .collect()
}

fn view_profile_toast(customer: &AssignedCustomer) -> Toast {
    Toast::info("Customer Profile", format!("Opening profile for {}", customer.customer_name))
}

fn navigate_toast(customer: &AssignedCustomer) -> Toast {
    Toast::info(
        "Navigation Started",
        format!("Opening Google Maps to {}'s location", customer.customer_name),
    )
}

/// Assigned-customers table on the field-agent dashboard.
#[component]
pub fn AssignedCustomersTable(on_notify: Callback<Toast>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let search = RwSignal::new(String::new());
    let customers = seed::assigned_customers();
    let filtered = move || filter_assigned(&customers, &search.get());

    let agent_name = move || {
        auth.get()
            .session
            .map(|session| session.name)
            .unwrap_or_default()
    };

    view! {
        <div class="table-section">
            <div class="table-section__header">
                <div>
                    <h2>"My Assigned Customers"</h2>
                    <p class="table-section__subtitle">
                        {move || format!("Customers assigned to {}", agent_name())}
                    </p>
                </div>
                <input
                    class="table-section__search"
                    type="text"
                    placeholder="Search customers..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Customer Name"</th>
                        <th>"Location"</th>
                        <th>"Policy Type"</th>
                        <th>"Contact"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|customer| {
                                let profile = customer.clone();
                                let navigate = customer.clone();
                                view! {
                                    <tr>
                                        <td class="table__cell--primary">{customer.customer_name.clone()}</td>
                                        <td>{customer.location.clone()}</td>
                                        <td>{customer.policy_type.clone()}</td>
                                        <td>{customer.contact.clone()}</td>
                                        <td>
                                            <span class=format!("badge {}", customer.status.badge_class())>
                                                {customer.status.label()}
                                            </span>
                                        </td>
                                        <td>
                                            <div class="table__actions">
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="View customer profile"
                                                    on:click=move |_| on_notify.run(view_profile_toast(&profile))
                                                >
                                                    "Profile"
                                                </button>
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Navigate to customer"
                                                    on:click=move |_| {
                                                        maps::open_in_new_tab(&maps::maps_search_url(&navigate.address));
                                                        on_notify.run(navigate_toast(&navigate));
                                                    }
                                                >
                                                    "Navigate"
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
