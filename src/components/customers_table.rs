//! Admin customers table with search filtering and row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Row actions emit notification commands through `on_notify`; nothing in
//! the inventory is mutated.

#[cfg(test)]
#[path = "customers_table_test.rs"]
mod customers_table_test;

use leptos::prelude::*;

use crate::data::seed;
use crate::data::types::Customer;
use crate::state::toast::Toast;
use crate::util::search::matches_search;

/// Filter over name, location, and assigned agent.
fn filter_customers(customers: &[Customer], term: &str) -> Vec<Customer> {
    customers
        .iter()
        .filter(|c| matches_search(&[&c.name, &c.location, &c.assigned_agent], term))
        .cloned()
        .collect()
}

fn edit_toast(customer: &Customer) -> Toast {
    Toast::info("Edit Customer", format!("Opening edit form for {}", customer.name))
}

fn delete_toast(customer: &Customer) -> Toast {
    Toast::destructive(
        "Customer Deleted",
        format!("{} has been removed from the system", customer.name),
    )
}

fn assign_toast(customer: &Customer) -> Toast {
    Toast::info("Assign Agent", format!("Opening agent assignment for {}", customer.name))
}

/// Customers table on the data-management page.
#[component]
pub fn CustomersTable(on_notify: Callback<Toast>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let customers = seed::customers();
    let filtered = move || filter_customers(&customers, &search.get());

    view! {
        <div class="table-section">
            <div class="table-section__header">
                <h2>"Customers"</h2>
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
                        <th>"Name"</th>
                        <th>"NIC"</th>
                        <th>"Phone"</th>
                        <th>"Location"</th>
                        <th>"Assigned Agent"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|customer| {
                                let edit = customer.clone();
                                let assign = customer.clone();
                                let delete = customer.clone();
                                view! {
                                    <tr>
                                        <td class="table__cell--primary">{customer.name.clone()}</td>
                                        <td>{customer.nic.clone()}</td>
                                        <td>{customer.phone.clone()}</td>
                                        <td>{customer.location.clone()}</td>
                                        <td>{customer.assigned_agent.clone()}</td>
                                        <td>
                                            <span class=format!("badge {}", customer.status.badge_class())>
                                                {customer.status.label()}
                                            </span>
                                        </td>
                                        <td>
                                            <div class="table__actions">
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Edit customer"
                                                    on:click=move |_| on_notify.run(edit_toast(&edit))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Assign agent"
                                                    on:click=move |_| on_notify.run(assign_toast(&assign))
                                                >
                                                    "Assign"
                                                </button>
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Delete customer"
                                                    on:click=move |_| on_notify.run(delete_toast(&delete))
                                                >
                                                    "Delete"
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
