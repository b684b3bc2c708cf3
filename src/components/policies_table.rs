//! Admin policies table with search filtering, row actions, and an
//! add-new shortcut.

#[cfg(test)]
#[path = "policies_table_test.rs"]
mod policies_table_test;

use leptos::prelude::*;

use crate::data::seed;
use crate::data::types::{Policy, format_lkr};
use crate::state::toast::Toast;
use crate::util::search::matches_search;

/// Filter over customer, policy type, and agent.
fn filter_policies(policies: &[Policy], term: &str) -> Vec<Policy> {
    policies
        .iter()
        .filter(|p| matches_search(&[&p.customer, &p.policy_type, &p.agent], term))
        .cloned()
        .collect()
}

fn edit_toast(policy: &Policy) -> Toast {
    Toast::info("Edit Policy", format!("Opening edit form for policy {}", policy.id))
}

fn delete_toast(policy: &Policy) -> Toast {
    Toast::destructive(
        "Policy Deleted",
        format!("Policy {} has been removed from the system", policy.id),
    )
}

fn assign_toast(policy: &Policy) -> Toast {
    Toast::info("Assign Agent", format!("Opening agent assignment for policy {}", policy.id))
}

fn add_new_toast() -> Toast {
    Toast::info("Add New Policy", "Opening new policy creation form")
}

/// Policies table on the data-management page.
#[component]
pub fn PoliciesTable(on_notify: Callback<Toast>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let policies = seed::policies();
    let filtered = move || filter_policies(&policies, &search.get());

    view! {
        <div class="table-section">
            <div class="table-section__header">
                <h2>"Policies"</h2>
                <div class="table-section__controls">
                    <input
                        class="table-section__search"
                        type="text"
                        placeholder="Search policies..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=move |_| on_notify.run(add_new_toast())>
                        "+ Add New Policy"
                    </button>
                </div>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Policy ID"</th>
                        <th>"Type"</th>
                        <th>"Customer"</th>
                        <th>"Agent"</th>
                        <th>"Premium (LKR)"</th>
                        <th>"Validity"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|policy| {
                                let edit = policy.clone();
                                let assign = policy.clone();
                                let delete = policy.clone();
                                view! {
                                    <tr>
                                        <td class="table__cell--primary">{policy.id.clone()}</td>
                                        <td>{policy.policy_type.clone()}</td>
                                        <td>{policy.customer.clone()}</td>
                                        <td>{policy.agent.clone()}</td>
                                        <td>{format_lkr(policy.premium)}</td>
                                        <td>{policy.validity.clone()}</td>
                                        <td>
                                            <span class=format!("badge {}", policy.status.badge_class())>
                                                {policy.status.label()}
                                            </span>
                                        </td>
                                        <td>
                                            <div class="table__actions">
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Edit policy"
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
                                                    title="Delete policy"
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
