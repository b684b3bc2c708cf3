//! Admin claims table with search filtering and review actions.
//!
//! Approve and reject are offered only while a claim is pending.

#[cfg(test)]
#[path = "claims_table_test.rs"]
mod claims_table_test;

use leptos::prelude::*;

use crate::data::seed;
use crate::data::types::{Claim, format_lkr};
use crate::state::toast::Toast;
use crate::util::search::matches_search;

/// Filter over customer, policy id, and claim id.
fn filter_claims(claims: &[Claim], term: &str) -> Vec<Claim> {
    claims
        .iter()
        .filter(|c| matches_search(&[&c.customer, &c.policy_id, &c.id], term))
        .cloned()
        .collect()
}

fn edit_toast(claim: &Claim) -> Toast {
    Toast::info("Edit Claim", format!("Opening edit form for claim {}", claim.id))
}

fn delete_toast(claim: &Claim) -> Toast {
    Toast::destructive(
        "Claim Deleted",
        format!("Claim {} has been removed from the system", claim.id),
    )
}

fn approve_toast(claim: &Claim) -> Toast {
    Toast::info(
        "Claim Approved",
        format!("Claim {} has been approved for LKR {}", claim.id, format_lkr(claim.amount)),
    )
}

fn reject_toast(claim: &Claim) -> Toast {
    Toast::destructive("Claim Rejected", format!("Claim {} has been rejected", claim.id))
}

fn add_new_toast() -> Toast {
    Toast::info("Add New Claim", "Opening new claim creation form")
}

/// Claims table on the data-management page.
#[component]
pub fn ClaimsTable(on_notify: Callback<Toast>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let claims = seed::claims();
    let filtered = move || filter_claims(&claims, &search.get());

    view! {
        <div class="table-section">
            <div class="table-section__header">
                <h2>"Claims"</h2>
                <div class="table-section__controls">
                    <input
                        class="table-section__search"
                        type="text"
                        placeholder="Search claims..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=move |_| on_notify.run(add_new_toast())>
                        "+ New Claim"
                    </button>
                </div>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Claim ID"</th>
                        <th>"Policy ID"</th>
                        <th>"Customer"</th>
                        <th>"Amount (LKR)"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|claim| {
                                let edit = claim.clone();
                                let delete = claim.clone();
                                let review_buttons = claim.status.is_actionable().then(|| {
                                    let approve = claim.clone();
                                    let reject = claim.clone();
                                    view! {
                                        <button
                                            class="btn btn--outline btn--sm"
                                            title="Approve claim"
                                            on:click=move |_| on_notify.run(approve_toast(&approve))
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="btn btn--outline btn--sm"
                                            title="Reject claim"
                                            on:click=move |_| on_notify.run(reject_toast(&reject))
                                        >
                                            "Reject"
                                        </button>
                                    }
                                });
                                view! {
                                    <tr>
                                        <td class="table__cell--primary">{claim.id.clone()}</td>
                                        <td>{claim.policy_id.clone()}</td>
                                        <td>{claim.customer.clone()}</td>
                                        <td>{format_lkr(claim.amount)}</td>
                                        <td>{claim.date.clone()}</td>
                                        <td>
                                            <span class=format!("badge {}", claim.status.badge_class())>
                                                {claim.status.label()}
                                            </span>
                                        </td>
                                        <td>
                                            <div class="table__actions">
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Edit claim"
                                                    on:click=move |_| on_notify.run(edit_toast(&edit))
                                                >
                                                    "Edit"
                                                </button>
                                                {review_buttons}
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Delete claim"
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
