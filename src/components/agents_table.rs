//! Admin field-agents table with search filtering and row actions.

#[cfg(test)]
#[path = "agents_table_test.rs"]
mod agents_table_test;

use leptos::prelude::*;

use crate::data::seed;
use crate::data::types::{Agent, AccountStatus, task_badge_class};
use crate::state::toast::Toast;
use crate::util::search::matches_search;

/// Filter over name and zone.
fn filter_agents(agents: &[Agent], term: &str) -> Vec<Agent> {
    agents
        .iter()
        .filter(|a| matches_search(&[&a.name, &a.zone], term))
        .cloned()
        .collect()
}

fn edit_toast(agent: &Agent) -> Toast {
    Toast::info("Edit Agent", format!("Opening edit form for {}", agent.name))
}

fn view_customers_toast(agent: &Agent) -> Toast {
    Toast::info("View Customers", format!("Showing customers assigned to {}", agent.name))
}

/// Toggling "deactivate" reads the current status for the message text.
fn toggle_status_toast(agent: &Agent) -> Toast {
    let verb = match agent.status {
        AccountStatus::Active => "deactivated",
        AccountStatus::Inactive => "activated",
    };
    Toast::info("Agent Status Updated", format!("{} has been {verb}", agent.name))
}

/// Field-agents table on the data-management page.
#[component]
pub fn AgentsTable(on_notify: Callback<Toast>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let agents = seed::agents();
    let filtered = move || filter_agents(&agents, &search.get());

    view! {
        <div class="table-section">
            <div class="table-section__header">
                <h2>"Field Agents"</h2>
                <input
                    class="table-section__search"
                    type="text"
                    placeholder="Search agents..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Zone"</th>
                        <th>"Active Tasks"</th>
                        <th>"Phone"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|agent| {
                                let edit = agent.clone();
                                let view_customers = agent.clone();
                                let toggle = agent.clone();
                                view! {
                                    <tr>
                                        <td class="table__cell--primary">{agent.name.clone()}</td>
                                        <td>{agent.zone.clone()}</td>
                                        <td>
                                            <span class=format!("badge {}", task_badge_class(agent.active_tasks))>
                                                {format!("{} tasks", agent.active_tasks)}
                                            </span>
                                        </td>
                                        <td>{agent.phone.clone()}</td>
                                        <td>
                                            <span class=format!("badge {}", agent.status.badge_class())>
                                                {agent.status.label()}
                                            </span>
                                        </td>
                                        <td>
                                            <div class="table__actions">
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Edit agent"
                                                    on:click=move |_| on_notify.run(edit_toast(&edit))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="View assigned customers"
                                                    on:click=move |_| on_notify.run(view_customers_toast(&view_customers))
                                                >
                                                    "Customers"
                                                </button>
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Toggle agent status"
                                                    on:click=move |_| on_notify.run(toggle_status_toast(&toggle))
                                                >
                                                    "Toggle"
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
