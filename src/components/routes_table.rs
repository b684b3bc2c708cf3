//! Admin service-routes table with search filtering and row actions.

#[cfg(test)]
#[path = "routes_table_test.rs"]
mod routes_table_test;

use leptos::prelude::*;

use crate::data::seed;
use crate::data::types::{Route, route_badge_class};
use crate::state::toast::Toast;
use crate::util::search::matches_search;

/// Filter over route name, area, and assigned agent.
fn filter_routes(routes: &[Route], term: &str) -> Vec<Route> {
    routes
        .iter()
        .filter(|r| matches_search(&[&r.route_name, &r.area, &r.assigned_agent], term))
        .cloned()
        .collect()
}

fn edit_toast(route: &Route) -> Toast {
    Toast::info("Edit Route", format!("Opening edit form for {}", route.route_name))
}

fn delete_toast(route: &Route) -> Toast {
    Toast::destructive(
        "Route Deleted",
        format!("{} has been removed from the system", route.route_name),
    )
}

fn assign_toast(route: &Route) -> Toast {
    Toast::info("Assign Agent", format!("Opening agent assignment for {}", route.route_name))
}

/// Routes table on the data-management page.
#[component]
pub fn RoutesTable(on_notify: Callback<Toast>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let routes = seed::routes();
    let filtered = move || filter_routes(&routes, &search.get());

    view! {
        <div class="table-section">
            <div class="table-section__header">
                <h2>"Routes"</h2>
                <input
                    class="table-section__search"
                    type="text"
                    placeholder="Search routes..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Route Name"</th>
                        <th>"Area"</th>
                        <th>"Assigned Agent"</th>
                        <th>"Customers"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|route| {
                                let edit = route.clone();
                                let assign = route.clone();
                                let delete = route.clone();
                                view! {
                                    <tr>
                                        <td class="table__cell--primary">{route.route_name.clone()}</td>
                                        <td>{route.area.clone()}</td>
                                        <td>{route.assigned_agent.clone()}</td>
                                        <td>
                                            <span class=format!("badge {}", route_badge_class(route.customer_count))>
                                                {format!("{} customers", route.customer_count)}
                                            </span>
                                        </td>
                                        <td>
                                            <span class=format!("badge {}", route.status.badge_class())>
                                                {route.status.label()}
                                            </span>
                                        </td>
                                        <td>
                                            <div class="table__actions">
                                                <button
                                                    class="btn btn--outline btn--sm"
                                                    title="Edit route"
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
                                                    title="Delete route"
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
