//! Dashboard content: greeting, stat cards, activity feeds, quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing view. Field agents additionally see
//! their assigned-customers table; administrators see the team-oriented
//! subtitle. All figures are fixed demo data.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::assigned_customers_table::AssignedCustomersTable;
use crate::components::policy_modal::PolicyModal;
use crate::data::seed;
use crate::state::auth::{AuthState, Role};
use crate::state::toast::Toast;

fn welcome_subtitle(role: Role) -> &'static str {
    match role {
        Role::Administrator => "Monitor your team performance and manage operations",
        Role::FieldAgent => "Track your daily activities and manage your portfolio",
    }
}

fn new_claim_toast() -> Toast {
    Toast::info("New Claim", "Opening claim creation form...")
}

fn check_location_toast() -> Toast {
    Toast::info("Location Check", "Opening location tracking interface...")
}

fn team_status_toast() -> Toast {
    Toast::info("Team Status", "Opening team management dashboard...")
}

/// Dashboard view rendered inside the authenticated shell.
#[component]
pub fn Dashboard(on_notify: Callback<Toast>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_policy_modal = RwSignal::new(false);
    let on_modal_close = Callback::new(move |()| show_policy_modal.set(false));

    let greeting = move || {
        auth.get()
            .session
            .map(|session| format!("Welcome back, {}!", session.name))
            .unwrap_or_default()
    };
    let subtitle = move || {
        auth.get()
            .session
            .map(|session| welcome_subtitle(session.role))
            .unwrap_or_default()
    };
    let is_field_agent = move || {
        auth.get()
            .session
            .is_some_and(|session| session.role == Role::FieldAgent)
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__welcome">
                <h1>{greeting}</h1>
                <p>{subtitle}</p>
            </header>

            <div class="dashboard__stats">
                {seed::dashboard_stats()
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stat-card">
                                <p class="stat-card__title">{stat.title}</p>
                                <p class="stat-card__value">{stat.value}</p>
                                <p class="stat-card__change">{stat.change}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=is_field_agent>
                <AssignedCustomersTable on_notify=on_notify/>
            </Show>

            <div class="dashboard__columns">
                <div class="card">
                    <h2>"Recent Activities"</h2>
                    <p class="card__subtitle">"Latest updates from your team"</p>
                    <ul class="activity-list">
                        {seed::recent_activities()
                            .into_iter()
                            .map(|activity| {
                                view! {
                                    <li class="activity-list__item">
                                        <span class=format!("dot {}", activity.kind.dot_class())></span>
                                        <span class="activity-list__body">
                                            <span class="activity-list__action">{activity.action}</span>
                                            <span class="activity-list__agent">{format!("by {}", activity.agent)}</span>
                                        </span>
                                        <span class="activity-list__time">{activity.time}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class="card">
                    <h2>"Today's Tasks"</h2>
                    <p class="card__subtitle">"Your scheduled activities"</p>
                    <ul class="task-list">
                        {seed::todays_tasks()
                            .into_iter()
                            .map(|task| {
                                view! {
                                    <li class="task-list__item">
                                        <span class="task-list__body">
                                            <span class="task-list__task">{task.task}</span>
                                            <span class="task-list__time">{task.time}</span>
                                        </span>
                                        <span class=format!("badge {}", task.priority.badge_class())>
                                            {task.priority.label()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>

            <div class="card">
                <h2>"Quick Actions"</h2>
                <p class="card__subtitle">"Frequently used operations"</p>
                <div class="dashboard__actions">
                    <button class="btn btn--primary" on:click=move |_| show_policy_modal.set(true)>
                        "New Policy"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_notify.run(new_claim_toast())>
                        "New Claim"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| on_notify.run(check_location_toast())>
                        "Check Location"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| on_notify.run(team_status_toast())>
                        "Team Status"
                    </button>
                </div>
            </div>

            <Show when=move || show_policy_modal.get()>
                <PolicyModal on_close=on_modal_close on_notify=on_notify/>
            </Show>
        </div>
    }
}
