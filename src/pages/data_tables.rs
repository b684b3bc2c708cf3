//! Data-management page: tabbed entity tables, administrators only.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field agents and signed-out visitors are bounced back to `/` once auth
//! has loaded; the tab strip is local UI state.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::agents_table::AgentsTable;
use crate::components::claims_table::ClaimsTable;
use crate::components::customers_table::CustomersTable;
use crate::components::layout::AppShell;
use crate::components::policies_table::PoliciesTable;
use crate::components::routes_table::RoutesTable;
use crate::state::auth::AuthState;
use crate::state::toast::{Toast, ToastState};
use crate::state::ui::{DataTab, UiState};
use crate::util::auth::install_admin_redirect;

/// The `/tables` route.
#[component]
pub fn DataTablesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    install_admin_redirect(auth, navigate);

    let on_notify = Callback::new(move |toast: Toast| {
        toasts.update(|state| {
            state.push(toast);
        });
    });

    view! {
        <AppShell>
            <div class="data-tables">
                <header class="data-tables__header">
                    <h1>"Data Management"</h1>
                    <p>"Manage customers, agents, routes, policies, and claims across your organization"</p>
                </header>

                <div class="data-tables__tabs" role="tablist">
                    {DataTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="data-tables__tab"
                                    class=("data-tables__tab--active", move || ui.get().data_tab == tab)
                                    role="tab"
                                    on:click=move |_| ui.update(|u| u.data_tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                {move || match ui.get().data_tab {
                    DataTab::Customers => view! { <CustomersTable on_notify=on_notify/> }.into_any(),
                    DataTab::Agents => view! { <AgentsTable on_notify=on_notify/> }.into_any(),
                    DataTab::Routes => view! { <RoutesTable on_notify=on_notify/> }.into_any(),
                    DataTab::Policies => view! { <PoliciesTable on_notify=on_notify/> }.into_any(),
                    DataTab::Claims => view! { <ClaimsTable on_notify=on_notify/> }.into_any(),
                }}
            </div>
        </AppShell>
    }
}
