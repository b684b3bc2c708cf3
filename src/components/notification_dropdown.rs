//! Notification bell with a fixed-content dropdown.

use leptos::prelude::*;

use crate::data::seed;
use crate::state::ui::UiState;

/// Bell button and dropdown in the shell toolbar.
#[component]
pub fn NotificationDropdown() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = seed::notifications();
    let count = notifications.len();

    view! {
        <div class="notifications">
            <button
                class="btn notifications__bell"
                title="Notifications"
                on:click=move |_| ui.update(|u| u.notifications_open = !u.notifications_open)
            >
                "🔔"
                <span class="notifications__count">{count}</span>
            </button>
            <Show when=move || ui.get().notifications_open>
                <div class="notifications__dropdown">
                    <div class="notifications__header">
                        <h3>"Notifications"</h3>
                        <p>{format!("{count} new notifications")}</p>
                    </div>
                    <ul class="notifications__list">
                        {seed::notifications()
                            .into_iter()
                            .map(|notification| {
                                view! {
                                    <li class="notifications__item">
                                        <span class=format!("dot {}", notification.kind.dot_class())></span>
                                        <span class="notifications__body">
                                            <span class="notifications__title">{notification.title}</span>
                                            <span class="notifications__message">{notification.message}</span>
                                            <span class="notifications__time">{notification.time}</span>
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
