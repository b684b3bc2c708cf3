//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{data_tables::DataTablesPage, index::IndexPage, register::RegisterPage};
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};
use crate::util::{auth::restore_session, brand::brand_name, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores any persisted session and
/// dark-mode preference, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);

    // One-time startup: pull the stored session and theme before any
    // route-level guard looks at them.
    Effect::new(move || {
        restore_session(auth);
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|state| state.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/insurago.css"/>
        <Title text=brand_name()/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("tables") view=DataTablesPage/>
            </Routes>
        </Router>

        <ToastHost/>
    }
}
