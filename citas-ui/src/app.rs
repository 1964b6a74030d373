//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use citas::routes::{resolve, Resolution, Route as Screen};

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Login, MyAppointments, NewAppointment};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 flex flex-col">
                // Navbar only once signed in
                {move || state.user().map(|user| view! { <Nav user=user /> })}

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/login" view=|| view! { <Guarded path="/login" /> } />
                        <Route path="/dashboard" view=|| view! { <Guarded path="/dashboard" /> } />
                        <Route
                            path="/nueva-cita"
                            view=|| view! { <Guarded path="/nueva-cita" /> }
                        />
                        <Route path="/mis-citas" view=|| view! { <Guarded path="/mis-citas" /> } />
                        <Route path="/*any" view=|| view! { <Guarded path="/" /> } />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// Resolve `path` against the session and render the screen or redirect
#[component]
fn Guarded(path: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    match state.session.with_untracked(|session| resolve(path, session)) {
        Resolution::Redirect(target) => view! { <Redirect path=target.path() /> }.into_view(),
        Resolution::Render(screen) => match screen {
            Screen::Login => view! { <Login /> }.into_view(),
            Screen::Dashboard => view! { <Dashboard /> }.into_view(),
            Screen::NewAppointment => view! { <NewAppointment /> }.into_view(),
            Screen::MyAppointments => view! { <MyAppointments /> }.into_view(),
        },
    }
}
