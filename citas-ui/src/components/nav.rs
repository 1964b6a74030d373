//! Navigation Component
//!
//! Navbar with brand, the user's screens, the user's name and logout.

use leptos::*;
use leptos_router::*;

use citas::dashboard::BRAND;
use citas::login::sign_out;
use citas::routes::Route as Screen;
use citas::User;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav(user: User) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let logout = move |_| {
        let mut next = Screen::Login;
        state.session.update(|session| next = sign_out(session));
        navigate(next.path(), Default::default());
    };

    view! {
        <nav class="bg-blue-700 text-white shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=Screen::Dashboard.path() class="text-xl font-bold">
                        {BRAND}
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href=Screen::Dashboard.path() label="Dashboard" />
                        {user.is_patient().then(|| view! {
                            <NavLink href=Screen::NewAppointment.path() label="Nueva Cita" />
                            <NavLink href=Screen::MyAppointments.path() label="Mis Citas" />
                        })}
                    </div>

                    <div class="flex items-center space-x-4">
                        <span class="text-sm">{user.display_name()}</span>
                        <button
                            on:click=logout
                            class="px-3 py-1 rounded-lg border border-white/50
                                   hover:bg-blue-800 transition-colors"
                        >
                            "Salir"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-blue-100 hover:text-white hover:bg-blue-800
                   transition-colors"
            active_class="bg-blue-800 text-white"
        >
            {label}
        </A>
    }
}
