//! My Appointments Page
//!
//! The signed-in patient's appointments: loading, error, empty state or table.

use leptos::*;
use leptos_router::*;

use citas::listing::{self, AppointmentRow, ListingState, ListingView};
use citas::routes::Route as Screen;

use crate::components::Loading;
use crate::state::global::GlobalState;

/// My appointments page component
#[component]
pub fn MyAppointments() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let Some(user) = state.user() else {
        return view! { <Redirect path=Screen::Login.path() /> }.into_view();
    };

    let listing_state = create_rw_signal(ListingState::Loading);

    // Fetch on mount
    let api = state.api.clone();
    let usuario_id = user.usuario_id;
    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let loaded = listing::load_appointments(&api, usuario_id).await;
            if let ListingState::Failed(message) = &loaded {
                let line = format!("Failed to fetch appointments: {}", message);
                web_sys::console::error_1(&line.into());
            }
            listing_state.set(loaded);
        });
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Mis Citas Médicas"</h1>
                <A
                    href=Screen::NewAppointment.path()
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
                >
                    "Nueva Cita"
                </A>
            </div>

            {move || match listing_state.with(ListingState::view) {
                ListingView::Loading => view! { <Loading label="Cargando citas..." /> }.into_view(),
                ListingView::Error(message) => view! {
                    <div class="px-4 py-3 rounded-lg bg-red-100 text-red-700">{message}</div>
                }
                .into_view(),
                ListingView::Empty => view! { <EmptyState /> }.into_view(),
                ListingView::Table(rows) => view! { <AppointmentTable rows=rows /> }.into_view(),
            }}
        </div>
    }
    .into_view()
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-12 text-center">
            <div class="text-5xl mb-4">"📅"</div>
            <h2 class="text-xl font-semibold mb-2">"No tienes citas programadas"</h2>
            <p class="text-gray-500 mb-6">"Agenda tu primera cita médica"</p>
            <A
                href=Screen::NewAppointment.path()
                class="inline-block px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
            >
                "Agendar Cita"
            </A>
        </div>
    }
}

#[component]
fn AppointmentTable(rows: Vec<AppointmentRow>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow overflow-x-auto">
            <table class="min-w-full text-left">
                <thead class="bg-gray-50 text-sm text-gray-600">
                    <tr>
                        <th class="px-4 py-3">"Fecha y Hora"</th>
                        <th class="px-4 py-3">"Doctor"</th>
                        <th class="px-4 py-3">"Especialidad"</th>
                        <th class="px-4 py-3">"Estado"</th>
                        <th class="px-4 py-3">"Motivo"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr class="border-t border-gray-100">
                            <td class="px-4 py-3">{row.fecha}</td>
                            <td class="px-4 py-3">{row.doctor}</td>
                            <td class="px-4 py-3">{row.especialidad}</td>
                            <td class="px-4 py-3"><span class=row.badge>{row.estado}</span></td>
                            <td class="px-4 py-3 text-gray-600">{row.motivo}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
