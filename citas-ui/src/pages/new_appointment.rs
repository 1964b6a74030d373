//! New Appointment Page
//!
//! Specialty → doctor → date → time form. Every specialty change hands out a
//! ticket; a doctor list whose ticket is stale is dropped by the form.

use chrono::NaiveDate;
use leptos::*;
use leptos_router::*;

use citas::booking::{min_date, BookingForm, SubmitOutcome, TimeSlot};
use citas::routes::Route as Screen;
use citas::{BookingApi, Id};

use crate::state::global::GlobalState;

const INPUT_CLASS: &str =
    "w-full rounded-lg px-4 py-3 border border-gray-300 focus:border-blue-500 focus:outline-none";

/// New appointment page component
#[component]
pub fn NewAppointment() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let Some(user) = state.user() else {
        return view! { <Redirect path=Screen::Login.path() /> }.into_view();
    };
    let usuario_id = user.usuario_id;
    let today = state.today();

    let form = create_rw_signal(BookingForm::new());

    // Fetch specialties on mount
    let api = state.api.clone();
    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.specialties().await;
            form.update(|f| f.set_specialties(result));
        });
    });

    let api = state.api.clone();
    let on_specialty = move |ev: web_sys::Event| {
        let specialty_id = parse_id(&event_target_value(&ev));
        let ticket = form.try_update(|f| f.select_specialty(specialty_id)).flatten();
        let Some(ticket) = ticket else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            let result = api.doctors(ticket.specialty_id()).await;
            form.update(|f| {
                f.apply_doctors(ticket, result);
            });
        });
    };

    let on_doctor = move |ev: web_sys::Event| {
        let doctor_id = parse_id(&event_target_value(&ev));
        // A refused doctor shows up through the form error
        form.update(|f| {
            let _ = f.select_doctor(doctor_id);
        });
    };

    let on_date = move |ev: web_sys::Event| {
        let date = event_target_value(&ev).parse::<NaiveDate>().ok();
        form.update(|f| {
            let _ = f.set_date(date, today);
        });
    };

    let on_slot = move |ev: web_sys::Event| {
        let slot = event_target_value(&ev).parse::<TimeSlot>().ok();
        form.update(|f| f.set_slot(slot));
    };

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Refusals land in the form error; a second click while in flight is ignored
        let request = form.try_update(|f| f.begin_submit(usuario_id, today).ok()).flatten();
        let Some(request) = request else {
            return;
        };

        let state = submit_state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = state.api.create_appointment(&request).await;

            match form.try_update(|f| f.finish_submit(result)) {
                Some(SubmitOutcome::Created { message, .. }) => {
                    state.show_success(&message);
                    navigate(Screen::Dashboard.path(), Default::default());
                }
                Some(SubmitOutcome::Failed { message }) => state.show_error(&message),
                None => {}
            }
        });
    };

    let min = min_date(today).format("%Y-%m-%d").to_string();

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Agendar Nueva Cita"</h1>
                <p class="text-gray-500 mt-1">
                    "Selecciona la especialidad, el doctor y el horario"
                </p>
            </div>

            {move || form.with(|f| f.error().map(|message| view! {
                <div class="px-4 py-3 rounded-lg bg-red-100 text-red-700">
                    {message.to_string()}
                </div>
            }))}

            <form on:submit=on_submit class="bg-white rounded-xl shadow p-6 space-y-4">
                // Specialty
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Especialidad"</label>
                    <select
                        on:change=on_specialty
                        class=INPUT_CLASS
                    >
                        <option value="">"Selecciona una especialidad"</option>
                        {move || form.with(|f| f.specialties().iter().map(|s| view! {
                            <option value=s.id.to_string()>{s.nombre.clone()}</option>
                        }).collect_view())}
                    </select>
                </div>

                // Doctor
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Doctor"</label>
                    <select
                        on:change=on_doctor
                        disabled=move || !form.with(BookingForm::doctor_select_enabled)
                        prop:value=move || form.with(|f| {
                            f.doctor_id().map(|id| id.to_string()).unwrap_or_default()
                        })
                        class="w-full rounded-lg px-4 py-3 border border-gray-300
                               disabled:bg-gray-100 focus:border-blue-500 focus:outline-none"
                    >
                        <option value="">"Selecciona un doctor"</option>
                        {move || form.with(|f| f.doctors().iter().map(|d| view! {
                            <option value=d.id.to_string()>{d.nombre.clone()}</option>
                        }).collect_view())}
                    </select>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    // Date, tomorrow at the earliest
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Fecha"</label>
                        <input
                            type="date"
                            min=min
                            prop:value=move || form.with(|f| {
                                f.date()
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default()
                            })
                            on:change=on_date
                            class=INPUT_CLASS
                        />
                    </div>

                    // Time slot
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Hora"</label>
                        <select
                            on:change=on_slot
                            class=INPUT_CLASS
                        >
                            <option value="">"Selecciona una hora"</option>
                            {TimeSlot::ALL.iter().map(|slot| view! {
                                <option value=slot.value()>{slot.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                // Reason
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Motivo de la consulta"</label>
                    <textarea
                        rows="3"
                        placeholder="Describe brevemente el motivo (opcional)"
                        prop:value=move || form.with(|f| f.reason().to_string())
                        on:input=move |ev| form.update(|f| f.set_reason(event_target_value(&ev)))
                        class=INPUT_CLASS
                    />
                </div>

                <div class="flex justify-end space-x-2">
                    <A
                        href=Screen::Dashboard.path()
                        class="px-4 py-3 rounded-lg border border-gray-300 hover:bg-gray-100"
                    >
                        "Cancelar"
                    </A>
                    <button
                        type="submit"
                        disabled=move || form.with(|f| !f.can_submit(usuario_id, today))
                        class="px-6 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg font-medium transition-colors"
                    >
                        {move || {
                            if form.with(BookingForm::is_submitting) {
                                "Agendando..."
                            } else {
                                "Agendar Cita"
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
    .into_view()
}

fn parse_id(value: &str) -> Option<Id> {
    value.parse().ok()
}
