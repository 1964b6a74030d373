//! Login Page
//!
//! Email/password form. On success the session is started and the user
//! lands on the dashboard.

use leptos::*;
use leptos_router::*;

use citas::dashboard::BRAND;
use citas::login::{LoginForm, LoginOutcome};
use citas::{BookingApi, FormError};

use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let form = create_rw_signal(LoginForm::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = form
            .try_update(|f| match f.begin_submit() {
                Ok(request) => Some(request),
                Err(FormError::InFlight) => None,
                Err(e) => {
                    state.show_error(&e.to_string());
                    None
                }
            })
            .flatten();
        let Some(request) = request else {
            return;
        };

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = state.api.login(&request).await;

            let outcome = state
                .session
                .try_update(|session| form.try_update(|f| f.finish_submit(result, session)))
                .flatten();

            match outcome {
                Some(LoginOutcome::SignedIn { next, .. }) => {
                    navigate(next.path(), Default::default());
                }
                Some(LoginOutcome::Failed { message }) => {
                    web_sys::console::error_1(&format!("Login failed: {}", message).into());
                }
                None => {}
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-16 bg-white rounded-xl shadow p-8">
            <h1 class="text-2xl font-bold text-center mb-2">{BRAND}</h1>
            <p class="text-gray-500 text-center mb-6">"Iniciar sesión"</p>

            {move || form.with(|f| f.error().map(|message| view! {
                <div class="mb-4 px-4 py-3 rounded-lg bg-red-100 text-red-700">
                    {message.to_string()}
                </div>
            }))}

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-3 border border-gray-300
                               focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Contraseña"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-3 border border-gray-300
                               focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || form.with(LoginForm::is_submitting)
                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                           text-white rounded-lg font-medium transition-colors"
                >
                    {move || {
                        if form.with(LoginForm::is_submitting) {
                            "Ingresando..."
                        } else {
                            "Ingresar"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
