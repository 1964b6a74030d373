//! Toast Notification Component
//!
//! Shows success and error messages from [`GlobalState`].

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dismiss_state = state.clone();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white
                                px-4 py-3 rounded-lg shadow-lg">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}

            // Errors stay until the timeout or a click
            {move || {
                let state = dismiss_state.clone();
                dismiss_state.error.get().map(move |msg| view! {
                    <button
                        on:click=move |_| state.clear_error()
                        class="flex items-center space-x-3 bg-red-600 text-white
                               px-4 py-3 rounded-lg shadow-lg"
                    >
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </button>
                })
            }}
        </div>
    }
}
