//! Dashboard Page
//!
//! Role-based landing page.

use leptos::*;
use leptos_router::*;

use citas::dashboard::{DashboardView, Panel};

use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let Some(user) = state.user() else {
        return view! { <Redirect path="/login" /> }.into_view();
    };
    let dashboard = DashboardView::for_user(&user);

    view! {
        <div class="space-y-8">
            <div>
                <p class="text-gray-500">{dashboard.greeting}</p>
                <h1 class="text-3xl font-bold">{dashboard.title}</h1>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {dashboard
                    .panels
                    .into_iter()
                    .map(|panel| view! { <PanelCard panel=panel /> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn PanelCard(panel: Panel) -> impl IntoView {
    match panel {
        Panel::Action {
            title,
            description,
            link_label,
            route,
        } => view! {
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-xl font-semibold mb-2">{title}</h2>
                <p class="text-gray-500 mb-4">{description}</p>
                <A
                    href=route.path()
                    class="inline-block px-4 py-2 bg-blue-600 hover:bg-blue-700
                           text-white rounded-lg"
                >
                    {link_label}
                </A>
            </section>
        }
        .into_view(),
        Panel::Info { title, lines } => view! {
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-xl font-semibold mb-2">{title}</h2>
                {lines
                    .into_iter()
                    .map(|line| view! { <p class="text-gray-600">{line}</p> })
                    .collect_view()}
            </section>
        }
        .into_view(),
    }
}
