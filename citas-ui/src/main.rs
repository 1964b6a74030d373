//! Sistema Médico
//!
//! Appointment booking front end built with Leptos (WASM).
//!
//! # Screens
//!
//! - Login with email and password
//! - Dashboard adapted to the user's role
//! - New appointment form (specialty → doctor → date → time)
//! - The patient's appointment list
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Form state, validation and route guarding come from the
//! `citas` crate; this crate wires them to signals and talks to the clinic
//! backend over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
