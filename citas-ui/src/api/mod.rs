//! Backend access for the browser.

mod client;

pub use client::GlooApi;
