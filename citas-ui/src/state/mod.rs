//! State Management
//!
//! Global application state: the session and toast messages.

pub mod global;

pub use global::{provide_global_state, GlobalState};
