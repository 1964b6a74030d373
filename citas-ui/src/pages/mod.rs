//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod login;
pub mod my_appointments;
pub mod new_appointment;

pub use dashboard::Dashboard;
pub use login::Login;
pub use my_appointments::MyAppointments;
pub use new_appointment::NewAppointment;
