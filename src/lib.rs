//! # Citas
//!
//! Client for a medical-appointment booking service: login, a role-based
//! dashboard, a form to book an appointment and the list of a patient's
//! appointments. Authentication, scheduling and persistence live in the
//! clinic backend, reached over HTTP.
//!
//! ## Modules
//!
//! - [`session`]: the current user, set on login, cleared on logout
//! - [`routes`]: path → screen mapping and the session guard
//! - [`login`], [`dashboard`], [`booking`], [`listing`]: the four screens
//! - [`api`]: the [`BookingApi`] seam and, with the `client` feature, the
//!   `reqwest` client
//! - `config`: TOML + environment configuration (`client` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use citas::api::HttpClient;
//! use citas::booking::{self, BookingForm, TimeSlot};
//! use citas::config::Config;
//! use citas::login::{self, LoginForm};
//! use citas::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let api = HttpClient::new(&config.api)?;
//!
//!     let mut session = Session::new();
//!     let mut credentials = LoginForm::new("paciente@email.com", "password123");
//!     login::sign_in(&api, &mut credentials, &mut session).await?;
//!     let user = session.user().cloned().ok_or("not signed in")?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     let mut form = BookingForm::new();
//!     booking::load_specialties(&api, &mut form).await;
//!     booking::choose_specialty(&api, &mut form, Some(1)).await;
//!     form.select_doctor(form.doctors().first().map(|d| d.id))?;
//!     form.set_date(Some(booking::min_date(today)), today)?;
//!     form.set_slot(TimeSlot::at_hour(9));
//!
//!     let outcome = booking::submit(&api, &mut form, &user, today).await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod booking;
pub mod dashboard;
pub mod error;
pub mod listing;
pub mod login;
pub mod models;
pub mod routes;
pub mod session;

#[cfg(feature = "client")]
pub mod config;

// Re-export top-level types for convenience
pub use api::{ApiError, ApiResult, BookingApi, CreateAppointmentRequest, LoginRequest};

#[cfg(feature = "client")]
pub use api::HttpClient;

pub use booking::{BookingForm, SubmitOutcome, TimeSlot};
pub use dashboard::{DashboardView, Panel};
pub use error::{Field, FormError};
pub use listing::{AppointmentRow, ListingState, ListingView};
pub use login::{LoginForm, LoginOutcome};
pub use models::{Appointment, AppointmentStatus, Doctor, Id, Role, Specialty, User};
pub use routes::{resolve, Resolution, Route};
pub use session::Session;

#[cfg(feature = "client")]
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
