//! Clinic API
//!
//! The backend seam every screen is written against.
//!
//! # Endpoints
//!
//! - `POST /api/login` - Authenticate, returns the user
//! - `GET /api/especialidades` - List specialties
//! - `GET /api/doctores/{especialidad_id}` - Doctors for a specialty
//! - `POST /api/citas` - Create an appointment
//! - `GET /api/mis-citas/{usuario_id}` - Appointments of a patient
//! - `GET /` - Backend status
//!
//! [`HttpClient`] implements [`BookingApi`] with `reqwest` (feature
//! `client`); the WASM front end brings its own implementation.

pub mod dto;
pub mod error;

#[cfg(feature = "client")]
mod client;

#[cfg(test)]
pub(crate) mod fake;

pub use dto::{BackendStatus, CreateAppointmentRequest, LoginRequest};
pub use error::{ApiError, ApiResult};

#[cfg(feature = "client")]
pub use client::HttpClient;

use async_trait::async_trait;

use crate::models::{Appointment, Doctor, Id, Specialty, User};

/// Operations the clinic backend offers to the client
///
/// Futures are not required to be `Send`, so the same flows run on a
/// browser event loop and under tokio.
#[async_trait(?Send)]
pub trait BookingApi {
    /// Authenticate and return the user profile
    async fn login(&self, request: &LoginRequest) -> ApiResult<User>;

    /// All specialties
    async fn specialties(&self) -> ApiResult<Vec<Specialty>>;

    /// Doctors practicing the given specialty
    async fn doctors(&self, specialty_id: Id) -> ApiResult<Vec<Doctor>>;

    /// Create an appointment, returning the new id when the backend reports one
    async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> ApiResult<Option<Id>>;

    /// Appointments booked by the given user
    async fn appointments(&self, usuario_id: Id) -> ApiResult<Vec<Appointment>>;
}

/// Paths relative to the backend base URL
pub mod paths {
    use crate::models::Id;

    pub const LOGIN: &str = "/api/login";
    pub const SPECIALTIES: &str = "/api/especialidades";
    pub const APPOINTMENTS: &str = "/api/citas";
    pub const STATUS: &str = "/";

    pub fn doctors(specialty_id: Id) -> String {
        format!("/api/doctores/{}", specialty_id)
    }

    pub fn my_appointments(usuario_id: Id) -> String {
        format!("/api/mis-citas/{}", usuario_id)
    }
}

/// Turn a `success: false` envelope into an error
pub fn ensure_success(success: bool, message: Option<String>) -> ApiResult<()> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Rejected { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(paths::doctors(4), "/api/doctores/4");
        assert_eq!(paths::my_appointments(12), "/api/mis-citas/12");
    }

    #[test]
    fn test_ensure_success() {
        assert!(ensure_success(true, None).is_ok());
        assert_eq!(
            ensure_success(false, Some("Error: boom".to_string())),
            Err(ApiError::Rejected { message: Some("Error: boom".to_string()) })
        );
    }
}
