//! Data Transfer Objects
//!
//! Request bodies and response envelopes for the clinic API.
//! Every response carries a `success` flag and, on failure, a `message`.

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Doctor, Id, Specialty, User};

// ============================================
// AUTH DTOs
// ============================================

/// `POST /api/login` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/login` response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

// ============================================
// REFERENCE DATA DTOs
// ============================================

/// `GET /api/especialidades` response
#[derive(Debug, Deserialize)]
pub struct SpecialtiesResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub especialidades: Vec<Specialty>,
}

/// `GET /api/doctores/{especialidad_id}` response
#[derive(Debug, Deserialize)]
pub struct DoctorsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub doctores: Vec<Doctor>,
}

// ============================================
// APPOINTMENT DTOs
// ============================================

/// `POST /api/citas` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub usuario_id: Id,
    pub doctor_id: Id,
    /// `YYYY-MM-DD HH:MM:SS`
    pub fecha_hora: String,
    pub motivo: String,
}

/// `POST /api/citas` response
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cita_id: Option<Id>,
}

/// `GET /api/mis-citas/{usuario_id}` response
#[derive(Debug, Deserialize)]
pub struct AppointmentsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub citas: Vec<Appointment>,
}

// ============================================
// MISC DTOs
// ============================================

/// `GET /` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub message: String,
    pub status: String,
}

/// Failure body shared by every endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wire_shape() {
        let body = CreateAppointmentRequest {
            usuario_id: 3,
            doctor_id: 1,
            fecha_hora: "2026-10-20 08:00:00".to_string(),
            motivo: String::new(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "usuario_id": 3,
                "doctor_id": 1,
                "fecha_hora": "2026-10-20 08:00:00",
                "motivo": ""
            })
        );
    }

    #[test]
    fn test_failed_login_has_no_user() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"success": false, "message": "Email o contraseña incorrectos"}"#,
        )
        .unwrap();

        assert!(!response.success);
        assert!(response.user.is_none());
        assert_eq!(response.message.as_deref(), Some("Email o contraseña incorrectos"));
    }
}
