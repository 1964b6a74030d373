//! Domain Types
//!
//! Users, reference data and appointments as the clinic backend returns them.
//! Field names follow the wire format; accessors provide the display forms
//! the screens need.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier for users, doctors, specialties and appointments
pub type Id = i64;

/// Account role, drives the dashboard layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Paciente,
    Doctor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Paciente => "paciente",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user, as returned by the login call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub usuario_id: Id,
    pub email: String,
    pub tipo: Role,
    /// Admin accounts carry no profile, so names are optional
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub apellido: Option<String>,
    /// Specialty name, doctors only
    #[serde(default)]
    pub especialidad: Option<String>,
}

impl User {
    /// "nombre apellido", or the email when the account has no profile
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.nombre.as_deref(), self.apellido.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }

    pub fn is_patient(&self) -> bool {
        self.tipo == Role::Paciente
    }
}

/// Medical specialty (especialidad)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Id,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Doctor offered for a specialty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Id,
    pub nombre: String,
    #[serde(default)]
    pub telefono: Option<String>,
}

/// Appointment status (estado)
///
/// Unknown strings are kept as [`AppointmentStatus::Other`] so a new backend
/// status never breaks the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
    Other(String),
}

impl AppointmentStatus {
    /// Wire label
    pub fn label(&self) -> &str {
        match self {
            AppointmentStatus::Scheduled => "Programada",
            AppointmentStatus::Confirmed => "Confirmada",
            AppointmentStatus::Completed => "Completada",
            AppointmentStatus::Cancelled => "Cancelada",
            AppointmentStatus::NoShow => "No asistió",
            AppointmentStatus::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AppointmentStatus::Other(_))
    }
}

impl From<String> for AppointmentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Programada" => AppointmentStatus::Scheduled,
            "Confirmada" => AppointmentStatus::Confirmed,
            "Completada" => AppointmentStatus::Completed,
            "Cancelada" => AppointmentStatus::Cancelled,
            "No asistió" => AppointmentStatus::NoShow,
            _ => AppointmentStatus::Other(raw),
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(raw: &str) -> Self {
        AppointmentStatus::from(raw.to_string())
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Appointment (cita) as listed for a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Id,
    /// `YYYY-MM-DD HH:MM`
    pub fecha_hora: String,
    pub doctor: String,
    pub especialidad: String,
    pub estado: AppointmentStatus,
    #[serde(default)]
    pub motivo: Option<String>,
}
