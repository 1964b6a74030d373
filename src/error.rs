//! Form Errors
//!
//! Local validation failures. These are raised before any request leaves
//! the client, and their messages are shown to the user as-is.

use chrono::NaiveDate;
use thiserror::Error;

/// A required input on one of the forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Specialty,
    Doctor,
    Date,
    Time,
    Email,
    Password,
}

impl Field {
    /// Prompt shown next to an empty field
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Specialty => "Seleccione especialidad",
            Field::Doctor => "Seleccione doctor",
            Field::Date => "Seleccione fecha",
            Field::Time => "Seleccione hora",
            Field::Email => "Ingrese su email",
            Field::Password => "Ingrese su contraseña",
        }
    }
}

/// Validation errors on the login and booking forms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{}", .0.prompt())]
    Missing(Field),

    #[error("La fecha debe ser posterior a hoy (mínimo {min})")]
    DateTooEarly { date: NaiveDate, min: NaiveDate },

    #[error("El doctor seleccionado no pertenece a la especialidad")]
    DoctorNotOffered { doctor_id: i64 },

    #[error("Hora no disponible: {0}")]
    InvalidSlot(String),

    #[error("Ya hay una solicitud en curso")]
    InFlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        assert_eq!(FormError::Missing(Field::Doctor).to_string(), "Seleccione doctor");
    }

    #[test]
    fn test_date_message_names_minimum() {
        let err = FormError::DateTooEarly {
            date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            min: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        };
        assert!(err.to_string().ends_with("(mínimo 2026-10-18)"));
    }
}
