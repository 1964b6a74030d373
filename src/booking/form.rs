//! Booking Form State
//!
//! State behind the "Agendar Nueva Cita" screen. All transitions are
//! synchronous; network calls happen outside and feed their results back
//! in, so the same state drives the CLI and the browser.
//!
//! # Doctor cascade
//!
//! Every specialty change bumps a generation counter and hands out a
//! [`DoctorTicket`]. A doctor list is only applied when its ticket is still
//! current, so a slow response for a previous specialty can never populate
//! the selector, whatever order the responses arrive in.

use chrono::{Days, NaiveDate};

use super::slots::TimeSlot;
use crate::api::{ApiResult, CreateAppointmentRequest};
use crate::error::{Field, FormError};
use crate::models::{Doctor, Id, Specialty};

pub const SPECIALTIES_ERROR: &str = "Error al cargar especialidades";
pub const DOCTORS_ERROR: &str = "Error al cargar doctores";
pub const CREATE_ERROR: &str = "Error al crear la cita";
pub const CREATED_MESSAGE: &str = "Cita creada exitosamente";

/// Earliest bookable date: the day after `today`
pub fn min_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}

/// Timestamp sent to the backend, `YYYY-MM-DD HH:MM:00`
pub fn fecha_hora(date: NaiveDate, slot: TimeSlot) -> String {
    format!("{} {}:00", date.format("%Y-%m-%d"), slot.value())
}

/// Proof that a doctor request was issued for a given specialty selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorTicket {
    generation: u64,
    specialty_id: Id,
}

impl DoctorTicket {
    pub fn specialty_id(&self) -> Id {
        self.specialty_id
    }
}

/// Result of a finished submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Appointment accepted; notify and go back to the dashboard
    Created { cita_id: Option<Id>, message: String },
    /// Rejected; the form stays editable
    Failed { message: String },
}

/// Booking form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    specialties: Vec<Specialty>,
    doctors: Vec<Doctor>,
    specialty_id: Option<Id>,
    doctor_id: Option<Id>,
    date: Option<NaiveDate>,
    slot: Option<TimeSlot>,
    reason: String,
    generation: u64,
    submitting: bool,
    /// Load or submit failure
    error: Option<String>,
    /// Last refused input; cleared by the next accepted one
    input_error: Option<String>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------- reference data ----------

    /// Store the specialty list, or leave it empty on failure
    pub fn set_specialties(&mut self, result: ApiResult<Vec<Specialty>>) {
        match result {
            Ok(specialties) => self.specialties = specialties,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load specialties");
                self.specialties.clear();
                self.error = Some(SPECIALTIES_ERROR.to_string());
            }
        }
    }

    /// Change the specialty. Always clears the doctor and the doctor list.
    ///
    /// Returns the ticket for the doctor request to issue, or `None` when the
    /// selection was cleared.
    pub fn select_specialty(&mut self, specialty_id: Option<Id>) -> Option<DoctorTicket> {
        self.generation += 1;
        self.specialty_id = specialty_id;
        self.doctor_id = None;
        self.doctors.clear();
        self.input_error = None;

        specialty_id.map(|specialty_id| DoctorTicket {
            generation: self.generation,
            specialty_id,
        })
    }

    /// Apply a doctor list. Returns `false` when the ticket was superseded
    /// and the response was dropped.
    pub fn apply_doctors(
        &mut self,
        ticket: DoctorTicket,
        result: ApiResult<Vec<Doctor>>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::warn!(
                specialty_id = ticket.specialty_id,
                current = ?self.specialty_id,
                "Discarding doctor list for superseded specialty"
            );
            return false;
        }

        match result {
            Ok(doctors) => self.doctors = doctors,
            Err(e) => {
                tracing::warn!(
                    specialty_id = ticket.specialty_id,
                    error = %e,
                    "Failed to load doctors"
                );
                self.doctors.clear();
                self.error = Some(DOCTORS_ERROR.to_string());
            }
        }
        true
    }

    // ---------- inputs ----------

    /// Pick a doctor from the list loaded for the current specialty
    pub fn select_doctor(&mut self, doctor_id: Option<Id>) -> Result<(), FormError> {
        if let Some(id) = doctor_id {
            if !self.offers_doctor(id) {
                return self.refuse(FormError::DoctorNotOffered { doctor_id: id });
            }
        }
        self.doctor_id = doctor_id;
        self.input_error = None;
        Ok(())
    }

    /// Set the date; anything before tomorrow is refused and the previous
    /// value is kept
    pub fn set_date(
        &mut self,
        date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(), FormError> {
        if let Some(date) = date {
            let min = min_date(today);
            if date < min {
                return self.refuse(FormError::DateTooEarly { date, min });
            }
        }
        self.date = date;
        self.input_error = None;
        Ok(())
    }

    pub fn set_slot(&mut self, slot: Option<TimeSlot>) {
        self.slot = slot;
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    // ---------- submission ----------

    /// Build the request without touching state
    pub fn validate(
        &self,
        usuario_id: Id,
        today: NaiveDate,
    ) -> Result<CreateAppointmentRequest, FormError> {
        self.specialty_id.ok_or(FormError::Missing(Field::Specialty))?;
        let doctor_id = self.doctor_id.ok_or(FormError::Missing(Field::Doctor))?;
        let date = self.date.ok_or(FormError::Missing(Field::Date))?;
        let slot = self.slot.ok_or(FormError::Missing(Field::Time))?;

        if !self.offers_doctor(doctor_id) {
            return Err(FormError::DoctorNotOffered { doctor_id });
        }

        // The day may have rolled over since the date was picked
        let min = min_date(today);
        if date < min {
            return Err(FormError::DateTooEarly { date, min });
        }

        Ok(CreateAppointmentRequest {
            usuario_id,
            doctor_id,
            fecha_hora: fecha_hora(date, slot),
            motivo: self.reason.trim().to_string(),
        })
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self, usuario_id: Id, today: NaiveDate) -> bool {
        !self.submitting && self.validate(usuario_id, today).is_ok()
    }

    /// Start a submission: validate and mark it in flight. A validation
    /// failure is kept as the form error.
    pub fn begin_submit(
        &mut self,
        usuario_id: Id,
        today: NaiveDate,
    ) -> Result<CreateAppointmentRequest, FormError> {
        if self.submitting {
            return Err(FormError::InFlight);
        }

        let request = match self.validate(usuario_id, today) {
            Ok(request) => request,
            Err(e) => return self.refuse(e),
        };
        self.submitting = true;
        self.error = None;
        self.input_error = None;
        Ok(request)
    }

    /// Finish a submission with the backend's answer
    pub fn finish_submit(&mut self, result: ApiResult<Option<Id>>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(cita_id) => {
                tracing::info!(?cita_id, "Appointment created");
                SubmitOutcome::Created {
                    cita_id,
                    message: CREATED_MESSAGE.to_string(),
                }
            }
            Err(e) => {
                let message = e.user_message(CREATE_ERROR);
                tracing::warn!(error = %e, "Appointment creation failed");
                self.error = Some(message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }

    // ---------- accessors ----------

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn specialty_id(&self) -> Option<Id> {
        self.specialty_id
    }

    pub fn doctor_id(&self) -> Option<Id> {
        self.doctor_id
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slot(&self) -> Option<TimeSlot> {
        self.slot
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The doctor selector stays disabled until a list is loaded
    pub fn doctor_select_enabled(&self) -> bool {
        !self.doctors.is_empty()
    }

    /// Message for the error banner; a refused input shows over a load
    /// failure
    pub fn error(&self) -> Option<&str> {
        self.input_error.as_deref().or(self.error.as_deref())
    }

    fn refuse<T>(&mut self, e: FormError) -> Result<T, FormError> {
        self.input_error = Some(e.to_string());
        Err(e)
    }

    fn offers_doctor(&self, doctor_id: Id) -> bool {
        self.doctors.iter().any(|d| d.id == doctor_id)
    }
}
