//! Appointment Booking
//!
//! Creation flow for a new appointment (cita):
//!
//! 1. Load specialties on entry
//! 2. Selecting a specialty loads its doctors and clears the chosen doctor
//! 3. Date (from tomorrow on), time slot and optional reason
//! 4. Submit once; the control stays disabled while the request is in flight
//!
//! - **form**: synchronous form state, including the doctor-list generation
//!   tickets that keep the specialty → doctor cascade race-free
//! - **flow**: async drivers that run the form against a [`BookingApi`](crate::api::BookingApi)
//! - **slots**: the fixed set of bookable hours

mod flow;
mod form;
mod slots;

pub use flow::{choose_specialty, load_specialties, submit};
pub use form::{
    fecha_hora, min_date, BookingForm, DoctorTicket, SubmitOutcome, CREATED_MESSAGE, CREATE_ERROR,
    DOCTORS_ERROR, SPECIALTIES_ERROR,
};
pub use slots::TimeSlot;
