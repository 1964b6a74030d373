//! Async drivers for the booking form over any [`BookingApi`].

use chrono::NaiveDate;

use super::form::{BookingForm, SubmitOutcome};
use crate::api::BookingApi;
use crate::error::FormError;
use crate::models::{Id, User};

/// Fetch the specialty list on entry
pub async fn load_specialties<A: BookingApi + ?Sized>(api: &A, form: &mut BookingForm) {
    let result = api.specialties().await;
    form.set_specialties(result);
}

/// Change the specialty and load its doctors
///
/// Returns `false` if the doctor list was superseded before it arrived.
pub async fn choose_specialty<A: BookingApi + ?Sized>(
    api: &A,
    form: &mut BookingForm,
    specialty_id: Option<Id>,
) -> bool {
    let Some(ticket) = form.select_specialty(specialty_id) else {
        return true;
    };

    let result = api.doctors(ticket.specialty_id()).await;
    form.apply_doctors(ticket, result)
}

/// Validate and send the form
///
/// Validation failures are returned as `Err` and no request is made.
pub async fn submit<A: BookingApi + ?Sized>(
    api: &A,
    form: &mut BookingForm,
    user: &User,
    today: NaiveDate,
) -> Result<SubmitOutcome, FormError> {
    let request = form.begin_submit(user.usuario_id, today)?;
    tracing::debug!(
        doctor_id = request.doctor_id,
        fecha_hora = %request.fecha_hora,
        "Submitting appointment"
    );

    let result = api.create_appointment(&request).await;
    Ok(form.finish_submit(result))
}
