//! Appointment Listing
//!
//! "Mis Citas Médicas": loads the user's appointments and turns them into
//! one of three exclusive states (loading, error, list). A loaded list with
//! no rows renders the empty-state call to action instead of the table.

use chrono::{Datelike, NaiveDateTime};

use crate::api::{ApiResult, BookingApi};
use crate::models::{Appointment, AppointmentStatus, Id};

pub const LOAD_ERROR: &str = "Error al cargar las citas";
pub const NO_REASON: &str = "No especificado";
pub const FALLBACK_BADGE: &str = "badge bg-secondary";

/// Status → badge style
const BADGES: [(&str, &str); 5] = [
    ("Programada", "badge bg-primary"),
    ("Confirmada", "badge bg-success"),
    ("Completada", "badge bg-info"),
    ("Cancelada", "badge bg-danger"),
    ("No asistió", "badge bg-warning text-dark"),
];

const WEEKDAYS: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];

const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Badge style for a status; unknown statuses get the neutral style
pub fn badge_class(status: &AppointmentStatus) -> &'static str {
    BADGES
        .iter()
        .find(|(label, _)| *label == status.label())
        .map(|(_, class)| *class)
        .unwrap_or(FALLBACK_BADGE)
}

/// Long Spanish date, e.g. `martes, 20 de octubre de 2026, 08:00`.
/// Unparseable input is returned unchanged.
pub fn format_fecha_hora(raw: &str) -> String {
    const FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    let parsed = FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok());

    match parsed {
        Some(dt) => format!(
            "{}, {} de {} de {}, {}",
            WEEKDAYS[dt.weekday().num_days_from_monday() as usize],
            dt.day(),
            MONTHS[dt.month0() as usize],
            dt.year(),
            dt.format("%H:%M")
        ),
        None => raw.to_string(),
    }
}

/// One table row, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRow {
    pub id: Id,
    pub fecha: String,
    pub doctor: String,
    pub especialidad: String,
    pub estado: String,
    pub badge: &'static str,
    pub motivo: String,
}

impl From<&Appointment> for AppointmentRow {
    fn from(cita: &Appointment) -> Self {
        let motivo = cita
            .motivo
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(NO_REASON)
            .to_string();

        Self {
            id: cita.id,
            fecha: format_fecha_hora(&cita.fecha_hora),
            doctor: cita.doctor.clone(),
            especialidad: cita.especialidad.clone(),
            estado: cita.estado.label().to_string(),
            badge: badge_class(&cita.estado),
            motivo,
        }
    }
}

/// Listing state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListingState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<Appointment>),
}

/// What the screen shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    Loading,
    Error(String),
    /// No appointments: call to action to book the first one
    Empty,
    Table(Vec<AppointmentRow>),
}

impl ListingState {
    pub fn from_result(result: ApiResult<Vec<Appointment>>) -> Self {
        match result {
            Ok(citas) => ListingState::Loaded(citas),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load appointments");
                ListingState::Failed(LOAD_ERROR.to_string())
            }
        }
    }

    pub fn view(&self) -> ListingView {
        match self {
            ListingState::Loading => ListingView::Loading,
            ListingState::Failed(message) => ListingView::Error(message.clone()),
            ListingState::Loaded(citas) if citas.is_empty() => ListingView::Empty,
            ListingState::Loaded(citas) => {
                ListingView::Table(citas.iter().map(AppointmentRow::from).collect())
            }
        }
    }

    /// The error message when loading failed
    pub fn failure(&self) -> Option<&str> {
        match self {
            ListingState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Load the appointments of `usuario_id`
pub async fn load_appointments<A: BookingApi + ?Sized>(api: &A, usuario_id: Id) -> ListingState {
    let result = api.appointments(usuario_id).await;
    if let Ok(citas) = &result {
        tracing::debug!(usuario_id, count = citas.len(), "Loaded appointments");
    }
    ListingState::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeApi};
    use crate::api::ApiError;

    fn cita(estado: &str, motivo: Option<&str>) -> Appointment {
        Appointment {
            id: 1,
            fecha_hora: "2026-10-20 08:00".to_string(),
            doctor: "Dr. Juan Pérez".to_string(),
            especialidad: "Medicina General".to_string(),
            estado: AppointmentStatus::from(estado),
            motivo: motivo.map(str::to_string),
        }
    }

    #[test]
    fn test_badge_table() {
        assert_eq!(badge_class(&AppointmentStatus::Scheduled), "badge bg-primary");
        assert_eq!(badge_class(&AppointmentStatus::Confirmed), "badge bg-success");
        assert_eq!(badge_class(&AppointmentStatus::Completed), "badge bg-info");
        assert_eq!(badge_class(&AppointmentStatus::Cancelled), "badge bg-danger");
        assert_eq!(badge_class(&AppointmentStatus::NoShow), "badge bg-warning text-dark");
    }

    #[test]
    fn test_unknown_status_uses_fallback_badge() {
        let rows = match ListingState::Loaded(vec![cita("En espera", None)]).view() {
            ListingView::Table(rows) => rows,
            other => panic!("expected table, got {:?}", other),
        };
        assert_eq!(rows[0].badge, FALLBACK_BADGE);
        assert_eq!(rows[0].estado, "En espera");
    }

    #[test]
    fn test_empty_list_renders_empty_state() {
        assert_eq!(ListingState::Loaded(Vec::new()).view(), ListingView::Empty);
    }

    #[test]
    fn test_states_are_exclusive() {
        assert_eq!(ListingState::default().view(), ListingView::Loading);
        assert_eq!(
            ListingState::from_result(Err(ApiError::Timeout)).view(),
            ListingView::Error(LOAD_ERROR.to_string())
        );
    }

    #[test]
    fn test_row_formatting() {
        let row = AppointmentRow::from(&cita("Programada", Some("  ")));
        assert_eq!(row.fecha, "martes, 20 de octubre de 2026, 08:00");
        assert_eq!(row.motivo, NO_REASON);

        let row = AppointmentRow::from(&cita("Programada", Some("Chequeo")));
        assert_eq!(row.motivo, "Chequeo");
    }

    #[test]
    fn test_format_fecha_hora() {
        assert_eq!(
            format_fecha_hora("2026-11-02 16:00:00"),
            "lunes, 2 de noviembre de 2026, 16:00"
        );
        assert_eq!(format_fecha_hora("pronto"), "pronto");
    }

    #[tokio::test]
    async fn test_load_appointments() {
        let api = FakeApi {
            appointments: Some(vec![cita("Confirmada", None)]),
            ..FakeApi::clinic()
        };

        let state = load_appointments(&api, 3).await;
        assert!(matches!(state.view(), ListingView::Table(ref rows) if rows.len() == 1));
        assert_eq!(api.calls(), vec![Call::Appointments(3)]);

        let down = FakeApi {
            appointments: None,
            ..FakeApi::clinic()
        };
        assert_eq!(
            load_appointments(&down, 3).await,
            ListingState::Failed(LOAD_ERROR.to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_load_reports_failure() {
        let down = FakeApi {
            appointments: None,
            ..FakeApi::clinic()
        };
        assert_eq!(load_appointments(&down, 3).await.failure(), Some(LOAD_ERROR));

        let empty = FakeApi {
            appointments: Some(Vec::new()),
            ..FakeApi::clinic()
        };
        assert_eq!(load_appointments(&empty, 3).await.failure(), None);
        assert_eq!(ListingState::Loading.failure(), None);
    }
}
