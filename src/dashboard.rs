//! Dashboard
//!
//! Role-based landing screen: patients get shortcuts to booking and to
//! their appointments, doctors and admins get their own panel.

use crate::models::{Role, User};
use crate::routes::Route;

/// Brand shown in every navbar
pub const BRAND: &str = "Sistema Médico";

/// A card on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// Card with a link to another screen
    Action {
        title: &'static str,
        description: &'static str,
        link_label: &'static str,
        route: Route,
    },
    /// Informational card
    Info {
        title: &'static str,
        lines: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub greeting: String,
    pub title: String,
    pub panels: Vec<Panel>,
}

impl DashboardView {
    pub fn for_user(user: &User) -> Self {
        let panels = match user.tipo {
            Role::Paciente => vec![
                Panel::Action {
                    title: "Nueva Cita",
                    description: "Programa una nueva cita médica",
                    link_label: "Agendar Cita",
                    route: Route::NewAppointment,
                },
                Panel::Action {
                    title: "Mis Citas",
                    description: "Ver mis citas programadas",
                    link_label: "Ver Citas",
                    route: Route::MyAppointments,
                },
            ],
            Role::Doctor => vec![Panel::Info {
                title: "Panel del Doctor",
                lines: vec![format!(
                    "Especialidad: {}",
                    user.especialidad.as_deref().unwrap_or("-")
                )],
            }],
            Role::Admin => vec![Panel::Info {
                title: "Panel de Administración",
                lines: Vec::new(),
            }],
        };

        Self {
            greeting: format!("Bienvenido, {} ({})", user.display_name(), user.tipo),
            title: format!("Dashboard - {}", user.tipo),
            panels,
        }
    }

    /// Screens reachable from the dashboard cards
    pub fn links(&self) -> Vec<Route> {
        self.panels
            .iter()
            .filter_map(|p| match p {
                Panel::Action { route, .. } => Some(*route),
                Panel::Info { .. } => None,
            })
            .collect()
    }
}
