//! Route Guard
//!
//! Maps client paths to screens. Protected screens send anonymous visitors
//! to `/login`; `/login` sends authenticated users to `/dashboard`.

use std::fmt;

use crate::session::Session;

/// A client screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    NewAppointment,
    MyAppointments,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Login,
        Route::Dashboard,
        Route::NewAppointment,
        Route::MyAppointments,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::NewAppointment => "/nueva-cita",
            Route::MyAppointments => "/mis-citas",
        }
    }

    /// Exact path match; `/` and unknown paths have no screen of their own
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a path against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render this screen at the requested path
    Render(Route),
    /// Navigate to this screen instead
    Redirect(Route),
}

impl Resolution {
    /// Screen that ends up on display
    pub fn route(&self) -> Route {
        match self {
            Resolution::Render(route) | Resolution::Redirect(route) => *route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirect(_))
    }
}

/// Guard a known screen
pub fn guard(route: Route, session: &Session) -> Resolution {
    match (route, session.is_authenticated()) {
        (Route::Login, true) => Resolution::Redirect(Route::Dashboard),
        (route, false) if route.requires_session() => Resolution::Redirect(Route::Login),
        (route, _) => Resolution::Render(route),
    }
}

/// Resolve a path to the screen that finally renders, following redirects.
///
/// `/` and unknown paths redirect to `/login`, which in turn forwards an
/// authenticated session to `/dashboard`.
pub fn resolve(path: &str, session: &Session) -> Resolution {
    let Some(route) = Route::from_path(path) else {
        tracing::debug!(path, "No screen for path, redirecting to login");
        return match guard(Route::Login, session) {
            Resolution::Render(route) | Resolution::Redirect(route) => Resolution::Redirect(route),
        };
    };

    match guard(route, session) {
        Resolution::Render(route) => Resolution::Render(route),
        Resolution::Redirect(target) => Resolution::Redirect(guard(target, session).route()),
    }
}
