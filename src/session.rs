//! Session Holder
//!
//! The current user, set on login and cleared on logout. Every screen reads
//! it; only the login and logout paths write it.

use crate::models::User;

/// In-memory session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that starts out authenticated
    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn login(&mut self, user: User) {
        tracing::info!(usuario_id = user.usuario_id, tipo = %user.tipo, "Session started");
        self.user = Some(user);
    }

    /// Clear the current user, returning it if there was one
    pub fn logout(&mut self) -> Option<User> {
        let previous = self.user.take();
        if let Some(user) = &previous {
            tracing::info!(usuario_id = user.usuario_id, "Session ended");
        }
        previous
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
