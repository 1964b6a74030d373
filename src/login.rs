//! Login
//!
//! Email/password form. A successful login stores the user in the session
//! and sends the visitor to the dashboard.

use crate::api::{ApiResult, BookingApi, LoginRequest};
use crate::error::{Field, FormError};
use crate::models::User;
use crate::routes::Route;
use crate::session::Session;

pub const LOGIN_ERROR: &str = "Error al iniciar sesión";

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Session started, navigate to `next`
    SignedIn { user: User, next: Route },
    Failed { message: String },
}

/// Login form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    submitting: bool,
    error: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Both fields are required; the email is trimmed, the password is not
    pub fn credentials(&self) -> Result<LoginRequest, FormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Missing(Field::Email));
        }
        if self.password.is_empty() {
            return Err(FormError::Missing(Field::Password));
        }

        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }

    pub fn begin_submit(&mut self) -> Result<LoginRequest, FormError> {
        if self.submitting {
            return Err(FormError::InFlight);
        }
        let request = self.credentials()?;
        self.submitting = true;
        self.error = None;
        Ok(request)
    }

    /// Apply the backend answer; on success the session is started
    pub fn finish_submit(
        &mut self,
        result: ApiResult<User>,
        session: &mut Session,
    ) -> LoginOutcome {
        self.submitting = false;

        match result {
            Ok(user) => {
                self.password.clear();
                session.login(user.clone());
                LoginOutcome::SignedIn {
                    user,
                    next: Route::Dashboard,
                }
            }
            Err(e) => {
                tracing::warn!(email = %self.email, error = %e, "Login failed");
                let message = e.user_message(LOGIN_ERROR);
                self.error = Some(message.clone());
                LoginOutcome::Failed { message }
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Validate, call the backend and start the session
pub async fn sign_in<A: BookingApi + ?Sized>(
    api: &A,
    form: &mut LoginForm,
    session: &mut Session,
) -> Result<LoginOutcome, FormError> {
    let request = form.begin_submit()?;
    let result = api.login(&request).await;
    Ok(form.finish_submit(result, session))
}

/// End the session; the next screen is always the login
pub fn sign_out(session: &mut Session) -> Route {
    session.logout();
    Route::Login
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{patient, Call, FakeApi};
    use crate::routes::{resolve, Resolution};

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            LoginForm::new("  ", "x").credentials(),
            Err(FormError::Missing(Field::Email))
        );
        assert_eq!(
            LoginForm::new("paciente@email.com", "").credentials(),
            Err(FormError::Missing(Field::Password))
        );
    }

    #[tokio::test]
    async fn test_sign_in_starts_session() {
        let api = FakeApi::clinic();
        let mut session = Session::new();
        let mut form = LoginForm::new(" paciente@email.com ", "password123");

        let outcome = sign_in(&api, &mut form, &mut session).await.unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::SignedIn {
                user: patient(),
                next: Route::Dashboard
            }
        );
        assert!(session.is_authenticated());
        assert!(form.password.is_empty());
        assert_eq!(api.calls(), vec![Call::Login("paciente@email.com".to_string())]);
    }

    #[tokio::test]
    async fn test_wrong_password_shows_server_message() {
        let api = FakeApi::clinic();
        let mut session = Session::new();
        let mut form = LoginForm::new("paciente@email.com", "nope");

        let outcome = sign_in(&api, &mut form, &mut session).await.unwrap();
        assert_eq!(
            outcome,
            LoginOutcome::Failed {
                message: "Email o contraseña incorrectos".to_string()
            }
        );
        assert!(!session.is_authenticated());
        assert_eq!(form.error(), Some("Email o contraseña incorrectos"));
    }

    #[tokio::test]
    async fn test_empty_form_makes_no_request() {
        let api = FakeApi::clinic();
        let mut session = Session::new();
        let mut form = LoginForm::default();

        assert!(sign_in(&api, &mut form, &mut session).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_sign_out_guards_protected_routes() {
        let mut session = Session::with_user(patient());
        assert_eq!(sign_out(&mut session), Route::Login);
        assert_eq!(resolve("/mis-citas", &session), Resolution::Redirect(Route::Login));
    }
}
