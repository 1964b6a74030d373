//! HTTP API Client
//!
//! `gloo-net` implementation of [`BookingApi`] for the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use citas::api::dto::{
    AppointmentsResponse, CreateAppointmentResponse, DoctorsResponse, ErrorBody, LoginResponse,
    SpecialtiesResponse,
};
use citas::api::{ensure_success, paths, ApiError, ApiResult, BookingApi};
use citas::api::{CreateAppointmentRequest, LoginRequest};
use citas::{Appointment, Doctor, Id, Specialty, User};

/// Same origin as the page
pub const DEFAULT_API_BASE: &str = "";

const STORAGE_KEY: &str = "citas_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Clinic backend reached with `fetch`
#[derive(Debug, Clone)]
pub struct GlooApi {
    base_url: String,
}

impl GlooApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client for the base URL stored in the browser
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

#[async_trait(?Send)]
impl BookingApi for GlooApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        let body: LoginResponse = self.post(paths::LOGIN, request).await?;
        ensure_success(body.success, body.message.clone())?;

        body.user
            .ok_or_else(|| ApiError::Decode("login response without user".to_string()))
    }

    async fn specialties(&self) -> ApiResult<Vec<Specialty>> {
        let body: SpecialtiesResponse = self.get(paths::SPECIALTIES).await?;
        ensure_success(body.success, body.message)?;
        Ok(body.especialidades)
    }

    async fn doctors(&self, specialty_id: Id) -> ApiResult<Vec<Doctor>> {
        let body: DoctorsResponse = self.get(&paths::doctors(specialty_id)).await?;
        ensure_success(body.success, body.message)?;
        Ok(body.doctores)
    }

    async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> ApiResult<Option<Id>> {
        let body: CreateAppointmentResponse = self.post(paths::APPOINTMENTS, request).await?;
        ensure_success(body.success, body.message)?;
        Ok(body.cita_id)
    }

    async fn appointments(&self, usuario_id: Id) -> ApiResult<Vec<Appointment>> {
        let body: AppointmentsResponse = self.get(&paths::my_appointments(usuario_id)).await?;
        ensure_success(body.success, body.message)?;
        Ok(body.citas)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        let status = response.status();
        let body: ErrorBody = response.json().await.unwrap_or_default();
        return Err(ApiError::Status {
            status,
            message: body.message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let api = GlooApi::new("http://localhost:5000/");
        assert_eq!(api.url(paths::LOGIN), "http://localhost:5000/api/login");
    }

    #[test]
    fn test_same_origin_paths() {
        let api = GlooApi::new(DEFAULT_API_BASE);
        assert_eq!(api.url(&paths::my_appointments(3)), "/api/mis-citas/3");
    }
}
