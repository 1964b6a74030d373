//! Clinic REST API Client
//!
//! `reqwest` implementation of [`BookingApi`] used by the CLI.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{
    AppointmentsResponse, BackendStatus, CreateAppointmentRequest, CreateAppointmentResponse,
    DoctorsResponse, ErrorBody, LoginRequest, LoginResponse, SpecialtiesResponse,
};
use super::{ensure_success, paths, ApiError, ApiResult, BookingApi};
use crate::config::ApiConfig;
use crate::models::{Appointment, Doctor, Id, Specialty, User};

/// HTTP client for the clinic backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Build a client from the `[api]` configuration section
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check that the backend answers
    pub async fn status(&self) -> ApiResult<BackendStatus> {
        let response = self.get(paths::STATUS).await?;
        read_json(response).await
    }

    async fn get(&self, path: &str) -> ApiResult<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        self.client.get(&url).send().await.map_err(classify)
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> ApiResult<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        self.client.post(&url).json(body).send().await.map_err(classify)
    }
}

#[async_trait(?Send)]
impl BookingApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        let response = self.post(paths::LOGIN, request).await?;
        let body: LoginResponse = read_json(response).await?;
        ensure_success(body.success, body.message.clone())?;

        body.user
            .ok_or_else(|| ApiError::Decode("login response without user".to_string()))
    }

    async fn specialties(&self) -> ApiResult<Vec<Specialty>> {
        let response = self.get(paths::SPECIALTIES).await?;
        let body: SpecialtiesResponse = read_json(response).await?;
        ensure_success(body.success, body.message)?;
        Ok(body.especialidades)
    }

    async fn doctors(&self, specialty_id: Id) -> ApiResult<Vec<Doctor>> {
        let response = self.get(&paths::doctors(specialty_id)).await?;
        let body: DoctorsResponse = read_json(response).await?;
        ensure_success(body.success, body.message)?;
        Ok(body.doctores)
    }

    async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> ApiResult<Option<Id>> {
        let response = self.post(paths::APPOINTMENTS, request).await?;
        let body: CreateAppointmentResponse = read_json(response).await?;
        ensure_success(body.success, body.message)?;
        Ok(body.cita_id)
    }

    async fn appointments(&self, usuario_id: Id) -> ApiResult<Vec<Appointment>> {
        let response = self.get(&paths::my_appointments(usuario_id)).await?;
        let body: AppointmentsResponse = read_json(response).await?;
        ensure_success(body.success, body.message)?;
        Ok(body.citas)
    }
}

/// Decode a 2xx body, or turn the failure body into [`ApiError::Status`]
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if !status.is_success() {
        let body: ErrorBody = response.json().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            message = ?body.message,
            "Backend rejected request"
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: body.message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn classify(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Stub backend on an ephemeral port, returns its base URL
    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> HttpClient {
        HttpClient::new(&ApiConfig {
            base_url,
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_specialties_and_doctors() {
        let router = Router::new()
            .route(
                "/api/especialidades",
                get(|| async {
                    Json(json!({
                        "success": true,
                        "especialidades": [
                            {
                                "id": 1,
                                "nombre": "Medicina General",
                                "descripcion": "Atención médica integral"
                            },
                            {
                                "id": 2,
                                "nombre": "Cardiología",
                                "descripcion": "Especialidad del corazón"
                            }
                        ]
                    }))
                }),
            )
            .route(
                "/api/doctores/:id",
                get(|Path(id): Path<i64>| async move {
                    let doctores = if id == 1 {
                        json!([{"id": 7, "nombre": "Dr. Juan Pérez", "telefono": "123456789"}])
                    } else {
                        json!([])
                    };
                    Json(json!({"success": true, "doctores": doctores}))
                }),
            );

        let client = client_for(spawn_backend(router).await);

        let specialties = client.specialties().await.unwrap();
        assert_eq!(specialties.len(), 2);
        assert_eq!(specialties[1].nombre, "Cardiología");

        let doctors = client.doctors(1).await.unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].nombre, "Dr. Juan Pérez");

        assert!(client.doctors(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_appointment_sends_body() {
        let received: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&received);

        let router = Router::new().route(
            "/api/citas",
            post(move |Json(body): Json<Value>| {
                let sink = Arc::clone(&sink);
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(json!({
                        "success": true,
                        "message": "Cita creada exitosamente",
                        "cita_id": 41
                    }))
                }
            }),
        );

        let client = client_for(spawn_backend(router).await);
        let request = CreateAppointmentRequest {
            usuario_id: 3,
            doctor_id: 7,
            fecha_hora: "2026-10-20 09:00:00".to_string(),
            motivo: "Control anual".to_string(),
        };

        let id = client.create_appointment(&request).await.unwrap();
        assert_eq!(id, Some(41));

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body["usuario_id"], 3);
        assert_eq!(body["doctor_id"], 7);
        assert_eq!(body["fecha_hora"], "2026-10-20 09:00:00");
        assert_eq!(body["motivo"], "Control anual");
    }

    #[tokio::test]
    async fn test_error_body_message_is_kept() {
        let router = Router::new().route(
            "/api/citas",
            post(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"success": false, "message": "Paciente no encontrado"})),
                )
            }),
        );

        let client = client_for(spawn_backend(router).await);
        let request = CreateAppointmentRequest {
            usuario_id: 99,
            doctor_id: 7,
            fecha_hora: "2026-10-20 09:00:00".to_string(),
            motivo: String::new(),
        };

        let err = client.create_appointment(&request).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: Some("Paciente no encontrado".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_login_and_appointments() {
        let router = Router::new()
            .route(
                "/api/login",
                post(|Json(body): Json<Value>| async move {
                    if body["password"] == "password123" {
                        (
                            StatusCode::OK,
                            Json(json!({
                                "success": true,
                                "message": "Login exitoso",
                                "user": {
                                    "usuario_id": 3,
                                    "email": "paciente@email.com",
                                    "tipo": "paciente",
                                    "nombre": "María",
                                    "apellido": "García"
                                }
                            })),
                        )
                    } else {
                        (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({
                                "success": false,
                                "message": "Email o contraseña incorrectos"
                            })),
                        )
                    }
                }),
            )
            .route(
                "/api/mis-citas/:id",
                get(|Path(id): Path<i64>| async move {
                    assert_eq!(id, 3);
                    Json(json!({
                        "success": true,
                        "citas": [{
                            "id": 5,
                            "fecha_hora": "2026-10-20 08:00",
                            "estado": "Programada",
                            "motivo": "",
                            "doctor": "Dr. Juan Pérez",
                            "especialidad": "Medicina General"
                        }]
                    }))
                }),
            );

        let client = client_for(spawn_backend(router).await);

        let denied = client
            .login(&LoginRequest {
                email: "paciente@email.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(denied.server_message(), Some("Email o contraseña incorrectos"));

        let user = client
            .login(&LoginRequest {
                email: "paciente@email.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.usuario_id, 3);

        let citas = client.appointments(user.usuario_id).await.unwrap();
        assert_eq!(citas.len(), 1);
        assert_eq!(citas[0].doctor, "Dr. Juan Pérez");
    }

    #[tokio::test]
    async fn test_success_false_on_ok_status() {
        let router = Router::new().route(
            "/api/especialidades",
            get(|| async { Json(json!({"success": false, "message": "Error: sin conexión"})) }),
        );

        let client = client_for(spawn_backend(router).await);
        let err = client.specialties().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: Some("Error: sin conexión".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client.specialties().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(
            err.user_message("Error al cargar especialidades"),
            "Error al cargar especialidades"
        );
    }

    #[tokio::test]
    async fn test_status() {
        let router = Router::new().route(
            "/",
            get(|| async {
                Json(json!({"message": "API Sistema Médico", "status": "funcionando"}))
            }),
        );

        let client = client_for(format!("{}/", spawn_backend(router).await));
        let status = client.status().await.unwrap();
        assert_eq!(status.status, "funcionando");
    }
}
