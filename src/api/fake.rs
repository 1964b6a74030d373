//! In-memory [`BookingApi`] for flow tests. Records every call.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

use super::{ApiError, ApiResult, BookingApi, CreateAppointmentRequest, LoginRequest};
use crate::models::{Appointment, Doctor, Id, Role, Specialty, User};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    Specialties,
    Doctors(Id),
    Create(CreateAppointmentRequest),
    Appointments(Id),
}

#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub user: Option<User>,
    pub specialties: Option<Vec<Specialty>>,
    pub doctors: HashMap<Id, Vec<Doctor>>,
    pub appointments: Option<Vec<Appointment>>,
    pub create_error: Option<ApiError>,
}

impl FakeApi {
    /// Clinic with two specialties and one doctor each
    pub fn clinic() -> Self {
        let mut doctors = HashMap::new();
        doctors.insert(1, vec![doctor(10, "Dr. Juan Pérez")]);
        doctors.insert(2, vec![doctor(20, "Dr. Ana Torres")]);

        Self {
            user: Some(patient()),
            specialties: Some(vec![specialty(1, "Medicina General"), specialty(2, "Cardiología")]),
            doctors,
            appointments: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn unavailable() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

#[async_trait(?Send)]
impl BookingApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        self.record(Call::Login(request.email.clone()));
        match &self.user {
            Some(user) if request.password == "password123" => Ok(user.clone()),
            _ => Err(ApiError::Status {
                status: 401,
                message: Some("Email o contraseña incorrectos".to_string()),
            }),
        }
    }

    async fn specialties(&self) -> ApiResult<Vec<Specialty>> {
        self.record(Call::Specialties);
        self.specialties.clone().ok_or_else(unavailable)
    }

    async fn doctors(&self, specialty_id: Id) -> ApiResult<Vec<Doctor>> {
        self.record(Call::Doctors(specialty_id));
        Ok(self.doctors.get(&specialty_id).cloned().unwrap_or_default())
    }

    async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> ApiResult<Option<Id>> {
        self.record(Call::Create(request.clone()));
        match &self.create_error {
            Some(err) => Err(err.clone()),
            None => Ok(Some(100)),
        }
    }

    async fn appointments(&self, usuario_id: Id) -> ApiResult<Vec<Appointment>> {
        self.record(Call::Appointments(usuario_id));
        self.appointments.clone().ok_or_else(unavailable)
    }
}

pub fn patient() -> User {
    User {
        usuario_id: 3,
        email: "paciente@email.com".to_string(),
        tipo: Role::Paciente,
        nombre: Some("María".to_string()),
        apellido: Some("García".to_string()),
        especialidad: None,
    }
}

pub fn specialty(id: Id, nombre: &str) -> Specialty {
    Specialty {
        id,
        nombre: nombre.to_string(),
        descripcion: None,
    }
}

pub fn doctor(id: Id, nombre: &str) -> Doctor {
    Doctor {
        id,
        nombre: nombre.to_string(),
        telefono: None,
    }
}
