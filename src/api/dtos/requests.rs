use crate::domain::models::{auth::Role, business::BusinessStatus};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct BookAppointmentRequest {
    pub service_id: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub client_name: String,
    pub client_phone: Option<String>,
}

#[derive(Deserialize)]
pub struct SetStatusRequest {
    pub status: BusinessStatus,
}

#[derive(Deserialize)]
pub struct SlugPreviewQuery {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    pub password: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct ReplaceSlotsRequest {
    pub slots: Vec<String>,
}

#[derive(Deserialize)]
pub struct AddSlotRequest {
    pub time: String,
}
