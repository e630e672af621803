use serde::Serialize;
use crate::domain::models::{
    appointment::Appointment,
    auth::Actor,
    business::Business,
    professional::Professional,
};

#[derive(Serialize)]
pub struct LandingResponse {
    pub business: Business,
    pub professionals: Vec<Professional>,
}

#[derive(Serialize)]
pub struct ProfessionalDetailResponse {
    pub business: Business,
    pub professional: Professional,
}

#[derive(Serialize)]
pub struct SlugPreviewResponse {
    pub slug: String,
    pub taken: bool,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub actor: Actor,
    pub professional: Professional,
    pub appointments_today: Vec<Appointment>,
    pub appointments: Vec<Appointment>,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub slots: Vec<String>,
}
