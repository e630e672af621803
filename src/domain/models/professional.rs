use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A priced, timed offering embedded in its professional's record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub duration_min: u32,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Professional {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub photo_url: String,
    #[sqlx(json)]
    pub available_slots: Vec<String>,
    #[sqlx(json)]
    pub services: Vec<Service>,
    pub location: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NewProfessional {
    pub business_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub available_slots: Vec<String>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub location: String,
}

impl Professional {
    pub fn from_new(id: String, fields: NewProfessional) -> Self {
        Self {
            id,
            business_id: fields.business_id,
            name: fields.name,
            email: fields.email,
            specialty: fields.specialty,
            photo_url: fields.photo_url,
            available_slots: fields.available_slots,
            services: fields.services,
            location: fields.location,
        }
    }

    pub fn service(&self, service_id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == service_id)
    }

    pub fn offers_slot(&self, time: &str) -> bool {
        self.available_slots.iter().any(|s| s == time)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProfessionalPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub specialty: Option<String>,
    pub photo_url: Option<String>,
    pub available_slots: Option<Vec<String>>,
    pub services: Option<Vec<Service>>,
    pub location: Option<String>,
}

impl ProfessionalPatch {
    pub fn slots(slots: Vec<String>) -> Self {
        Self { available_slots: Some(slots), ..Default::default() }
    }

    pub fn apply(&self, professional: &mut Professional) {
        if let Some(name) = &self.name {
            professional.name = name.clone();
        }
        if let Some(email) = &self.email {
            professional.email = email.clone();
        }
        if let Some(specialty) = &self.specialty {
            professional.specialty = specialty.clone();
        }
        if let Some(photo) = &self.photo_url {
            professional.photo_url = photo.clone();
        }
        if let Some(slots) = &self.available_slots {
            professional.available_slots = slots.clone();
        }
        if let Some(services) = &self.services {
            professional.services = services.clone();
        }
        if let Some(location) = &self.location {
            professional.location = location.clone();
        }
    }
}
