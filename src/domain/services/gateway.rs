use std::sync::Arc;
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::models::{
    appointment::{Appointment, AppointmentPatch, NewAppointment},
    business::{Business, BusinessPatch, NewBusiness},
    professional::{NewProfessional, Professional, ProfessionalPatch},
};
use crate::domain::ports::{AppointmentRepository, BusinessRepository, ProfessionalRepository};
use crate::domain::services::sample_data::{fallback_businesses, fallback_professionals};
use crate::error::AppError;

/// Data access over the three record collections.
///
/// Reads fail soft: list queries fall back to the sample tenants (businesses,
/// professionals) or to nothing (appointments), and single-record lookups
/// report "absent". Writes fail hard and return the store's error. Nothing is
/// cached, retried or made transactional here.
pub struct StoreGateway {
    businesses: Arc<dyn BusinessRepository>,
    professionals: Arc<dyn ProfessionalRepository>,
    appointments: Arc<dyn AppointmentRepository>,
}

impl StoreGateway {
    pub fn new(
        businesses: Arc<dyn BusinessRepository>,
        professionals: Arc<dyn ProfessionalRepository>,
        appointments: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self { businesses, professionals, appointments }
    }

    // Businesses

    pub async fn list_businesses(&self) -> Vec<Business> {
        match self.businesses.list().await {
            Ok(list) => list,
            Err(e) => {
                warn!(collection = "businesses", "list failed, serving sample data: {}", e);
                fallback_businesses()
            }
        }
    }

    pub async fn business_by_slug(&self, slug: &str) -> Option<Business> {
        self.businesses.find_by_slug(slug).await
            .unwrap_or_else(|e| {
                error!(collection = "businesses", slug, "lookup by slug failed: {}", e);
                None
            })
    }

    pub async fn business_by_id(&self, id: &str) -> Option<Business> {
        self.businesses.find_by_id(id).await
            .unwrap_or_else(|e| {
                error!(collection = "businesses", id, "lookup by id failed: {}", e);
                None
            })
    }

    /// Persists a new business and returns it with its assigned id and creation time.
    pub async fn create_business(&self, fields: NewBusiness) -> Result<Business, AppError> {
        let business = Business::from_new(Uuid::new_v4().to_string(), fields, Utc::now());
        let created = self.businesses.create(&business).await.inspect_err(|e| {
            error!(collection = "businesses", "create failed: {}", e);
        })?;
        info!(collection = "businesses", id = %created.id, "created");
        Ok(created)
    }

    pub async fn update_business(&self, id: &str, patch: &BusinessPatch) -> Result<(), AppError> {
        self.businesses.update(id, patch).await.inspect_err(|e| {
            error!(collection = "businesses", id, "update failed: {}", e);
        })
    }

    pub async fn delete_business(&self, id: &str) -> Result<(), AppError> {
        self.businesses.delete(id).await.inspect_err(|e| {
            error!(collection = "businesses", id, "delete failed: {}", e);
        })
    }

    // Professionals

    pub async fn list_professionals(&self) -> Vec<Professional> {
        match self.professionals.list().await {
            Ok(list) => list,
            Err(e) => {
                warn!(collection = "professionals", "list failed, serving sample data: {}", e);
                fallback_professionals()
            }
        }
    }

    pub async fn professionals_of_business(&self, business_id: &str) -> Vec<Professional> {
        self.professionals.list_by_business(business_id).await
            .unwrap_or_else(|e| {
                error!(collection = "professionals", business_id, "list by business failed: {}", e);
                Vec::new()
            })
    }

    pub async fn professional_by_id(&self, id: &str) -> Option<Professional> {
        self.professionals.find_by_id(id).await
            .unwrap_or_else(|e| {
                error!(collection = "professionals", id, "lookup by id failed: {}", e);
                None
            })
    }

    pub async fn create_professional(&self, fields: NewProfessional) -> Result<Professional, AppError> {
        let professional = Professional::from_new(Uuid::new_v4().to_string(), fields);
        let created = self.professionals.create(&professional).await.inspect_err(|e| {
            error!(collection = "professionals", "create failed: {}", e);
        })?;
        info!(collection = "professionals", id = %created.id, "created");
        Ok(created)
    }

    pub async fn update_professional(&self, id: &str, patch: &ProfessionalPatch) -> Result<(), AppError> {
        self.professionals.update(id, patch).await.inspect_err(|e| {
            error!(collection = "professionals", id, "update failed: {}", e);
        })
    }

    pub async fn delete_professional(&self, id: &str) -> Result<(), AppError> {
        self.professionals.delete(id).await.inspect_err(|e| {
            error!(collection = "professionals", id, "delete failed: {}", e);
        })
    }

    // Appointments

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments.list().await
            .unwrap_or_else(|e| {
                warn!(collection = "appointments", "list failed, serving nothing: {}", e);
                Vec::new()
            })
    }

    pub async fn appointments_of_professional(&self, professional_id: &str) -> Vec<Appointment> {
        self.appointments.list_by_professional(professional_id).await
            .unwrap_or_else(|e| {
                error!(collection = "appointments", professional_id, "list by professional failed: {}", e);
                Vec::new()
            })
    }

    pub async fn appointments_of_business(&self, business_id: &str) -> Vec<Appointment> {
        self.appointments.list_by_business(business_id).await
            .unwrap_or_else(|e| {
                error!(collection = "appointments", business_id, "list by business failed: {}", e);
                Vec::new()
            })
    }

    pub async fn appointment_by_id(&self, id: &str) -> Option<Appointment> {
        self.appointments.find_by_id(id).await
            .unwrap_or_else(|e| {
                error!(collection = "appointments", id, "lookup by id failed: {}", e);
                None
            })
    }

    pub async fn create_appointment(&self, fields: NewAppointment) -> Result<Appointment, AppError> {
        let appointment = Appointment::from_new(Uuid::new_v4().to_string(), fields, Utc::now());
        let created = self.appointments.create(&appointment).await.inspect_err(|e| {
            error!(collection = "appointments", "create failed: {}", e);
        })?;
        info!(collection = "appointments", id = %created.id, professional_id = %created.professional_id, "created");
        Ok(created)
    }

    pub async fn update_appointment(&self, id: &str, patch: &AppointmentPatch) -> Result<(), AppError> {
        self.appointments.update(id, patch).await.inspect_err(|e| {
            error!(collection = "appointments", id, "update failed: {}", e);
        })
    }

    pub async fn delete_appointment(&self, id: &str) -> Result<(), AppError> {
        self.appointments.delete(id).await.inspect_err(|e| {
            error!(collection = "appointments", id, "delete failed: {}", e);
        })
    }
}
