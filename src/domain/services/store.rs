use std::collections::HashSet;
use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::models::{
    appointment::{Appointment, NewAppointment},
    business::{Business, BusinessDraft, BusinessPatch, BusinessStatus, NewBusiness},
    professional::{NewProfessional, Professional, ProfessionalPatch},
};
use crate::domain::services::{gateway::StoreGateway, slots::normalize_slots, slug::slugify};
use crate::error::AppError;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct GlobalStats {
    pub business_count: usize,
    pub professional_count: usize,
    pub appointment_count: usize,
    pub appointments_today: usize,
}

/// Today's date on the process clock, as used for bookings and "today" counters.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn compute_stats(
    businesses: &[Business],
    professionals: &[Professional],
    appointments: &[Appointment],
    today: NaiveDate,
) -> GlobalStats {
    GlobalStats {
        business_count: businesses.len(),
        professional_count: professionals.len(),
        appointment_count: appointments.len(),
        appointments_today: appointments.iter().filter(|a| a.date == today).count(),
    }
}

/// In-memory copy of every business, professional and appointment for one session.
///
/// Reads never touch the gateway. Writes go to the gateway first and the
/// in-memory collections change only once the write has succeeded.
pub struct AppStore {
    gateway: Arc<StoreGateway>,
    businesses: Vec<Business>,
    professionals: Vec<Professional>,
    appointments: Vec<Appointment>,
}

impl AppStore {
    /// Issues the three collection reads in parallel. Never fails: the gateway degrades instead.
    pub async fn load(gateway: Arc<StoreGateway>) -> Self {
        let (businesses, professionals, appointments) = tokio::join!(
            gateway.list_businesses(),
            gateway.list_professionals(),
            gateway.list_appointments(),
        );

        info!(
            businesses = businesses.len(),
            professionals = professionals.len(),
            appointments = appointments.len(),
            "store loaded"
        );

        Self { gateway, businesses, professionals, appointments }
    }

    #[cfg(test)]
    pub(crate) fn with_records(
        gateway: Arc<StoreGateway>,
        businesses: Vec<Business>,
        professionals: Vec<Professional>,
        appointments: Vec<Appointment>,
    ) -> Self {
        Self { gateway, businesses, professionals, appointments }
    }

    /// Reconciliation read: replaces every collection with what the gateway reports now.
    pub async fn refresh(&mut self) {
        let fresh = Self::load(self.gateway.clone()).await;
        self.businesses = fresh.businesses;
        self.professionals = fresh.professionals;
        self.appointments = fresh.appointments;
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// First business carrying the slug, in collection order.
    pub fn resolve_business_by_slug(&self, slug: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.slug == slug)
    }

    pub fn business_by_id(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    pub fn professional_by_id(&self, id: &str) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }

    pub fn professionals_of_business(&self, business_id: &str) -> Vec<&Professional> {
        self.professionals.iter().filter(|p| p.business_id == business_id).collect()
    }

    pub fn appointments_of_professional(&self, professional_id: &str) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| a.professional_id == professional_id).collect()
    }

    pub fn appointments_of_business(&self, business_id: &str) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| a.business_id == business_id).collect()
    }

    pub fn global_stats(&self) -> GlobalStats {
        self.global_stats_on(today())
    }

    pub fn global_stats_on(&self, day: NaiveDate) -> GlobalStats {
        compute_stats(&self.businesses, &self.professionals, &self.appointments, day)
    }

    pub async fn create_business(&mut self, draft: BusinessDraft) -> Result<Business, AppError> {
        let name = draft.name.trim().to_string();
        let owner_email = draft.owner_email.trim().to_string();
        if name.is_empty() || owner_email.is_empty() {
            return Err(AppError::Validation("Name and owner email are required".into()));
        }

        let slug = slugify(&name);
        if slug.is_empty() {
            return Err(AppError::Validation("Name must contain at least one letter or digit".into()));
        }
        if self.resolve_business_by_slug(&slug).is_some() {
            return Err(AppError::Conflict(format!("Slug '{}' is already taken", slug)));
        }

        let fields = NewBusiness {
            name,
            slug,
            owner_email,
            status: draft.status.unwrap_or_default(),
            plan: draft.plan.unwrap_or_default(),
            description: draft.description,
            address: draft.address,
            phone: draft.phone,
            theme: draft.theme.unwrap_or_default(),
        };

        let created = self.gateway.create_business(fields).await?;
        self.businesses.push(created.clone());
        Ok(created)
    }

    pub async fn create_professional(&mut self, mut fields: NewProfessional) -> Result<Professional, AppError> {
        if fields.name.trim().is_empty() || fields.email.trim().is_empty() {
            return Err(AppError::Validation("Name and email are required".into()));
        }
        if self.business_by_id(&fields.business_id).is_none() {
            return Err(AppError::Validation(format!("Unknown business '{}'", fields.business_id)));
        }

        let mut seen = HashSet::new();
        for service in &fields.services {
            if service.name.trim().is_empty() {
                return Err(AppError::Validation("Service name is required".into()));
            }
            if !service.price.is_finite() || service.price < 0.0 {
                return Err(AppError::Validation(format!("Service '{}' has an invalid price", service.name)));
            }
            if !seen.insert(service.id.as_str()) {
                return Err(AppError::Validation(format!("Duplicate service id '{}'", service.id)));
            }
        }
        fields.available_slots = normalize_slots(&fields.available_slots)?;

        let created = self.gateway.create_professional(fields).await?;
        self.professionals.push(created.clone());
        Ok(created)
    }

    /// Appends without checking other appointments for the same professional, date and time.
    pub async fn create_appointment(&mut self, fields: NewAppointment) -> Result<Appointment, AppError> {
        let created = self.gateway.create_appointment(fields).await?;
        self.appointments.push(created.clone());
        Ok(created)
    }

    pub async fn set_business_status(&mut self, id: &str, status: BusinessStatus) -> Result<Business, AppError> {
        if self.business_by_id(id).is_none() {
            return Err(AppError::NotFound("Business not found".into()));
        }

        let patch = BusinessPatch { status: Some(status), ..Default::default() };
        if let Err(e) = self.gateway.update_business(id, &patch).await {
            warn!(business_id = id, "status change not applied: {}", e);
            return Err(e);
        }

        let business = self.businesses.iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound("Business not found".into()))?;
        patch.apply(business);
        Ok(business.clone())
    }

    pub async fn toggle_business_status(&mut self, id: &str) -> Result<Business, AppError> {
        let current = self.business_by_id(id)
            .ok_or(AppError::NotFound("Business not found".into()))?
            .status;
        self.set_business_status(id, current.toggled()).await
    }

    /// Replaces a professional's bookable slots. Slots are validated and deduplicated first.
    pub async fn set_professional_slots(&mut self, id: &str, slots: &[String]) -> Result<Vec<String>, AppError> {
        let slots = normalize_slots(slots)?;
        if self.professional_by_id(id).is_none() {
            return Err(AppError::NotFound("Professional not found".into()));
        }

        let patch = ProfessionalPatch::slots(slots.clone());
        if let Err(e) = self.gateway.update_professional(id, &patch).await {
            warn!(professional_id = id, "slot change not applied: {}", e);
            return Err(e);
        }

        let professional = self.professionals.iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Professional not found".into()))?;
        patch.apply(professional);
        Ok(slots)
    }
}
