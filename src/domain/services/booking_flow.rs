use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::models::{
    appointment::{AppointmentStatus, NewAppointment},
    professional::{Professional, Service},
};
use crate::domain::services::store::AppStore;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    /// Service and slot can be picked in either order.
    Selecting,
    ReadyToConfirm,
    Confirmed,
}

/// Display-only hand-off to the confirmation view. Never persisted.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Confirmation {
    #[serde(rename = "profesional")]
    pub professional: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "servicio", skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Confirmation {
    /// The same parameters as `key=value` pairs, in hand-off order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("profesional", self.professional.clone()),
            ("fecha", self.date.clone()),
            ("hora", self.time.clone()),
            ("cliente", self.client.clone()),
        ];
        if let Some(service) = &self.service {
            params.push(("servicio", service.clone()));
        }
        if let Some(price) = &self.price {
            params.push(("precio", price.clone()));
        }
        params
    }
}

/// One client's pass through pick-service, pick-slot, confirm for a single professional.
pub struct BookingFlow {
    business_id: String,
    professional: Professional,
    service: Option<Service>,
    slot: Option<String>,
    stage: BookingStage,
}

impl BookingFlow {
    pub fn new(business_id: String, professional: Professional) -> Self {
        Self {
            business_id,
            professional,
            service: None,
            slot: None,
            stage: BookingStage::Selecting,
        }
    }

    pub fn stage(&self) -> BookingStage {
        self.stage
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    pub fn select_service(&mut self, service_id: &str) -> Result<Service, AppError> {
        self.ensure_open()?;
        let service = self.professional.service(service_id)
            .cloned()
            .ok_or_else(|| AppError::Validation(format!("Unknown service '{}'", service_id)))?;
        self.service = Some(service.clone());
        self.advance();
        Ok(service)
    }

    /// Only slots the professional offers right now can be picked.
    pub fn select_slot(&mut self, time: &str) -> Result<(), AppError> {
        self.ensure_open()?;
        if !self.professional.offers_slot(time) {
            return Err(AppError::Validation(format!("Time slot '{}' is not offered", time)));
        }
        self.slot = Some(time.to_string());
        self.advance();
        Ok(())
    }

    /// Creates the appointment for `date`. Structural checks run before any write;
    /// a failed write leaves the flow in `ReadyToConfirm` for a manual retry.
    pub async fn confirm(
        &mut self,
        store: &mut AppStore,
        client_name: &str,
        client_phone: Option<&str>,
        date: NaiveDate,
    ) -> Result<Confirmation, AppError> {
        self.ensure_open()?;

        let client_name = client_name.trim();
        let (Some(service), Some(slot)) = (self.service.clone(), self.slot.clone()) else {
            return Err(AppError::Validation("Please choose a service and a time slot".into()));
        };
        if client_name.is_empty() {
            return Err(AppError::Validation("Client name is required".into()));
        }

        let client_phone = client_phone
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let fields = NewAppointment {
            business_id: self.business_id.clone(),
            professional_id: self.professional.id.clone(),
            date,
            time: slot.clone(),
            status: AppointmentStatus::Confirmed,
            client_name: client_name.to_string(),
            client_phone,
            service: service.clone(),
        };

        let created = store.create_appointment(fields).await.inspect_err(|e| {
            warn!(professional_id = %self.professional.id, "booking not confirmed: {}", e);
        })?;

        self.stage = BookingStage::Confirmed;
        info!(appointment_id = %created.id, professional_id = %created.professional_id, time = %created.time, "booking confirmed");

        Ok(Confirmation {
            professional: self.professional.name.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            time: slot,
            client: client_name.to_string(),
            service: Some(service.name),
            price: Some(service.price.to_string()),
        })
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.stage == BookingStage::Confirmed {
            return Err(AppError::Conflict("Booking already confirmed".into()));
        }
        Ok(())
    }

    fn advance(&mut self) {
        if self.service.is_some() && self.slot.is_some() {
            self.stage = BookingStage::ReadyToConfirm;
        }
    }
}
