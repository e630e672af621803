use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use std::str::FromStr;

use super::{professional::Service, UnknownVariant};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(UnknownVariant { kind: "appointment status", value: other.to_string() }),
        }
    }
}

impl TryFrom<String> for AppointmentStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A client's booking. `service` is a copy taken at booking time, not a reference.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub business_id: String,
    pub professional_id: String,
    pub date: NaiveDate,
    pub time: String,
    #[sqlx(try_from = "String")]
    pub status: AppointmentStatus,
    pub client_name: String,
    pub client_phone: Option<String>,
    #[sqlx(json)]
    pub service: Service,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NewAppointment {
    pub business_id: String,
    pub professional_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub service: Service,
}

impl Appointment {
    pub fn from_new(id: String, fields: NewAppointment, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            business_id: fields.business_id,
            professional_id: fields.professional_id,
            date: fields.date,
            time: fields.time,
            status: fields.status,
            client_name: fields.client_name,
            client_phone: fields.client_phone,
            service: fields.service,
            created_at,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppointmentPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
}
