use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;

use super::UnknownVariant;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl BusinessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessStatus::Active => "active",
            BusinessStatus::Inactive => "inactive",
            BusinessStatus::Suspended => "suspended",
        }
    }

    /// Admin console toggle: an active business goes inactive, anything else is reactivated.
    pub fn toggled(self) -> Self {
        match self {
            BusinessStatus::Active => BusinessStatus::Inactive,
            _ => BusinessStatus::Active,
        }
    }
}

impl FromStr for BusinessStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BusinessStatus::Active),
            "inactive" => Ok(BusinessStatus::Inactive),
            "suspended" => Ok(BusinessStatus::Suspended),
            other => Err(UnknownVariant { kind: "business status", value: other.to_string() }),
        }
    }
}

impl TryFrom<String> for BusinessStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Basic,
    Premium,
    Enterprise,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Basic => "basic",
            Plan::Premium => "premium",
            Plan::Enterprise => "enterprise",
        }
    }
}

impl FromStr for Plan {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Plan::Basic),
            "premium" => Ok(Plan::Premium),
            "enterprise" => Ok(Plan::Enterprise),
            other => Err(UnknownVariant { kind: "plan", value: other.to_string() }),
        }
    }
}

impl TryFrom<String> for Plan {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

pub const DEFAULT_PRIMARY_COLOR: &str = "#1f2937";
pub const DEFAULT_SECONDARY_COLOR: &str = "#3b82f6";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Theme {
    #[sqlx(rename = "primary_color")]
    pub primary: String,
    #[sqlx(rename = "secondary_color")]
    pub secondary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary: DEFAULT_SECONDARY_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub owner_email: String,
    #[sqlx(try_from = "String")]
    pub status: BusinessStatus,
    #[sqlx(try_from = "String")]
    pub plan: Plan,
    pub description: String,
    pub address: String,
    pub phone: String,
    #[sqlx(flatten)]
    pub theme: Theme,
    pub created_at: DateTime<Utc>,
}

/// Business fields as written by the gateway; id and creation time are assigned on create.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NewBusiness {
    pub name: String,
    pub slug: String,
    pub owner_email: String,
    pub status: BusinessStatus,
    pub plan: Plan,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub theme: Theme,
}

impl Business {
    pub fn from_new(id: String, fields: NewBusiness, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            slug: fields.slug,
            owner_email: fields.owner_email,
            status: fields.status,
            plan: fields.plan,
            description: fields.description,
            address: fields.address,
            phone: fields.phone,
            theme: fields.theme,
            created_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BusinessStatus::Active
    }
}

/// Partial update: only the fields that are `Some` are overwritten.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub owner_email: Option<String>,
    pub status: Option<BusinessStatus>,
    pub plan: Option<Plan>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub theme: Option<Theme>,
}

impl BusinessPatch {
    pub fn apply(&self, business: &mut Business) {
        if let Some(name) = &self.name {
            business.name = name.clone();
        }
        if let Some(email) = &self.owner_email {
            business.owner_email = email.clone();
        }
        if let Some(status) = self.status {
            business.status = status;
        }
        if let Some(plan) = self.plan {
            business.plan = plan;
        }
        if let Some(description) = &self.description {
            business.description = description.clone();
        }
        if let Some(address) = &self.address {
            business.address = address.clone();
        }
        if let Some(phone) = &self.phone {
            business.phone = phone.clone();
        }
        if let Some(theme) = &self.theme {
            business.theme = theme.clone();
        }
    }
}

/// The admin "new business" form. The slug is never supplied; it is derived from the name.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BusinessDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner_email: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    pub plan: Option<Plan>,
    pub status: Option<BusinessStatus>,
    pub theme: Option<Theme>,
}
