use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{professional::Professional, UnknownVariant};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            other => Err(UnknownVariant { kind: "role", value: other.to_string() }),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What an identity provider reports after a successful credential check.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

/// The signed-in user of a session.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub business_id: Option<String>,
    /// Set only when a staff login email matches a professional's email.
    pub professional_id: Option<String>,
}

impl Actor {
    /// Staff are bound to the professional whose login email matches; admins never are.
    pub fn resolve(identity: Identity, professionals: &[Professional]) -> Self {
        let professional = match identity.role {
            Role::Staff => professionals.iter().find(|p| p.email == identity.email),
            Role::Admin => None,
        };

        match professional {
            Some(p) => Self {
                id: p.id.clone(),
                name: p.name.clone(),
                email: identity.email,
                role: identity.role,
                business_id: Some(p.business_id.clone()),
                professional_id: Some(p.id.clone()),
            },
            None => Self {
                id: identity.uid,
                name: identity.display_name,
                email: identity.email,
                role: identity.role,
                business_id: None,
                professional_id: None,
            },
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub actor: Option<Actor>,
}
