//! Seed data for the board: the built-in demo fixture and JSON fixture files.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{FinancingType, Lead, LeadId, LeadStatus, User, UserId, UserRole};

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("duplicate lead id: {0}")]
    DuplicateLead(LeadId),
}

/// Initial contents of a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub leads: Vec<Lead>,
}

impl Fixture {
    /// The built-in demo data with timestamps relative to `now`.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            users: users(),
            leads: initial_leads(now),
        }
    }

    /// Load a fixture from a JSON file with the same shape as the demo data.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let text =
            std::fs::read_to_string(path.as_ref()).map_err(|e| FixtureError::Io(e.to_string()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        let fixture: Fixture =
            serde_json::from_str(text).map_err(|e| FixtureError::Parse(e.to_string()))?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// A lead may only occupy one column, so ids must be unique.
    pub fn validate(&self) -> Result<(), FixtureError> {
        let mut seen = std::collections::BTreeSet::new();
        for lead in &self.leads {
            if !seen.insert(&lead.id) {
                return Err(FixtureError::DuplicateLead(lead.id.clone()));
            }
        }
        Ok(())
    }
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::from("u1"),
            name: "Alice Admin".into(),
            role: UserRole::Admin,
            team_id: None,
        },
        User {
            id: UserId::from("u2"),
            name: "Bob TeamLead".into(),
            role: UserRole::TeamLead,
            team_id: Some("t1".into()),
        },
        User {
            id: UserId::from("u3"),
            name: "Charlie Sales".into(),
            role: UserRole::SalesRep,
            team_id: Some("t1".into()),
        },
    ]
}

pub fn initial_leads(now: DateTime<Utc>) -> Vec<Lead> {
    let ago = |mins: i64| now - Duration::minutes(mins);
    vec![
        Lead {
            id: LeadId::from("l1"),
            name: "John Smith".into(),
            address: "123 Maple Ave.".into(),
            phone: "555-0101".into(),
            value: "$15k".into(),
            financing_type: FinancingType::Insurance,
            insurance_carrier: Some("State Farm".into()),
            status: LeadStatus::Lead,
            status_note: None,
            assigned_to_id: UserId::from("u3"),
            created_at: ago(10),
            last_activity_at: ago(10),
            converted_at: None,
        },
        Lead {
            id: LeadId::from("l2"),
            name: "Jane Doe".into(),
            address: "456 Oak St.".into(),
            phone: "555-0102".into(),
            value: "$12k".into(),
            financing_type: FinancingType::Cash,
            insurance_carrier: None,
            status: LeadStatus::AppointmentSet,
            status_note: None,
            assigned_to_id: UserId::from("u3"),
            created_at: ago(60),
            last_activity_at: ago(60),
            converted_at: None,
        },
        Lead {
            id: LeadId::from("l3"),
            name: "Bob Jones".into(),
            address: "789 Pine Ln.".into(),
            phone: "555-0103".into(),
            value: "$18k".into(),
            financing_type: FinancingType::Insurance,
            insurance_carrier: Some("Allstate".into()),
            status: LeadStatus::Prospect,
            status_note: Some("Claim Filed".into()),
            assigned_to_id: UserId::from("u3"),
            created_at: ago(120),
            last_activity_at: ago(120),
            converted_at: None,
        },
        Lead {
            id: LeadId::from("l4"),
            name: "Sarah Lee".into(),
            address: "101 Elm Dr.".into(),
            phone: "555-0104".into(),
            value: "$22k".into(),
            financing_type: FinancingType::Financed,
            insurance_carrier: None,
            status: LeadStatus::Approved,
            status_note: Some("Production Ready".into()),
            assigned_to_id: UserId::from("u3"),
            created_at: ago(180),
            last_activity_at: ago(180),
            converted_at: None,
        },
    ]
}
