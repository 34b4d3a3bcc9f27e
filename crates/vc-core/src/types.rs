use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Stable identifier of a lead (e.g. `"l3"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LeadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for LeadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Identifier of a user. Leads hold it as a weak reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown lead status: {0:?}")]
    LeadStatus(String),
    #[error("unknown pipeline: {0:?}")]
    Pipeline(String),
}

// ---------------------------------------------------------------------------
// LeadStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    Lead,
    AppointmentSet,
    Prospect,
    /// Gesture target on the pitch board; dropping here opens the conversion gate.
    ClosingTrigger,
    Approved,
    ProjectScheduled,
    Completed,
    Invoiced,
    ClosedDeal,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 9] = [
        LeadStatus::Lead,
        LeadStatus::AppointmentSet,
        LeadStatus::Prospect,
        LeadStatus::ClosingTrigger,
        LeadStatus::Approved,
        LeadStatus::ProjectScheduled,
        LeadStatus::Completed,
        LeadStatus::Invoiced,
        LeadStatus::ClosedDeal,
    ];

    /// Wire identifier, identical to the column id used as a drop target.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Lead => "LEAD",
            LeadStatus::AppointmentSet => "APPOINTMENT_SET",
            LeadStatus::Prospect => "PROSPECT",
            LeadStatus::ClosingTrigger => "CLOSING_TRIGGER",
            LeadStatus::Approved => "APPROVED",
            LeadStatus::ProjectScheduled => "PROJECT_SCHEDULED",
            LeadStatus::Completed => "COMPLETED",
            LeadStatus::Invoiced => "INVOICED",
            LeadStatus::ClosedDeal => "CLOSED_DEAL",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::LeadStatus(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// PipelineType / ColumnPipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineType {
    /// Pre-sale stages.
    Pitch,
    /// Post-sale fulfillment stages.
    Production,
}

impl PipelineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineType::Pitch => "PITCH",
            PipelineType::Production => "PRODUCTION",
        }
    }

    pub fn board_title(&self) -> &'static str {
        match self {
            PipelineType::Pitch => "Pitch Board",
            PipelineType::Production => "Production Board",
        }
    }
}

impl std::fmt::Display for PipelineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for PipelineType {
    type Err = ParseError;

    /// Case-insensitive so CLI flags like `--pipeline production` parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PITCH" => Ok(PipelineType::Pitch),
            "PRODUCTION" => Ok(PipelineType::Production),
            _ => Err(ParseError::Pipeline(s.to_string())),
        }
    }
}

/// Which pipeline a column is shown on. `Both` is the shared marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnPipeline {
    Pitch,
    Production,
    Both,
}

impl ColumnPipeline {
    pub fn includes(&self, pipeline: PipelineType) -> bool {
        matches!(
            (self, pipeline),
            (ColumnPipeline::Both, _)
                | (ColumnPipeline::Pitch, PipelineType::Pitch)
                | (ColumnPipeline::Production, PipelineType::Production)
        )
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: LeadStatus,
    pub title: &'static str,
    pub pipeline: ColumnPipeline,
}

// ---------------------------------------------------------------------------
// FinancingType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancingType {
    Insurance,
    Cash,
    Financed,
}

// ---------------------------------------------------------------------------
// Lead
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Free text deal size such as `"$15k"`; never parsed.
    pub value: String,
    pub financing_type: FinancingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_carrier: Option<String>,
    pub status: LeadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_note: Option<String>,
    pub assigned_to_id: UserId,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_at: Option<DateTime<Utc>>,
}

impl Lead {
    /// Short label shown on the card's financing badge.
    pub fn badge_text(&self) -> &str {
        match self.financing_type {
            FinancingType::Insurance => self.insurance_carrier.as_deref().unwrap_or(""),
            FinancingType::Cash => "Cash Bid",
            FinancingType::Financed => "Financed",
        }
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    TeamLead,
    SalesRep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
