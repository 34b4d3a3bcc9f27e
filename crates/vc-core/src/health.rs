//! Derived freshness of a lead card. Nothing here is stored on the lead.

use chrono::{DateTime, Duration, Utc};

use crate::config::HealthConfig;
use crate::types::Lead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadHealth {
    Fresh,
    Stale,
    Rotting,
}

impl LeadHealth {
    pub fn glyph(&self) -> &'static str {
        match self {
            LeadHealth::Fresh => " ",
            LeadHealth::Stale => "~",
            LeadHealth::Rotting => "!",
        }
    }
}

/// Thresholds for classifying time since last activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthPolicy {
    pub stale_after: Duration,
    pub rotting_after: Duration,
    pub highlight_window: Duration,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self::from(&HealthConfig::default())
    }
}

impl From<&HealthConfig> for HealthPolicy {
    fn from(cfg: &HealthConfig) -> Self {
        Self {
            stale_after: Duration::days(i64::from(cfg.stale_after_days)),
            rotting_after: Duration::days(i64::from(cfg.rotting_after_days)),
            highlight_window: Duration::milliseconds(cfg.highlight_window_ms as i64),
        }
    }
}

impl HealthPolicy {
    pub fn classify(&self, lead: &Lead, now: DateTime<Utc>) -> LeadHealth {
        let idle = now - lead.last_activity_at;
        if idle >= self.rotting_after {
            LeadHealth::Rotting
        } else if idle >= self.stale_after {
            LeadHealth::Stale
        } else {
            LeadHealth::Fresh
        }
    }

    /// True for a short window after the lead's last status change.
    pub fn just_dropped(&self, lead: &Lead, now: DateTime<Utc>) -> bool {
        let since = now - lead.last_activity_at;
        since >= Duration::zero() && since < self.highlight_window
    }
}
