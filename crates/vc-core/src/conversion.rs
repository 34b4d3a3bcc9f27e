use chrono::{DateTime, Utc};
use tracing::info;

use crate::pipeline::CONVERSION_TARGET;
use crate::store::LeadStore;
use crate::types::Lead;

/// Confirm/cancel gate in front of promoting a lead to production.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConversionFlow {
    #[default]
    Closed,
    /// A lead snapshot awaiting confirmation.
    Open(Lead),
}

impl ConversionFlow {
    pub fn is_open(&self) -> bool {
        matches!(self, ConversionFlow::Open(_))
    }

    pub fn staged(&self) -> Option<&Lead> {
        match self {
            ConversionFlow::Open(lead) => Some(lead),
            ConversionFlow::Closed => None,
        }
    }

    /// Stage `lead`. A request while already open replaces the staged lead.
    pub fn request(&mut self, lead: Lead) {
        if let Some(previous) = self.staged() {
            info!(replaced = %previous.id, lead = %lead.id, "conversion request replaced");
        } else {
            info!(lead = %lead.id, "conversion requested");
        }
        *self = ConversionFlow::Open(lead);
    }

    /// Promote the staged lead and close the gate.
    ///
    /// Returns the promoted lead, or `None` when the gate was closed or the
    /// staged lead no longer exists in `store`.
    pub fn confirm(&mut self, store: &mut LeadStore) -> Option<Lead> {
        self.confirm_at(store, Utc::now())
    }

    pub fn confirm_at(&mut self, store: &mut LeadStore, at: DateTime<Utc>) -> Option<Lead> {
        let ConversionFlow::Open(lead) = std::mem::take(self) else {
            return None;
        };
        store.update_status_at(&lead.id, CONVERSION_TARGET, at)?;
        let promoted = store.mark_converted(&lead.id, at)?;
        info!(lead = %promoted.id, "conversion confirmed");
        Some(promoted)
    }

    /// Close the gate without touching the store. No-op when already closed.
    pub fn cancel(&mut self) {
        if let ConversionFlow::Open(lead) = std::mem::take(self) {
            info!(lead = %lead.id, "conversion cancelled");
        }
    }
}
