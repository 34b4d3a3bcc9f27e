use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::types::{FinancingType, Lead, LeadId, LeadStatus};

/// Deal counts per financing type, as shown on the summary row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinancingSummary {
    pub insurance: usize,
    pub cash: usize,
    pub financed: usize,
}

/// Ordered in-memory collection of leads.
///
/// Insertion order is the on-screen card order within a column. Leads are
/// never added or removed after construction; the only mutation is a status
/// change.
#[derive(Debug, Clone, Default)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads }
    }

    pub fn all(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|l| &l.id == id)
    }

    pub fn by_status(&self, status: LeadStatus) -> Vec<&Lead> {
        self.leads.iter().filter(|l| l.status == status).collect()
    }

    pub fn count_by_status(&self, status: LeadStatus) -> usize {
        self.leads.iter().filter(|l| l.status == status).count()
    }

    pub fn financing_summary(&self) -> FinancingSummary {
        self.leads
            .iter()
            .fold(FinancingSummary::default(), |mut acc, lead| {
                match lead.financing_type {
                    FinancingType::Insurance => acc.insurance += 1,
                    FinancingType::Cash => acc.cash += 1,
                    FinancingType::Financed => acc.financed += 1,
                }
                acc
            })
    }

    /// Set `status` and stamp `last_activity_at` with the current time.
    /// Unknown ids are a no-op returning `None`.
    pub fn update_status(&mut self, id: &LeadId, status: LeadStatus) -> Option<Lead> {
        self.update_status_at(id, status, Utc::now())
    }

    /// Like [`update_status`](Self::update_status) with an explicit timestamp.
    ///
    /// `last_activity_at` strictly increases on every change: a stamp that is
    /// not after the current one is bumped to one millisecond past it. A lead
    /// already stamped at the end of the representable range keeps its stamp.
    pub fn update_status_at(
        &mut self,
        id: &LeadId,
        status: LeadStatus,
        at: DateTime<Utc>,
    ) -> Option<Lead> {
        let Some(lead) = self.leads.iter_mut().find(|l| &l.id == id) else {
            debug!(lead = %id, %status, "status update for unknown lead ignored");
            return None;
        };

        let from = lead.status;
        lead.status = status;
        lead.last_activity_at = if at > lead.last_activity_at {
            at
        } else {
            lead.last_activity_at
                .checked_add_signed(Duration::milliseconds(1))
                .unwrap_or(lead.last_activity_at)
        };
        info!(lead = %id, %from, to = %status, "lead status updated");
        Some(lead.clone())
    }

    /// Record the moment a lead left the pitch pipeline.
    pub fn mark_converted(&mut self, id: &LeadId, at: DateTime<Utc>) -> Option<Lead> {
        let lead = self.leads.iter_mut().find(|l| &l.id == id)?;
        lead.converted_at = Some(at);
        Some(lead.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn store() -> LeadStore {
        LeadStore::new(seed::initial_leads(Utc::now()))
    }

    #[test]
    fn by_status_preserves_insertion_order() {
        let mut s = store();
        let at = Utc::now();
        s.update_status_at(&"l3".into(), LeadStatus::Lead, at);
        let ids: Vec<&str> = s
            .by_status(LeadStatus::Lead)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["l1", "l3"]);
    }

    #[test]
    fn stamp_never_moves_backwards() {
        let mut s = store();
        let id = LeadId::from("l1");
        let before = s.get(&id).unwrap().last_activity_at;
        let stale = before - Duration::hours(1);
        let updated = s.update_status_at(&id, LeadStatus::Prospect, stale).unwrap();
        assert!(updated.last_activity_at > before);
    }

    #[test]
    fn stamp_at_end_of_range_is_kept() {
        let mut s = store();
        let id = LeadId::from("l2");
        s.leads[1].last_activity_at = DateTime::<Utc>::MAX_UTC;
        let at = Utc::now();
        let updated = s.update_status_at(&id, LeadStatus::Lead, at).unwrap();
        assert_eq!(updated.status, LeadStatus::Lead);
        assert_eq!(updated.last_activity_at, DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn financing_summary_counts_seed() {
        let summary = store().financing_summary();
        assert_eq!(
            summary,
            FinancingSummary {
                insurance: 2,
                cash: 1,
                financed: 1,
            }
        );
    }

    #[test]
    fn mark_converted_unknown_lead_is_noop() {
        let mut s = store();
        let before = s.all().to_vec();
        assert!(s.mark_converted(&"l99".into(), Utc::now()).is_none());
        assert_eq!(s.all(), before.as_slice());
    }
}
