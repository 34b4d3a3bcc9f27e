//! Classification of drag-release gestures.
//!
//! The engine holds no state: the outcome is a function of the store, the
//! static pipeline and the event. Applying a [`DragOutcome::Move`] is the
//! caller's job (see [`crate::board::Board::handle_drag_end`]).

use tracing::debug;

use crate::pipeline::{PipelineModel, CONVERSION_TRIGGER};
use crate::store::LeadStore;
use crate::types::{Lead, LeadId, LeadStatus};

/// A drag-release as reported by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub lead_id: LeadId,
    /// Id of the element under the pointer, if any.
    pub target: Option<String>,
}

impl DragEnd {
    pub fn new(lead_id: impl Into<LeadId>, target: Option<&str>) -> Self {
        Self {
            lead_id: lead_id.into(),
            target: target.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Released over nothing.
    NoTarget,
    /// Released over something that is not a column.
    UnknownTarget,
    /// The dragged card no longer resolves to a lead.
    UnknownLead,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Ignore(IgnoreReason),
    /// Stage the lead in the conversion gate; nothing is mutated yet.
    RequestConversion(Lead),
    Move { lead_id: LeadId, to: LeadStatus },
}

impl DragOutcome {
    /// Short label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            DragOutcome::Ignore(_) => "ignore",
            DragOutcome::RequestConversion(_) => "request_conversion",
            DragOutcome::Move { .. } => "move",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionEngine {
    pipeline: PipelineModel,
}

impl TransitionEngine {
    pub fn new(pipeline: PipelineModel) -> Self {
        Self { pipeline }
    }

    /// Decide what a drag-release means, in precedence order: no target,
    /// conversion trigger, known column, anything else.
    pub fn classify(&self, store: &LeadStore, event: &DragEnd) -> DragOutcome {
        let outcome = match event.target.as_deref() {
            None => DragOutcome::Ignore(IgnoreReason::NoTarget),
            Some(target) if target == CONVERSION_TRIGGER.as_str() => {
                match store.get(&event.lead_id) {
                    Some(lead) => DragOutcome::RequestConversion(lead.clone()),
                    None => DragOutcome::Ignore(IgnoreReason::UnknownLead),
                }
            }
            Some(target) => match self.pipeline.resolve_target(target) {
                Some(to) if store.get(&event.lead_id).is_some() => DragOutcome::Move {
                    lead_id: event.lead_id.clone(),
                    to,
                },
                Some(_) => DragOutcome::Ignore(IgnoreReason::UnknownLead),
                None => DragOutcome::Ignore(IgnoreReason::UnknownTarget),
            },
        };
        debug!(
            lead = %event.lead_id,
            target = ?event.target,
            outcome = outcome.label(),
            "drag classified"
        );
        outcome
    }
}
