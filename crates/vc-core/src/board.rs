//! The board: owns the lead store and the conversion gate and exposes the
//! query/command surface the presentation layer binds to.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::Config;
use crate::conversion::ConversionFlow;
use crate::health::{HealthPolicy, LeadHealth};
use crate::pipeline::{OverviewStage, PipelineModel, CONVERSION_VIEW};
use crate::seed::Fixture;
use crate::store::{FinancingSummary, LeadStore};
use crate::transition::{DragEnd, DragOutcome, TransitionEngine};
use crate::types::{Column, Lead, LeadId, LeadStatus, PipelineType, User};

/// One entry of the pipeline overview strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCount {
    pub stage: &'static OverviewStage,
    pub count: usize,
    /// The stage belongs to the pipeline currently on screen.
    pub active: bool,
}

/// Everything a card needs to render, derived at `now`.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub lead: &'a Lead,
    pub health: LeadHealth,
    pub just_dropped: bool,
    pub assignee: Option<&'a User>,
}

#[derive(Debug, Clone)]
pub struct Board {
    store: LeadStore,
    users: Vec<User>,
    pipeline: PipelineModel,
    engine: TransitionEngine,
    conversion: ConversionFlow,
    active_view: PipelineType,
    dragging: Option<LeadId>,
    health: HealthPolicy,
}

impl Board {
    pub fn new(fixture: Fixture, config: &Config) -> Self {
        let pipeline = PipelineModel::new();
        Self {
            store: LeadStore::new(fixture.leads),
            users: fixture.users,
            pipeline,
            engine: TransitionEngine::new(pipeline),
            conversion: ConversionFlow::Closed,
            active_view: config.board.default_pipeline,
            dragging: None,
            health: HealthPolicy::from(&config.health),
        }
    }

    /// A board seeded with the built-in demo data and default settings.
    pub fn demo() -> Self {
        Self::new(Fixture::demo(Utc::now()), &Config::default())
    }

    // -- Queries ------------------------------------------------------------

    pub fn store(&self) -> &LeadStore {
        &self.store
    }

    pub fn all(&self) -> &[Lead] {
        self.store.all()
    }

    pub fn get(&self, id: &LeadId) -> Option<&Lead> {
        self.store.get(id)
    }

    pub fn by_status(&self, status: LeadStatus) -> Vec<&Lead> {
        self.store.by_status(status)
    }

    pub fn columns_for(&self, pipeline: PipelineType) -> Vec<&'static Column> {
        self.pipeline.columns_for(pipeline)
    }

    pub fn visible_columns(&self) -> Vec<&'static Column> {
        self.pipeline.columns_for(self.active_view)
    }

    pub fn active_view(&self) -> PipelineType {
        self.active_view
    }

    pub fn conversion(&self) -> &ConversionFlow {
        &self.conversion
    }

    /// The lead currently being dragged, for the drag overlay.
    pub fn dragging(&self) -> Option<&Lead> {
        self.dragging.as_ref().and_then(|id| self.store.get(id))
    }

    pub fn assignee(&self, lead: &Lead) -> Option<&User> {
        self.users.iter().find(|u| u.id == lead.assigned_to_id)
    }

    pub fn financing_summary(&self) -> FinancingSummary {
        self.store.financing_summary()
    }

    pub fn overview(&self) -> Vec<StageCount> {
        self.pipeline
            .overview_stages()
            .iter()
            .map(|stage| StageCount {
                stage,
                count: self.store.count_by_status(stage.status),
                active: stage.pipeline == self.active_view,
            })
            .collect()
    }

    pub fn card(&self, id: &LeadId, now: DateTime<Utc>) -> Option<CardView<'_>> {
        self.store.get(id).map(|lead| self.card_view(lead, now))
    }

    /// Cards of one column, in store order.
    pub fn column_cards(&self, status: LeadStatus, now: DateTime<Utc>) -> Vec<CardView<'_>> {
        self.store
            .by_status(status)
            .into_iter()
            .map(|lead| self.card_view(lead, now))
            .collect()
    }

    fn card_view<'a>(&'a self, lead: &'a Lead, now: DateTime<Utc>) -> CardView<'a> {
        CardView {
            lead,
            health: self.health.classify(lead, now),
            just_dropped: self.health.just_dropped(lead, now),
            assignee: self.assignee(lead),
        }
    }

    // -- Commands -----------------------------------------------------------

    pub fn begin_drag(&mut self, id: impl Into<LeadId>) {
        self.dragging = Some(id.into());
    }

    /// Apply a drag-release. Never fails: invalid input yields
    /// [`DragOutcome::Ignore`] and leaves the board untouched.
    pub fn handle_drag_end(
        &mut self,
        lead_id: impl Into<LeadId>,
        target: Option<&str>,
    ) -> DragOutcome {
        self.handle_drag_end_at(lead_id, target, Utc::now())
    }

    pub fn handle_drag_end_at(
        &mut self,
        lead_id: impl Into<LeadId>,
        target: Option<&str>,
        at: DateTime<Utc>,
    ) -> DragOutcome {
        self.dragging = None;
        let event = DragEnd::new(lead_id, target);
        let outcome = self.engine.classify(&self.store, &event);
        match &outcome {
            DragOutcome::Ignore(_) => {}
            DragOutcome::RequestConversion(lead) => self.conversion.request(lead.clone()),
            DragOutcome::Move { lead_id, to } => {
                self.store.update_status_at(lead_id, *to, at);
            }
        }
        outcome
    }

    /// Promote the staged lead and switch to the production view.
    pub fn confirm_conversion(&mut self) -> Option<Lead> {
        self.confirm_conversion_at(Utc::now())
    }

    pub fn confirm_conversion_at(&mut self, at: DateTime<Utc>) -> Option<Lead> {
        let promoted = self.conversion.confirm_at(&mut self.store, at)?;
        self.navigate(CONVERSION_VIEW);
        Some(promoted)
    }

    pub fn cancel_conversion(&mut self) {
        self.conversion.cancel();
    }

    pub fn navigate(&mut self, pipeline: PipelineType) {
        if self.active_view != pipeline {
            info!(from = %self.active_view, to = %pipeline, "pipeline view switched");
            self.active_view = pipeline;
        }
    }
}
