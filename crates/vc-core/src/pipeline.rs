//! Static stage definitions for the two board pipelines.

use crate::types::{Column, ColumnPipeline, LeadStatus, PipelineType};

/// Column id of the conversion gate on the pitch board.
pub const CONVERSION_TRIGGER: LeadStatus = LeadStatus::ClosingTrigger;

/// Status a lead receives when a conversion is confirmed.
pub const CONVERSION_TARGET: LeadStatus = LeadStatus::Approved;

/// Pipeline shown after a conversion is confirmed.
pub const CONVERSION_VIEW: PipelineType = PipelineType::Production;

static COLUMNS: [Column; 9] = [
    // Pitch board
    Column {
        id: LeadStatus::Lead,
        title: "New Lead",
        pipeline: ColumnPipeline::Pitch,
    },
    Column {
        id: LeadStatus::AppointmentSet,
        title: "Appointment Set",
        pipeline: ColumnPipeline::Pitch,
    },
    Column {
        id: LeadStatus::Prospect,
        title: "Prospect / Bid",
        pipeline: ColumnPipeline::Pitch,
    },
    Column {
        id: LeadStatus::ClosingTrigger,
        title: "Closing (Hand-off)",
        pipeline: ColumnPipeline::Pitch,
    },
    // Production board
    Column {
        id: LeadStatus::Approved,
        title: "Approved",
        pipeline: ColumnPipeline::Production,
    },
    Column {
        id: LeadStatus::ProjectScheduled,
        title: "Scheduled",
        pipeline: ColumnPipeline::Production,
    },
    Column {
        id: LeadStatus::Completed,
        title: "Completed",
        pipeline: ColumnPipeline::Production,
    },
    Column {
        id: LeadStatus::Invoiced,
        title: "Invoiced",
        pipeline: ColumnPipeline::Production,
    },
    Column {
        id: LeadStatus::ClosedDeal,
        title: "Closed Deal",
        pipeline: ColumnPipeline::Production,
    },
];

/// A stage on the pipeline overview strip. The conversion trigger is not a
/// storage bucket, so it never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewStage {
    pub status: LeadStatus,
    pub label: &'static str,
    pub pipeline: PipelineType,
}

static OVERVIEW: [OverviewStage; 8] = [
    OverviewStage {
        status: LeadStatus::Lead,
        label: "Lead",
        pipeline: PipelineType::Pitch,
    },
    OverviewStage {
        status: LeadStatus::AppointmentSet,
        label: "Appointment Set",
        pipeline: PipelineType::Pitch,
    },
    OverviewStage {
        status: LeadStatus::Prospect,
        label: "Prospect",
        pipeline: PipelineType::Pitch,
    },
    OverviewStage {
        status: LeadStatus::Approved,
        label: "Approved",
        pipeline: PipelineType::Production,
    },
    OverviewStage {
        status: LeadStatus::ProjectScheduled,
        label: "Project Scheduled",
        pipeline: PipelineType::Production,
    },
    OverviewStage {
        status: LeadStatus::Completed,
        label: "Completed",
        pipeline: PipelineType::Production,
    },
    OverviewStage {
        status: LeadStatus::Invoiced,
        label: "Invoiced",
        pipeline: PipelineType::Production,
    },
    OverviewStage {
        status: LeadStatus::ClosedDeal,
        label: "Closed Deal",
        pipeline: PipelineType::Production,
    },
];

/// Immutable lookup over the board's columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineModel;

impl PipelineModel {
    pub fn new() -> Self {
        Self
    }

    /// Every column in declared order.
    pub fn columns(&self) -> &'static [Column] {
        &COLUMNS
    }

    /// Columns shown on `pipeline`, in declared order.
    pub fn columns_for(&self, pipeline: PipelineType) -> Vec<&'static Column> {
        COLUMNS
            .iter()
            .filter(|c| c.pipeline.includes(pipeline))
            .collect()
    }

    pub fn column(&self, id: LeadStatus) -> Option<&'static Column> {
        COLUMNS.iter().find(|c| c.id == id)
    }

    pub fn pipeline_of(&self, id: LeadStatus) -> Option<ColumnPipeline> {
        self.column(id).map(|c| c.pipeline)
    }

    /// Map a raw drop-target id onto a known column. Anything else, including
    /// card ids and malformed strings, resolves to `None`.
    pub fn resolve_target(&self, target: &str) -> Option<LeadStatus> {
        let status = target.parse::<LeadStatus>().ok()?;
        self.column(status).map(|c| c.id)
    }

    pub fn overview_stages(&self) -> &'static [OverviewStage] {
        &OVERVIEW
    }
}
