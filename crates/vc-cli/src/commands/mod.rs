pub mod board;
pub mod drag;
pub mod overview;
pub mod replay;

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use vc_core::board::Board;
use vc_core::config::Config;
use vc_core::seed::Fixture;
use vc_core::transition::DragOutcome;
use vc_core::types::LeadStatus;
use vc_telemetry::metrics::global_metrics;

/// Load the config from `path`, or from the default location when absent.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Config::load().context("failed to load config"),
    }
}

/// Build a board from a fixture file or the built-in demo seed.
pub fn load_board(config: &Config, fixture: Option<&Path>) -> anyhow::Result<Board> {
    let fixture = match fixture {
        Some(path) => Fixture::load_from(path)
            .with_context(|| format!("failed to load fixture from {}", path.display()))?,
        None => Fixture::demo(Utc::now()),
    };
    Ok(Board::new(fixture, config))
}

pub fn record_outcome(outcome: &DragOutcome) {
    let labels = [("outcome", outcome.label())];
    global_metrics().increment_counter("board_drag_outcomes_total", &labels);
}

pub fn record_conversion(result: &str) {
    global_metrics().increment_counter("board_conversions_total", &[("result", result)]);
}

pub fn record_board_gauges(board: &Board) {
    for status in LeadStatus::ALL {
        let count = board.store().count_by_status(status) as i64;
        global_metrics().set_gauge("board_leads", &[("status", status.as_str())], count);
    }
}
