use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use vc_core::board::Board;
use vc_core::types::PipelineType;

use super::{record_conversion, record_outcome};

/// One step of a replay script.
///
/// ```json
/// [
///   {"drag": {"lead": "l3", "target": "CLOSING_TRIGGER"}},
///   "confirm",
///   {"navigate": "PITCH"}
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Drag {
        lead: String,
        #[serde(default)]
        target: Option<String>,
    },
    Confirm,
    Cancel,
    Navigate(PipelineType),
}

pub fn parse_script(text: &str) -> anyhow::Result<Vec<Step>> {
    serde_json::from_str(text).context("invalid replay script")
}

/// Run the `replay` subcommand.
pub fn run(board: &mut Board, script: &Path) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(script)
        .with_context(|| format!("failed to read {}", script.display()))?;
    let steps = parse_script(&text)?;
    Ok(apply(board, &steps))
}

/// Apply `steps` in order and render a log of what happened plus the final
/// board. Steps never fail; ignored gestures are reported as such.
pub fn apply(board: &mut Board, steps: &[Step]) -> String {
    let mut out = String::new();
    for (i, step) in steps.iter().enumerate() {
        let line = match step {
            Step::Drag { lead, target } => {
                board.begin_drag(lead.as_str());
                let outcome = board.handle_drag_end(lead.as_str(), target.as_deref());
                record_outcome(&outcome);
                super::drag::describe(lead, &outcome)
            }
            Step::Confirm => match board.confirm_conversion() {
                Some(promoted) => {
                    record_conversion("confirmed");
                    format!("{} promoted to {}", promoted.id, promoted.status)
                }
                None => "confirm: nothing staged".to_string(),
            },
            Step::Cancel => {
                let was_open = board.conversion().is_open();
                board.cancel_conversion();
                if was_open {
                    record_conversion("cancelled");
                    "conversion cancelled".to_string()
                } else {
                    "cancel: nothing staged".to_string()
                }
            }
            Step::Navigate(pipeline) => {
                board.navigate(*pipeline);
                format!("showing {}", pipeline.board_title())
            }
        };
        let _ = writeln!(out, "{:>3}. {}", i + 1, line);
    }
    info!(steps = steps.len(), "replay finished");

    let _ = writeln!(out);
    out.push_str(&super::board::render(board, Utc::now()));
    out
}
