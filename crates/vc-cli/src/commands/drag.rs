use std::fmt::Write;

use chrono::Utc;
use vc_core::board::Board;
use vc_core::transition::{DragOutcome, IgnoreReason};

use super::{record_conversion, record_outcome};

/// What to do with a conversion the drop may have opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

/// Run the `drag` subcommand: one gesture, an optional decision, then the board.
pub fn run(
    board: &mut Board,
    lead: &str,
    target: Option<&str>,
    decision: Option<Decision>,
) -> String {
    let mut out = String::new();

    board.begin_drag(lead);
    let outcome = board.handle_drag_end(lead, target);
    record_outcome(&outcome);
    let _ = writeln!(out, "{}", describe(lead, &outcome));

    if board.conversion().is_open() {
        match decision {
            Some(Decision::Confirm) => {
                if let Some(promoted) = board.confirm_conversion() {
                    record_conversion("confirmed");
                    let _ = writeln!(out, "{} promoted to {}", promoted.id, promoted.status);
                }
            }
            Some(Decision::Cancel) => {
                board.cancel_conversion();
                record_conversion("cancelled");
                let _ = writeln!(out, "conversion cancelled");
            }
            None => {}
        }
    }

    let _ = writeln!(out);
    out.push_str(&super::board::render(board, Utc::now()));
    out
}

pub fn describe(lead: &str, outcome: &DragOutcome) -> String {
    match outcome {
        DragOutcome::Move { to, .. } => format!("{lead} moved to {to}"),
        DragOutcome::RequestConversion(l) => {
            format!("{lead} staged for conversion ({} {})", l.name, l.value)
        }
        DragOutcome::Ignore(reason) => match reason {
            IgnoreReason::NoTarget => format!("{lead} released outside the board"),
            IgnoreReason::UnknownTarget => format!("{lead}: not a column, ignored"),
            IgnoreReason::UnknownLead => format!("{lead}: no such lead, ignored"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_core::types::{LeadId, LeadStatus, PipelineType};

    #[test]
    fn drag_and_confirm_promotes() {
        let mut board = Board::demo();
        let confirm = Some(Decision::Confirm);
        let out = run(&mut board, "l3", Some("CLOSING_TRIGGER"), confirm);
        assert!(out.contains("l3 staged for conversion (Bob Jones $18k)"));
        assert!(out.contains("l3 promoted to APPROVED"));
        assert!(out.contains("Production Board"));
        assert_eq!(board.active_view(), PipelineType::Production);
    }

    #[test]
    fn drag_and_cancel_keeps_lead() {
        let mut board = Board::demo();
        let cancel = Some(Decision::Cancel);
        let out = run(&mut board, "l3", Some("CLOSING_TRIGGER"), cancel);
        assert!(out.contains("conversion cancelled"));
        let lead = board.get(&LeadId::from("l3")).unwrap();
        assert_eq!(lead.status, LeadStatus::Prospect);
    }

    #[test]
    fn decision_without_conversion_is_ignored() {
        let mut board = Board::demo();
        let confirm = Some(Decision::Confirm);
        let out = run(&mut board, "l1", Some("PROSPECT"), confirm);
        assert!(out.contains("l1 moved to PROSPECT"));
        assert!(!out.contains("promoted"));
        assert_eq!(board.active_view(), PipelineType::Pitch);
    }

    #[test]
    fn unknown_target_is_reported() {
        let mut board = Board::demo();
        let out = run(&mut board, "l2", Some("NONEXISTENT_COLUMN"), None);
        assert!(out.contains("l2: not a column, ignored"));
    }
}
