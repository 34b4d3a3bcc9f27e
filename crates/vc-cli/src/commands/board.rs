use std::fmt::Write;

use chrono::{DateTime, Utc};
use vc_core::board::Board;
use vc_core::types::PipelineType;

/// Run the `board` subcommand.
pub fn run(board: &mut Board, pipeline: Option<PipelineType>) -> String {
    if let Some(pipeline) = pipeline {
        board.navigate(pipeline);
    }
    render(board, Utc::now())
}

/// Render the active pipeline's columns with their cards.
pub fn render(board: &Board, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", board.active_view().board_title());
    let _ = writeln!(out, "{}", "-".repeat(40));

    for column in board.visible_columns() {
        let cards = board.column_cards(column.id, now);
        let _ = writeln!(out, "{} ({})", column.title, cards.len());
        if cards.is_empty() {
            let _ = writeln!(out, "    (empty stage)");
        }
        for card in cards {
            let lead = card.lead;
            let assignee = card.assignee.map_or("unassigned", |u| u.name.as_str());
            let _ = write!(
                out,
                "  {} {:<4} {:<14} [{}] {:<6} {}",
                card.health.glyph(),
                lead.id,
                lead.name,
                lead.badge_text(),
                lead.value,
                assignee,
            );
            if let Some(note) = &lead.status_note {
                let _ = write!(out, "  ({note})");
            }
            if card.just_dropped {
                let _ = write!(out, "  *");
            }
            out.push('\n');
        }
    }

    if let Some(lead) = board.conversion().staged() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Convert to Job? {} ({}) is waiting for confirmation.",
            lead.name, lead.value
        );
    }
    out
}
