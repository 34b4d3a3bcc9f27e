use std::fmt::Write;

use vc_core::board::Board;

/// Run the `overview` subcommand: stage counts plus the financing summary.
pub fn run(board: &Board) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Pipeline Overview");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for stage in board.overview() {
        let marker = if stage.active { ">" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<18} {:<10} {}",
            marker, stage.stage.label, stage.stage.pipeline, stage.count
        );
    }

    let summary = board.financing_summary();
    let _ = writeln!(out);
    let _ = writeln!(out, "Insurance deals:  {}", summary.insurance);
    let _ = writeln!(out, "Cash deals:       {}", summary.cash);
    let _ = writeln!(out, "Financed deals:   {}", summary.financed);
    out
}
