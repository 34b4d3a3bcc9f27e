mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vc_core::types::PipelineType;

/// velocity -- inspect and exercise the lead pipeline board from a terminal.
#[derive(Parser)]
#[command(name = "velocity", version, about)]
struct Cli {
    /// Config file (defaults to ~/.velocity/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON fixture replacing the built-in demo leads.
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Print board metrics in Prometheus format after the command.
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the board columns and cards (default when no subcommand is given).
    Board {
        /// Pipeline to show instead of the configured default.
        #[arg(short, long)]
        pipeline: Option<PipelineType>,
    },

    /// Show per-stage counts and the financing summary.
    Overview,

    /// Drop a lead on a column and print the resulting board.
    Drag {
        /// Lead id, e.g. `l3`.
        lead: String,
        /// Column id to drop on; omit to release over nothing.
        target: Option<String>,
        /// Confirm the conversion if the drop opened one.
        #[arg(long, conflicts_with = "cancel")]
        confirm: bool,
        /// Cancel the conversion if the drop opened one.
        #[arg(long)]
        cancel: bool,
    },

    /// Apply a JSON list of steps and print the final board.
    Replay {
        /// Path to the script.
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = commands::load_config(cli.config.as_deref())?;
    if cli.json_logs {
        vc_telemetry::logging::init_logging_json("velocity", &config.general.log_level);
    } else {
        vc_telemetry::logging::init_logging("velocity", &config.general.log_level);
    }

    let mut board = commands::load_board(&config, cli.fixture.as_deref())?;

    let output = match cli.command {
        None => commands::board::run(&mut board, None),
        Some(Commands::Board { pipeline }) => commands::board::run(&mut board, pipeline),
        Some(Commands::Overview) => commands::overview::run(&board),
        Some(Commands::Drag {
            lead,
            target,
            confirm,
            cancel,
        }) => {
            let decision = match (confirm, cancel) {
                (true, _) => Some(commands::drag::Decision::Confirm),
                (_, true) => Some(commands::drag::Decision::Cancel),
                _ => None,
            };
            commands::drag::run(&mut board, &lead, target.as_deref(), decision)
        }
        Some(Commands::Replay { script }) => commands::replay::run(&mut board, &script)?,
    };
    print!("{output}");

    if cli.metrics {
        commands::record_board_gauges(&board);
        let metrics = vc_telemetry::metrics::global_metrics();
        print!("{}", metrics.export_prometheus());
    }

    Ok(())
}
