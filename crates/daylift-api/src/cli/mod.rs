//! CLI command definitions and dispatch for the `daylift` binary.
//!
//! Uses clap derive macros for argument parsing. Commands are verbs:
//! `daylift advise`, `daylift history`, `daylift stats`, `daylift serve`.

pub mod advise;
pub mod history;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Daily motivation coach: insight, micro-challenge, affirmation.
#[derive(Parser)]
#[command(name = "daylift", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get today's dose: insight, micro-challenge, affirmation.
    Advise {
        /// Your name.
        #[arg(long)]
        name: String,

        /// Current mood (e.g., Stressed, Focused).
        #[arg(long, default_value = "Neutral")]
        mood: String,

        /// Optional context (what's bothering you?).
        #[arg(long, default_value = "")]
        topic: String,

        /// Coaching mode (daily_boost, focus_coach, calm_reset, confidence_boost).
        #[arg(long, default_value = "daily_boost")]
        mode: String,

        /// Tone (empathetic, direct, encouraging).
        #[arg(long, default_value = "empathetic")]
        tone: String,

        /// Length (short, detailed).
        #[arg(long, default_value = "short")]
        length: String,
    },

    /// Show recorded interactions, newest first.
    History {
        /// Show at most this many records.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show record count, streak, and mood frequency.
    Stats,

    /// Wipe the entire history.
    Reset {
        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Export spans via OpenTelemetry (stdout exporter).
        #[arg(long)]
        otel: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
