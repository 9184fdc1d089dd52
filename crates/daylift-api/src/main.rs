//! Daylift CLI and REST API entry point.
//!
//! Binary name: `daylift`
//!
//! Parses CLI arguments, initializes configuration and services, then
//! dispatches to the appropriate command handler or starts the REST API
//! server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,daylift=debug",
        _ => "trace",
    };
    let enable_otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    daylift_observe::init_tracing(filter, enable_otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "daylift", &mut std::io::stdout());
        return Ok(());
    }

    // Initialize application state (config, provider, history store)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Advise {
            name,
            mood,
            topic,
            mode,
            tone,
            length,
        } => {
            let args = cli::advise::AdviseArgs {
                name,
                mood,
                topic,
                mode,
                tone,
                length,
            };
            cli::advise::run(&state, args, cli.json).await?;
        }

        Commands::History { limit } => {
            cli::history::show_history(&state, limit, cli.json).await?;
        }

        Commands::Stats => {
            cli::history::show_stats(&state, cli.json).await?;
        }

        Commands::Reset { force } => {
            cli::history::reset(&state, force, cli.json).await?;
        }

        Commands::Serve { port, host, .. } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, provider = %state.config.provider, "starting HTTP server");

            println!(
                "  {} Daylift API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            if state.config.token.is_none() {
                println!(
                    "  {}",
                    console::style("No service token configured: API is open").yellow()
                );
            }
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            daylift_observe::shutdown_tracing();
            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
