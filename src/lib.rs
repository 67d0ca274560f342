// Copyright 2025 the Geodraw Edit Authors
// SPDX-License-Identifier: Apache-2.0

//! Geodraw Edit: direct vertex editing for map drawing surfaces

pub mod demo;
pub mod editing;
pub mod error;
pub mod geo;
pub mod host;
pub mod model;
pub mod settings;

pub use error::SetupError;

use anyhow::Result;
use demo::Script;

/// Entry point for the demo binary
///
/// Replays a scripted editing session and prints every event the mode
/// published as JSON.
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("geodraw_edit=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let script = script_from_args()?;
    tracing::info!("Replaying {:?} script", script);

    let host = demo::replay(script)?;
    for event in &host.events {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    tracing::info!(
        "{} event(s), {} mode request(s)",
        host.events.len(),
        host.mode_requests.len()
    );
    Ok(())
}

/// Pick the script named on the command line, defaulting to the polygon
fn script_from_args() -> Result<Script> {
    match std::env::args().nth(1) {
        Some(arg) => Script::from_arg(&arg),
        None => Ok(Script::Polygon),
    }
}
