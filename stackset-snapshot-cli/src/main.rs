//! Command-line entry point: collect the stack set snapshot and write it
//! to stdout as one JSON array. Diagnostics go to stderr via `log`, so
//! stdout carries nothing but the document.

use anyhow::Context;
use clap::Parser;
use stackset_snapshot_core::{write_snapshot, StackSetSnapshotService};

/// Snapshot every CloudFormation stack set visible to the caller,
/// with its stack instances, operations, and full description, as a
/// single JSON array on stdout.
///
/// Credentials and region come from the default AWS provider chain.
#[derive(Parser, Debug)]
#[command(name = "stackset-snapshot", version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let Cli {} = Cli::parse();

    let service = StackSetSnapshotService::new()
        .await
        .context("failed to initialize the CloudFormation client")?;

    let records = service
        .snapshot()
        .await
        .context("failed to collect the stack set snapshot")?;
    log::debug!("collected {} stack set records", records.len());

    let stdout = std::io::stdout();
    write_snapshot(stdout.lock(), &records).context("failed to write the snapshot")?;

    Ok(())
}
