//! Command implementations.

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use actify_core::{
    AssignmentFilter, AssignmentLoader, RefreshController, SheetLoader, compose_team_reminder,
};
use actify_ingest::{DEFAULT_SHEET_ID, SheetSource};
use actify_model::ActingAssignment;

use crate::cli::{BroadcastArgs, DashboardArgs, SourceArgs, WatchArgs};
use actify_cli::render;

/// Resolve the export source from CLI flags.
fn resolve_source(args: &SourceArgs) -> SheetSource {
    if let Some(url) = &args.sheet_url {
        return SheetSource::from_url(url.clone());
    }
    let sheet_id = args.sheet_id.as_deref().unwrap_or(DEFAULT_SHEET_ID);
    SheetSource::from_parts(sheet_id, &args.gid)
}

/// One ingestion pass; failures degrade to an empty sequence.
fn load_once(source: SheetSource) -> Result<Vec<ActingAssignment>> {
    let loader = SheetLoader::new(source)?;
    match loader.load() {
        Ok(assignments) => {
            info!(records = assignments.len(), "sheet loaded");
            Ok(assignments)
        }
        Err(error) => {
            warn!(%error, "ingestion failed; continuing with empty data");
            Ok(Vec::new())
        }
    }
}

pub fn run_dashboard(args: &DashboardArgs) -> Result<()> {
    let assignments = load_once(resolve_source(&args.source))?;
    let filter = AssignmentFilter {
        search: args.search.clone(),
        status: args.status.map(Into::into),
    };
    render::print_dashboard(&assignments, &filter, args.limit);
    Ok(())
}

pub fn run_watch(args: &WatchArgs) -> Result<()> {
    let loader = SheetLoader::new(resolve_source(&args.source))?;
    let interval = Duration::from_secs(args.interval_secs);
    let mut controller = RefreshController::spawn(loader, interval);
    let updates = controller
        .take_updates()
        .expect("update stream is available at spawn");
    for snapshot in updates {
        render::print_snapshot(&snapshot);
        if let Some(max) = args.cycles
            && snapshot.cycle >= max
        {
            break;
        }
    }
    controller.dispose();
    Ok(())
}

pub fn run_broadcast(args: &BroadcastArgs) -> Result<()> {
    let assignments = load_once(resolve_source(&args.source))?;
    match compose_team_reminder(&assignments, args.include_expired) {
        Some(message) => {
            println!("{}", message.text);
            println!();
            println!("Link: {}", message.link);
        }
        None => println!("No expiring assignments to broadcast."),
    }
    Ok(())
}
