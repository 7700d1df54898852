//! Refresh controller: a cancellable scheduled task with a single-flight
//! guard.
//!
//! One worker thread owns the whole fetch-normalize pipeline. Cycles run
//! back to back on that thread, so no two refreshes can interleave and a
//! superseded fetch can never clobber a newer snapshot. Each cycle rebuilds
//! the snapshot wholesale; a failed load degrades to an empty sequence
//! instead of propagating. Disposing the controller (explicitly or on drop)
//! stops the recurring task and joins the worker, so no fetch outlives the
//! dashboard.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use actify_ingest::{SheetClient, SheetSource, tokenize_csv};
use actify_model::ActingAssignment;

use crate::datetime::reference_today;
use crate::error::Result;
use crate::normalize::build_assignments;

/// Default refresh interval: 5 minutes, matching the dashboard timer.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Produces the assignment sequence for one refresh cycle.
pub trait AssignmentLoader: Send + 'static {
    /// Run one full ingestion + normalization pass.
    fn load(&self) -> Result<Vec<ActingAssignment>>;
}

/// The production loader: fetch the CSV export, tokenize, strip the header
/// row, and normalize against today's reference date.
pub struct SheetLoader {
    client: SheetClient,
    source: SheetSource,
}

impl SheetLoader {
    pub fn new(source: SheetSource) -> Result<Self> {
        let client = SheetClient::new()?;
        Ok(Self { client, source })
    }
}

impl AssignmentLoader for SheetLoader {
    fn load(&self) -> Result<Vec<ActingAssignment>> {
        let body = self.client.fetch_csv(&self.source)?;
        let rows = tokenize_csv(&body);
        let data_rows = rows.get(1..).unwrap_or(&[]);
        Ok(build_assignments(data_rows, reference_today()))
    }
}

/// The state published after each refresh cycle. Replaced wholesale, never
/// patched in place.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// The full ordered assignment sequence of the latest cycle.
    pub assignments: Vec<ActingAssignment>,
    /// When the latest cycle completed; `None` before the first cycle.
    pub refreshed_at: Option<DateTime<Local>>,
    /// Monotonic cycle counter, starting at 1.
    pub cycle: u64,
}

enum Control {
    Trigger,
    Shutdown,
}

/// Owns the recurring refresh task.
pub struct RefreshController {
    control: Sender<Control>,
    worker: Option<JoinHandle<()>>,
    shared: Arc<Mutex<DashboardSnapshot>>,
    updates: Option<Receiver<DashboardSnapshot>>,
}

impl RefreshController {
    /// Start the worker: one cycle immediately, then one per interval.
    pub fn spawn<L: AssignmentLoader>(loader: L, interval: Duration) -> Self {
        let shared = Arc::new(Mutex::new(DashboardSnapshot::default()));
        let (control_tx, control_rx) = mpsc::channel();
        let (update_tx, update_rx) = mpsc::channel();
        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || {
            run_worker(&loader, interval, &control_rx, &update_tx, &worker_shared);
        });
        Self {
            control: control_tx,
            worker: Some(worker),
            shared,
            updates: Some(update_rx),
        }
    }

    /// Force an immediate refresh cycle, resetting the interval wait.
    pub fn trigger(&self) {
        let _ = self.control.send(Control::Trigger);
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.shared.lock().unwrap().clone()
    }

    /// Take the stream of per-cycle snapshots. Available once.
    pub fn take_updates(&mut self) -> Option<Receiver<DashboardSnapshot>> {
        self.updates.take()
    }

    /// Stop the recurring task and join the worker.
    pub fn dispose(&mut self) {
        let _ = self.control.send(Control::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn run_worker<L: AssignmentLoader>(
    loader: &L,
    interval: Duration,
    control: &Receiver<Control>,
    updates: &Sender<DashboardSnapshot>,
    shared: &Arc<Mutex<DashboardSnapshot>>,
) {
    let mut cycle = 0u64;
    loop {
        cycle += 1;
        let assignments = match loader.load() {
            Ok(assignments) => assignments,
            Err(error) => {
                // Degrade to an empty sequence; the next cycle is the retry.
                warn!(%error, cycle, "refresh cycle failed");
                Vec::new()
            }
        };
        debug!(cycle, records = assignments.len(), "refresh cycle complete");
        let snapshot = DashboardSnapshot {
            assignments,
            refreshed_at: Some(Local::now()),
            cycle,
        };
        *shared.lock().unwrap() = snapshot.clone();
        // Nobody listening is fine; the shared snapshot is authoritative.
        let _ = updates.send(snapshot);
        match control.recv_timeout(interval) {
            Ok(Control::Trigger) | Err(RecvTimeoutError::Timeout) => {}
            Ok(Control::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actify_model::{ActingStatus, DaysRemaining};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl AssignmentLoader for CountingLoader {
        fn load(&self) -> Result<Vec<ActingAssignment>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(actify_ingest::IngestError::HttpStatus { status: 500 }.into());
            }
            Ok(vec![ActingAssignment {
                sequence_number: (call + 1).to_string(),
                person_name: "Jane".to_string(),
                department: "Finance".to_string(),
                role_title: "Acting Manager".to_string(),
                start_date: "2024-01-01".to_string(),
                end_date: "2024-12-31".to_string(),
                status: ActingStatus::Active,
                days_remaining: DaysRemaining::Known(90),
            }])
        }
    }

    #[test]
    fn test_first_cycle_runs_immediately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut controller = RefreshController::spawn(
            CountingLoader {
                calls: Arc::clone(&calls),
                fail: false,
            },
            Duration::from_secs(60),
        );
        let updates = controller.take_updates().unwrap();
        let snapshot = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(snapshot.cycle, 1);
        assert_eq!(snapshot.assignments.len(), 1);
        assert!(snapshot.refreshed_at.is_some());
        controller.dispose();
    }

    #[test]
    fn test_trigger_forces_prompt_cycle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut controller = RefreshController::spawn(
            CountingLoader {
                calls: Arc::clone(&calls),
                fail: false,
            },
            Duration::from_secs(60),
        );
        let updates = controller.take_updates().unwrap();
        let first = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        controller.trigger();
        let second = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(second.cycle, first.cycle + 1);
        assert!(calls.load(Ordering::SeqCst) >= 2);
        controller.dispose();
    }

    #[test]
    fn test_failed_load_degrades_to_empty_snapshot() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut controller = RefreshController::spawn(
            CountingLoader {
                calls: Arc::clone(&calls),
                fail: true,
            },
            Duration::from_secs(60),
        );
        let updates = controller.take_updates().unwrap();
        let snapshot = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(snapshot.cycle, 1);
        assert!(snapshot.assignments.is_empty());
        controller.dispose();
    }

    #[test]
    fn test_dispose_stops_the_worker() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut controller = RefreshController::spawn(
            CountingLoader {
                calls: Arc::clone(&calls),
                fail: false,
            },
            Duration::from_millis(5),
        );
        let updates = controller.take_updates().unwrap();
        let _ = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        controller.dispose();
        let after_dispose = calls.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(calls.load(Ordering::SeqCst), after_dispose);
    }

    #[test]
    fn test_snapshot_reflects_latest_cycle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut controller = RefreshController::spawn(
            CountingLoader {
                calls: Arc::clone(&calls),
                fail: false,
            },
            Duration::from_secs(60),
        );
        let updates = controller.take_updates().unwrap();
        let published = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.cycle, published.cycle);
        assert_eq!(snapshot.assignments, published.assignments);
        controller.dispose();
    }
}
