// src/monitor.rs
//
// Scrape trigger-and-poll workflow.
//
// ScrapeMonitor is the state machine alone: trigger, tick, acknowledge.
// PollHandle drives it on a worker thread with a fixed wall-clock interval
// and a stop flag; dropping the handle cancels the timer and joins, so no
// tick fires after teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::api::types::JobAck;
use crate::api::{ApiError, Gateway};
use crate::config::consts::{POLL_INTERVAL_MS, POLL_SLICE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorState {
    Idle,
    Triggering,
    Polling,
    /// Job observed finished; owner refreshes dependent data, then acknowledges.
    Done,
    /// Trigger or status check failed; owner surfaces it, then acknowledges.
    Failed,
}

/// Outcome of one status check.
#[derive(Debug)]
pub enum TickOutcome {
    /// Still running; stay in Polling.
    Continue,
    /// running == false observed; dependent data should be refreshed.
    Completed,
    /// The status check failed; polling stops.
    Errored(ApiError),
}

#[derive(Debug)]
pub struct ScrapeMonitor {
    state: MonitorState,
}

impl Default for ScrapeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrapeMonitor {
    pub fn new() -> Self {
        Self {
            state: MonitorState::Idle,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, MonitorState::Triggering | MonitorState::Polling)
    }

    /// Idle → Polling on a successful trigger, Idle → Failed otherwise.
    pub fn trigger(&mut self, gw: &dyn Gateway) -> Result<JobAck, ApiError> {
        debug_assert_eq!(self.state, MonitorState::Idle, "trigger while not idle");
        self.state = MonitorState::Triggering;
        match gw.start_scrape() {
            Ok(ack) => {
                logf!("Scrape: trigger accepted ({})", ack.status);
                self.state = MonitorState::Polling;
                Ok(ack)
            }
            Err(e) => {
                loge!("Scrape: trigger failed: {}", e);
                self.state = MonitorState::Failed;
                Err(e)
            }
        }
    }

    /// One status check; only legal in Polling.
    pub fn tick(&mut self, gw: &dyn Gateway) -> TickOutcome {
        debug_assert_eq!(self.state, MonitorState::Polling, "tick outside Polling");
        match gw.scrape_status() {
            Ok(status) if status.in_progress => TickOutcome::Continue,
            Ok(_) => {
                logf!("Scrape: job finished");
                self.state = MonitorState::Done;
                TickOutcome::Completed
            }
            Err(e) => {
                loge!("Scrape: status check failed: {}", e);
                self.state = MonitorState::Failed;
                TickOutcome::Errored(e)
            }
        }
    }

    /// Done/Failed → Idle, once the owner has refreshed or surfaced the error.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, MonitorState::Done | MonitorState::Failed) {
            self.state = MonitorState::Idle;
        }
    }
}

/// What the poll thread reports back to its owner.
#[derive(Debug)]
pub enum PollEvent {
    /// Trigger accepted; polling has begun.
    Started,
    /// Job completed; the player list and counts should be re-fetched.
    Completed,
    /// Trigger or status check failed; polling stopped.
    Errored(ApiError),
}

/// Owns the background trigger-and-poll thread.
///
/// The stop flag is checked between sleep slices and before every status
/// call and event delivery; `cancel` sets it and joins. After `cancel`
/// returns (or the handle is dropped) no further event is delivered.
pub struct PollHandle {
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn spawn<F>(gw: Arc<dyn Gateway>, on_event: F) -> Self
    where
        F: Fn(PollEvent) + Send + 'static,
    {
        Self::spawn_with_interval(gw, Duration::from_millis(POLL_INTERVAL_MS), on_event)
    }

    pub fn spawn_with_interval<F>(gw: Arc<dyn Gateway>, interval: Duration, on_event: F) -> Self
    where
        F: Fn(PollEvent) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = Arc::clone(&stop);

        let join = thread::spawn(move || {
            let mut monitor = ScrapeMonitor::new();

            match monitor.trigger(gw.as_ref()) {
                Ok(_) => {
                    if stop2.load(Ordering::Relaxed) {
                        return;
                    }
                    on_event(PollEvent::Started);
                }
                Err(e) => {
                    if !stop2.load(Ordering::Relaxed) {
                        on_event(PollEvent::Errored(e));
                    }
                    return;
                }
            }

            let interval_ms = interval.as_millis() as u64;
            loop {
                // Fixed wall-clock pause between checks; each check completes
                // before the next is scheduled. Sliced so cancel is prompt.
                let mut waited = 0u64;
                while waited < interval_ms {
                    if stop2.load(Ordering::Relaxed) {
                        return;
                    }
                    let slice = POLL_SLICE_MS.min(interval_ms - waited);
                    thread::sleep(Duration::from_millis(slice));
                    waited += slice;
                }
                if stop2.load(Ordering::Relaxed) {
                    return;
                }

                match monitor.tick(gw.as_ref()) {
                    TickOutcome::Continue => {}
                    TickOutcome::Completed => {
                        if !stop2.load(Ordering::Relaxed) {
                            on_event(PollEvent::Completed);
                        }
                        return;
                    }
                    TickOutcome::Errored(e) => {
                        if !stop2.load(Ordering::Relaxed) {
                            on_event(PollEvent::Errored(e));
                        }
                        return;
                    }
                }
            }
        });

        Self {
            stop,
            join: Some(join),
        }
    }

    /// Stop polling and wait for the thread. Idempotent.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.as_ref().map_or(true, |j| j.is_finished())
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
