// tests/common/mod.rs
//
// Scripted Gateway for exercising the monitor and controllers without a
// network. Call counters use atomics because the trait takes &self.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use pp_browse::api::types::{
    JobAck, JobStatus, PlayerCounts, PlayerDetail, PlayerSummary,
};
use pp_browse::api::{ApiError, Gateway};
use pp_browse::config::options::Criteria;

pub struct MockGateway {
    pub players: Vec<PlayerSummary>,
    pub detail: Option<PlayerDetail>,
    pub counts: PlayerCounts,

    /// start_scrape succeeds when true, else a transport error.
    pub trigger_ok: bool,
    /// How many status checks report in_progress=true before false.
    pub running_ticks: usize,
    /// Status checks fail instead of answering.
    pub fail_tick: bool,
    /// Membership writes fail with a 500.
    pub fail_membership: bool,

    pub list_calls: AtomicUsize,
    pub counts_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
    pub patches: Mutex<Vec<(String, bool)>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            detail: None,
            counts: PlayerCounts::default(),
            trigger_ok: true,
            running_ticks: 0,
            fail_tick: false,
            fail_membership: false,
            list_calls: AtomicUsize::new(0),
            counts_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            patches: Mutex::new(Vec::new()),
        }
    }
}

impl Gateway for MockGateway {
    fn list_players(&self, _criteria: &Criteria) -> Result<Vec<PlayerSummary>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.players.clone())
    }

    fn get_player(&self, slug: &str) -> Result<PlayerDetail, ApiError> {
        match &self.detail {
            Some(d) if d.slug == slug => Ok(d.clone()),
            _ => Err(ApiError::NotFound { slug: slug.into() }),
        }
    }

    fn set_card_membership(&self, card_slug: &str, in_club: bool) -> Result<(), ApiError> {
        self.patches
            .lock()
            .unwrap()
            .push((card_slug.into(), in_club));
        if self.fail_membership {
            return Err(ApiError::Application {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok(())
    }

    fn start_scrape(&self) -> Result<JobAck, ApiError> {
        if self.trigger_ok {
            Ok(JobAck {
                status: "accepted".into(),
                message: "Scrape job started".into(),
            })
        } else {
            Err(ApiError::Transport("connection refused".into()))
        }
    }

    fn scrape_status(&self) -> Result<JobStatus, ApiError> {
        let n = self.status_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_tick {
            return Err(ApiError::Transport("connection reset".into()));
        }
        Ok(JobStatus {
            in_progress: n < self.running_ticks,
        })
    }

    fn player_counts(&self) -> Result<PlayerCounts, ApiError> {
        self.counts_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.counts)
    }
}
