// src/controller/list.rs
//
// State for the list view: criteria, result rows, counters, loading flag.
// Criteria changes can fire a new query before the prior one resolves, so
// every query gets a generation ticket and only the latest ticket's
// response is applied; stale responses are dropped, never displayed.

use crate::api::types::{PlayerCounts, PlayerSummary};
use crate::api::ApiError;
use crate::config::options::Criteria;

pub type QueryTicket = u64;

#[derive(Debug, Default)]
pub struct ListController {
    pub criteria: Criteria,
    pub players: Vec<PlayerSummary>,
    pub counts: PlayerCounts,
    pub loading: bool,
    seq: QueryTicket,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new list query for the current criteria. Bumps the generation
    /// so any response from an earlier query is recognized as stale.
    pub fn begin_query(&mut self) -> QueryTicket {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    pub fn latest(&self) -> QueryTicket {
        self.seq
    }

    /// Apply a settled list response. Returns false when the response was
    /// superseded by a newer query and was dropped.
    pub fn apply_players(
        &mut self,
        ticket: QueryTicket,
        result: Result<Vec<PlayerSummary>, ApiError>,
    ) -> bool {
        if ticket != self.seq {
            logd!("List: dropped stale response (ticket {ticket}, latest {})", self.seq);
            return false;
        }
        self.loading = false;
        match result {
            Ok(players) => {
                logd!("List: {} players", players.len());
                self.players = players;
            }
            Err(e) => {
                // List errors collapse to an empty result; the user sees
                // "no players found" rather than an error banner.
                logw!("List: fetch failed: {}", e);
                self.players.clear();
            }
        }
        true
    }

    pub fn apply_counts(&mut self, result: Result<PlayerCounts, ApiError>) {
        match result {
            Ok(counts) => self.counts = counts,
            Err(e) => logw!("Counts: fetch failed: {}", e),
        }
    }
}
