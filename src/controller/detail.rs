// src/controller/detail.rs
//
// State for the detail view: the selected player's cards plus the
// reconciler that owns all membership mutations. The view only ever reads
// the in-flight set (to disable a card's toggle); single-writer discipline.

use crate::api::types::PlayerDetail;
use crate::api::ApiError;
use crate::club::{DetailState, Reconciler, ToggleRejected, ToggleTxn};

#[derive(Debug)]
pub struct DetailController {
    pub slug: String,
    pub state: Option<DetailState>,
    pub loading: bool,
    pub not_found: bool,
    /// Non-404 fetch failure, surfaced as a blocking message with a way back.
    pub error: Option<String>,
    reconciler: Reconciler,
}

impl DetailController {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            state: None,
            loading: true,
            not_found: false,
            error: None,
            reconciler: Reconciler::new(),
        }
    }

    pub fn apply_detail(&mut self, result: Result<PlayerDetail, ApiError>) {
        self.loading = false;
        match result {
            Ok(detail) => {
                self.state = Some(DetailState::from_remote(detail));
            }
            Err(e) if e.is_not_found() => {
                self.not_found = true;
            }
            Err(e) => {
                loge!("Detail: fetch failed for '{}': {}", self.slug, e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Optimistically flip a card. The caller pushes the returned transaction
    /// to the remote service and settles it with `settle_toggle`.
    pub fn begin_toggle(&mut self, card_slug: &str) -> Result<ToggleTxn, ToggleRejected> {
        let state = self.state.as_mut().ok_or(ToggleRejected::UnknownCard)?;
        self.reconciler.begin(state, card_slug)
    }

    /// Commit on success, roll back (exact pre-toggle state) on failure.
    pub fn settle_toggle(&mut self, txn: &ToggleTxn, result: &Result<(), ApiError>) {
        match result {
            Ok(()) => self.reconciler.commit(txn),
            Err(_) => {
                if let Some(state) = self.state.as_mut() {
                    self.reconciler.rollback(state, txn);
                }
            }
        }
    }

    pub fn card_busy(&self, card_slug: &str) -> bool {
        self.reconciler.in_flight(card_slug)
    }
}
