// src/club.rs
//
// Optimistic membership updates for the detail view.
//
// - DetailState: the locally displayed cards + counters for one player.
//   Read-only everywhere except through the reconciler, which is the single
//   writer for membership flags and the in_club counter.
// - Reconciler: snapshot, apply, commit-or-revert. One outstanding write per
//   card slug; a second toggle on the same card is rejected until the first
//   settles, so concurrent toggles can never race the counter.

use std::collections::HashSet;

use crate::api::types::{Card, PlayerDetail};

/// Local copy of one player's detail data.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailState {
    pub display_name: String,
    pub in_club_count: u32,
    pub total_cards: u32,
    pub cards: Vec<Card>,
}

impl DetailState {
    pub fn from_remote(detail: PlayerDetail) -> Self {
        Self {
            display_name: detail.display_name,
            in_club_count: detail.in_club_count,
            total_cards: detail.total_cards,
            cards: detail.cards,
        }
    }

    pub fn card(&self, card_slug: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.card_slug == card_slug)
    }

    fn card_mut(&mut self, card_slug: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.card_slug == card_slug)
    }

    pub fn any_in_club(&self) -> bool {
        self.in_club_count > 0
    }
}

/// One in-flight toggle. Returned by `begin`, handed back to `commit` or
/// `rollback` once the remote write settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleTxn {
    pub card_slug: String,
    pub prev: bool,
    pub next: bool,
    /// Counter snapshot from before the optimistic adjustment; rollback
    /// restores it verbatim rather than reversing arithmetic.
    pub prev_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleRejected {
    /// A write for this card is still outstanding.
    InFlight,
    /// No card with that slug in the local state.
    UnknownCard,
}

#[derive(Debug, Default)]
pub struct Reconciler {
    in_flight: HashSet<String>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self, card_slug: &str) -> bool {
        self.in_flight.contains(card_slug)
    }

    pub fn any_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Snapshot `prev`, apply `next = !prev` locally, adjust the counter,
    /// and lock the slug. The remote write happens elsewhere; the caller
    /// settles the returned transaction with `commit` or `rollback`.
    pub fn begin(
        &mut self,
        state: &mut DetailState,
        card_slug: &str,
    ) -> Result<ToggleTxn, ToggleRejected> {
        if self.in_flight.contains(card_slug) {
            return Err(ToggleRejected::InFlight);
        }
        let prev_count = state.in_club_count;
        let card = state.card_mut(card_slug).ok_or(ToggleRejected::UnknownCard)?;
        let prev = card.in_club;
        let next = !prev;
        card.in_club = next;
        if next {
            state.in_club_count += 1;
        } else {
            // Saturate: a counter the service sent out of step with the card
            // flags must not panic a display layer
            state.in_club_count = state.in_club_count.saturating_sub(1);
        }
        self.in_flight.insert(s!(card_slug));
        Ok(ToggleTxn {
            card_slug: s!(card_slug),
            prev,
            next,
            prev_count,
        })
    }

    /// Remote write succeeded; local state already shows `next`.
    pub fn commit(&mut self, txn: &ToggleTxn) {
        self.in_flight.remove(&txn.card_slug);
    }

    /// Remote write failed; restore the flag and the counter snapshot.
    /// State ends exactly as it was before `begin`.
    pub fn rollback(&mut self, state: &mut DetailState, txn: &ToggleTxn) {
        if let Some(card) = state.card_mut(&txn.card_slug) {
            card.in_club = txn.prev;
        }
        state.in_club_count = txn.prev_count;
        self.in_flight.remove(&txn.card_slug);
    }
}
