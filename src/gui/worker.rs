// src/gui/worker.rs
//
// Background requests. Every remote call runs on its own worker thread and
// reports back over the app channel; the UI thread drains the channel each
// frame. Workers never touch view state directly.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use eframe::egui;

use crate::api::types::{PlayerCounts, PlayerDetail, PlayerSummary};
use crate::api::{ApiError, Gateway};
use crate::club::ToggleTxn;
use crate::config::options::Criteria;
use crate::controller::list::QueryTicket;
use crate::monitor::PollEvent;

pub enum Msg {
    Players {
        ticket: QueryTicket,
        result: Result<Vec<PlayerSummary>, ApiError>,
    },
    Counts(Result<PlayerCounts, ApiError>),
    Detail {
        slug: String,
        result: Result<PlayerDetail, ApiError>,
    },
    ToggleSettled {
        txn: ToggleTxn,
        result: Result<(), ApiError>,
    },
    Scrape(PollEvent),
}

pub fn fetch_players(
    gw: Arc<dyn Gateway>,
    criteria: Criteria,
    ticket: QueryTicket,
    tx: Sender<Msg>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        let result = gw.list_players(&criteria);
        let _ = tx.send(Msg::Players { ticket, result });
        ctx.request_repaint();
    });
}

pub fn fetch_counts(gw: Arc<dyn Gateway>, tx: Sender<Msg>, ctx: egui::Context) {
    thread::spawn(move || {
        let result = gw.player_counts();
        let _ = tx.send(Msg::Counts(result));
        ctx.request_repaint();
    });
}

pub fn fetch_detail(gw: Arc<dyn Gateway>, slug: String, tx: Sender<Msg>, ctx: egui::Context) {
    thread::spawn(move || {
        let result = gw.get_player(&slug);
        let _ = tx.send(Msg::Detail { slug, result });
        ctx.request_repaint();
    });
}

/// Push one optimistic toggle to the service. The transaction travels with
/// the result so the UI thread can commit or roll back the right card.
pub fn push_membership(gw: Arc<dyn Gateway>, txn: ToggleTxn, tx: Sender<Msg>, ctx: egui::Context) {
    thread::spawn(move || {
        let result = gw.set_card_membership(&txn.card_slug, txn.next);
        let _ = tx.send(Msg::ToggleSettled { txn, result });
        ctx.request_repaint();
    });
}
