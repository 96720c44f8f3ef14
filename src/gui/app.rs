// src/gui/app.rs
use std::error::Error;
use std::sync::{mpsc, Arc};

use eframe::egui;

use crate::{
    api::{Gateway, HttpGateway},
    config::state::{GuiState, View},
    controller::{detail::DetailController, list::ListController},
    monitor::{PollEvent, PollHandle},
};

use super::{
    views,
    worker::{self, Msg},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "PastPresent Collection",
        options,
        Box::new(|cc| {
            let gateway: Arc<dyn Gateway> = Arc::new(HttpGateway::from_env());
            Ok(Box::new(App::new(cc.egui_ctx.clone(), gateway)))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub gateway: Arc<dyn Gateway>,
    pub gui: GuiState,

    // view controllers (UI thread only)
    pub list: ListController,
    pub detail: Option<DetailController>,

    // status line + scrape progress
    pub status: String,
    pub scraping: bool,
    poll: Option<PollHandle>,

    // workers report back here; drained every frame
    tx: mpsc::Sender<Msg>,
    rx: mpsc::Receiver<Msg>,
    ctx: egui::Context,
}

impl App {
    pub fn new(ctx: egui::Context, gateway: Arc<dyn Gateway>) -> Self {
        let (tx, rx) = mpsc::channel();

        let mut app = Self {
            gateway,
            gui: GuiState::default(),
            list: ListController::new(),
            detail: None,
            status: s!("Loading…"),
            scraping: false,
            poll: None,
            tx,
            rx,
            ctx,
        };

        logf!("Init: fetching player list");
        app.refresh_list();
        app
    }

    /* ---------- intents ---------- */

    /// Re-issue the list query (and counts) for the current criteria.
    pub fn refresh_list(&mut self) {
        let ticket = self.list.begin_query();
        worker::fetch_players(
            Arc::clone(&self.gateway),
            self.list.criteria.clone(),
            ticket,
            self.tx.clone(),
            self.ctx.clone(),
        );
        worker::fetch_counts(Arc::clone(&self.gateway), self.tx.clone(), self.ctx.clone());
    }

    pub fn open_detail(&mut self, slug: String) {
        logd!("Nav: detail '{}'", slug);
        self.gui.view = View::Detail { slug: slug.clone() };
        self.detail = Some(DetailController::new(slug.clone()));
        worker::fetch_detail(
            Arc::clone(&self.gateway),
            slug,
            self.tx.clone(),
            self.ctx.clone(),
        );
    }

    /// Back to the list; criteria survive the round trip. The list is
    /// re-fetched so aggregates reflect any toggles made on the detail page.
    pub fn back_to_list(&mut self) {
        self.gui.view = View::List;
        self.detail = None;
        self.refresh_list();
    }

    pub fn start_scrape(&mut self) {
        if self.scraping {
            return;
        }
        self.scraping = true;
        self.status = s!("Starting scrape…");

        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.poll = Some(PollHandle::spawn(
            Arc::clone(&self.gateway),
            move |event| {
                let _ = tx.send(Msg::Scrape(event));
                ctx.request_repaint();
            },
        ));
    }

    pub fn toggle_card(&mut self, card_slug: &str) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        match detail.begin_toggle(card_slug) {
            Ok(txn) => {
                logd!("Club: toggle '{}' → {}", txn.card_slug, txn.next);
                worker::push_membership(
                    Arc::clone(&self.gateway),
                    txn,
                    self.tx.clone(),
                    self.ctx.clone(),
                );
            }
            Err(rejected) => {
                // InFlight is normal with fast clicks; the control is
                // disabled, but a click can land the same frame it settles.
                logd!("Club: toggle '{}' rejected: {:?}", card_slug, rejected);
            }
        }
    }

    /* ---------- worker results ---------- */

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                Msg::Players { ticket, result } => {
                    if self.list.apply_players(ticket, result) {
                        self.status = if self.list.players.is_empty() {
                            s!("No players found")
                        } else {
                            format!("{} players", self.list.players.len())
                        };
                    }
                }
                Msg::Counts(result) => self.list.apply_counts(result),
                Msg::Detail { slug, result } => {
                    // A stale fetch for a player we already navigated away
                    // from must not populate the current controller.
                    if let Some(detail) = self.detail.as_mut() {
                        if detail.slug == slug {
                            detail.apply_detail(result);
                        }
                    }
                }
                Msg::ToggleSettled { txn, result } => {
                    if let Some(detail) = self.detail.as_mut() {
                        detail.settle_toggle(&txn, &result);
                    }
                    if let Err(e) = result {
                        self.gui.alert =
                            Some(format!("Could not update '{}': {}", txn.card_slug, e));
                    }
                }
                Msg::Scrape(event) => self.on_scrape_event(event),
            }
        }
    }

    fn on_scrape_event(&mut self, event: PollEvent) {
        match event {
            PollEvent::Started => {
                self.status = s!("Scrape running…");
            }
            PollEvent::Completed => {
                self.scraping = false;
                self.poll = None;
                self.status = s!("Scrape complete");
                // Dependent refresh: list + counts, once per completion
                self.refresh_list();
            }
            PollEvent::Errored(e) => {
                self.scraping = false;
                self.poll = None;
                self.status = format!("Scrape failed: {e}");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_messages();

        let view = self.gui.view.clone();
        egui::CentralPanel::default().show(ctx, |ui| match view {
            View::List => views::list::draw(ui, self),
            View::Detail { .. } => views::detail::draw(ui, self),
        });

        // Blocking alert for failed card updates
        if let Some(msg) = self.gui.alert.clone() {
            egui::Window::new("Update failed")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&msg);
                    if ui.button("OK").clicked() {
                        self.gui.alert = None;
                    }
                });
        }
    }
}
