// src/gui/views/detail.rs
//
// Detail view: one player's cards in a grid, each with a club toggle.
// The checkbox binds to a throwaway copy; the real flag only moves through
// the reconciler so rollback stays exact. A card with a write in flight has
// its toggle disabled.

use eframe::egui::{self, widgets::Spinner, RichText};

use crate::gui::app::App;

const GRID_COLS: usize = 4;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut go_back = false;
    let mut toggle: Option<String> = None;

    ui.horizontal(|ui| {
        if ui.button("← Players").clicked() {
            go_back = true;
        }
    });
    ui.separator();

    if let Some(detail) = app.detail.as_ref() {
        if detail.loading {
            ui.horizontal(|ui| {
                ui.add(Spinner::new().size(16.0));
                ui.label("Loading…");
            });
        } else if detail.not_found {
            ui.heading("Player not found");
            ui.label(format!("No player with slug '{}'.", detail.slug));
        } else if let Some(err) = &detail.error {
            ui.heading("Could not load player");
            ui.label(err);
        } else if let Some(state) = &detail.state {
            ui.heading(&state.display_name);
            ui.label(format!(
                "{} of {} cards in club",
                state.in_club_count, state.total_cards
            ));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("cards")
                    .num_columns(GRID_COLS)
                    .spacing([24.0, 16.0])
                    .show(ui, |ui| {
                        for (i, card) in state.cards.iter().enumerate() {
                            let busy = detail.card_busy(&card.card_slug);
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&card.name).strong());
                                ui.label(format!("{} · {}", card.version, card.rating));
                                ui.hyperlink_to("card page", &card.card_url);

                                let mut flag = card.in_club;
                                let resp = ui.add_enabled(
                                    !busy,
                                    egui::Checkbox::new(&mut flag, "In club"),
                                );
                                if resp.changed() {
                                    toggle = Some(card.card_slug.clone());
                                }
                            });
                            if (i + 1) % GRID_COLS == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });
        }
    }

    if let Some(card_slug) = toggle {
        app.toggle_card(&card_slug);
    }
    if go_back {
        app.back_to_list();
    }
}
