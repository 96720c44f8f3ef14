// src/gui/components/player_table.rs
//
// The player list. Purely a view; row clicks become navigation intents
// applied after the table borrow ends.

use eframe::egui::{self, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.list.players.is_empty() {
        if !app.list.loading {
            ui.add_space(12.0);
            ui.label("No players found");
        }
        return;
    }

    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .column(Column::initial(220.0).at_least(120.0).clip(true)) // Name
        .column(Column::initial(60.0)) // Rating
        .column(Column::initial(90.0)) // Cards
        .column(Column::remainder()) // In club
        .header(24.0, |mut header| {
            for title in ["Name", "Rating", "Cards", "In club"] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.list.players.len(), |mut row| {
                let ix = row.index();
                let Some(player) = app.list.players.get(ix) else {
                    return;
                };

                row.col(|ui| {
                    ui.label(&player.display_name);
                });
                row.col(|ui| {
                    let rating = player
                        .base_card_rating
                        .map_or_else(|| s!("—"), |r| r.to_string());
                    ui.label(rating);
                });
                row.col(|ui| {
                    ui.label(format!("{}/{}", player.in_club_count, player.total_cards));
                });
                row.col(|ui| {
                    if player.any_in_club {
                        ui.label("✔");
                    }
                });

                if row.response().clicked() {
                    clicked = Some(player.slug.clone());
                }
            });
        });

    if let Some(slug) = clicked {
        app.open_detail(slug);
    }
}
