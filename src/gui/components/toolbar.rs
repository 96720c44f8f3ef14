// src/gui/components/toolbar.rs

use eframe::egui::{self, widgets::Spinner, RichText};

use crate::config::options::{ClubFilter, SortDir};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;

    // --- Search + filter + sort ---
    ui.horizontal(|ui| {
        ui.label("Search:");
        changed |= ui
            .add(
                egui::TextEdit::singleline(&mut app.list.criteria.search)
                    .desired_width(180.0)
                    .hint_text("player name"),
            )
            .changed();

        ui.separator();

        ui.label("Club:");
        for filter in [ClubFilter::All, ClubFilter::InClub, ClubFilter::NotInClub] {
            changed |= ui
                .selectable_value(&mut app.list.criteria.filter, filter, filter.label())
                .changed();
        }

        ui.separator();

        ui.label("Rating:");
        for sort in [SortDir::Desc, SortDir::Asc] {
            changed |= ui
                .selectable_value(&mut app.list.criteria.sort, sort, sort.label())
                .changed();
        }
    });

    // --- Scrape + status + counts ---
    let mut scrape_clicked = false;
    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_scrape = ui.add_enabled(
            !app.scraping,
            egui::Button::new(RichText::new("SCRAPE").color(black).strong()).fill(red),
        );
        if button_scrape.clicked() {
            scrape_clicked = true;
        }

        if app.scraping || app.list.loading {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(&app.status);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let counts = app.list.counts;
            ui.label(format!("{} in club / {} cards", counts.in_club, counts.total));
        });
    });

    if scrape_clicked {
        logf!("UI: scrape requested");
        app.start_scrape();
    }

    // Every criteria edit re-queries; the list controller's generation
    // ticket keeps rapid edits from displaying out of order.
    if changed {
        app.refresh_list();
    }
}
