// src/gui/views/list.rs
use eframe::egui;

use crate::gui::app::App;
use crate::gui::components;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    components::toolbar::draw(ui, app);

    ui.separator();

    components::player_table::draw(ui, app);
}
