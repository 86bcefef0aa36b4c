use eframe::egui;

use super::state::AlbumState;

pub fn show(ui: &mut egui::Ui, state: &AlbumState) {
    egui::CollapsingHeader::new("📋 Log")
        .default_open(false)
        .show(ui, |ui| {
            let entries = state.logger.entries();
            if entries.is_empty() {
                ui.label("Nothing logged yet");
                return;
            }

            for entry in entries.iter().rev().take(20) {
                ui.label(format!(
                    "{} [{}] {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.level,
                    entry.message
                ));
            }

            if ui.small_button("Clear").clicked() {
                state.logger.clear();
            }
        });
}
