mod actions_section;
mod input_section;
mod log_section;
mod settings_section;
mod slides_section;
mod state;

pub use state::AlbumState;

use album_async_runtime::AlbumCommand;
use eframe::egui;
use tokio::sync::mpsc;

pub fn show_album(
    ui: &mut egui::Ui,
    state: &mut AlbumState,
    command_tx: &mpsc::UnboundedSender<AlbumCommand>,
) {
    egui::SidePanel::left("album_controls")
        .min_width(300.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Album to PDF");
                ui.separator();

                input_section::show(ui, command_tx);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                slides_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                settings_section::show(ui, state);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                actions_section::show(ui, state, command_tx);
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(10.0);

                log_section::show(ui, state);
            });
        });

    show_preview_area(ui, state);
}

fn show_preview_area(ui: &mut egui::Ui, state: &AlbumState) {
    egui::CentralPanel::default().show_inside(ui, |ui| {
        if state.deck.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("No Images");
                    ui.label("Drop image files anywhere in the window, or use Add Images…");
                });
            });
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for slide in state.deck.slides() {
                    match state.previews.get(&slide.id) {
                        Some(texture) => {
                            ui.add(
                                egui::Image::new(texture).max_size(egui::vec2(160.0, 160.0)),
                            )
                            .on_hover_text(&slide.name);
                        }
                        None => {
                            ui.spinner();
                        }
                    }
                }
            });
        });
    });
}
