use album_assemble::MoveDirection;
use eframe::egui;

use super::state::AlbumState;

pub fn show(ui: &mut egui::Ui, state: &mut AlbumState) {
    ui.label(format!("Slides ({})", state.deck.len()));

    if state.deck.is_empty() {
        ui.label("No images added yet");
        return;
    }

    let mut to_move = None;
    let mut to_remove = None;
    let last = state.deck.len() - 1;

    for (idx, slide) in state.deck.slides().iter().enumerate() {
        ui.horizontal(|ui| {
            if let Some(texture) = state.previews.get(&slide.id) {
                ui.add(egui::Image::new(texture).max_size(egui::vec2(28.0, 28.0)));
            }

            // Reorder buttons
            if idx > 0 && ui.small_button("▲").clicked() {
                to_move = Some((idx, MoveDirection::Up));
            }
            if idx < last && ui.small_button("▼").clicked() {
                to_move = Some((idx, MoveDirection::Down));
            }

            ui.label(format!("{}. {}", idx + 1, slide.name))
                .on_hover_text(slide.kind.name());

            if ui.small_button("✖").clicked() {
                to_remove = Some(slide.id);
            }
        });
    }

    // Apply changes after the borrow of the slide list ends
    if let Some((idx, direction)) = to_move {
        state.deck.move_adjacent(idx, direction);
    }
    if let Some(id) = to_remove {
        if let Some(removed) = state.deck.remove(id) {
            state.release_preview(removed.id);
            log::info!("Removed {}", removed.name);
        }
    }

    ui.add_space(5.0);

    if ui.button("🗑 Clear All").clicked() {
        for removed in state.deck.clear() {
            state.release_preview(removed.id);
        }
        log::info!("Cleared slide list");
    }
}
