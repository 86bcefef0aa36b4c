use album_assemble::{MAX_PADDING_MM, OrientationMode, PADDING_STEP_MM};
use eframe::egui;

use super::state::AlbumState;
use crate::ui_components::{SliderBuilder, button_group};

pub fn show(ui: &mut egui::Ui, state: &mut AlbumState) {
    ui.label("Page orientation:");
    let mut mode = state.options.orientation_mode;
    if button_group(
        ui,
        &mut mode,
        &[
            (OrientationMode::ForcePortrait, "Portrait"),
            (OrientationMode::ForceLandscape, "Landscape"),
            (OrientationMode::AutoMatch, "Match image"),
        ],
    ) {
        state.options.set_orientation_mode(mode);
    }

    ui.add_space(5.0);

    let mut padding = state.options.padding_mm;
    if SliderBuilder::new(&mut padding, 0.0..=MAX_PADDING_MM)
        .step(PADDING_STEP_MM as f64)
        .text("Padding")
        .suffix(" mm")
        .show(ui)
    {
        if let Err(e) = state.options.set_padding_mm(padding) {
            log::warn!("Rejected padding value: {e}");
        }
    }

    ui.add_space(5.0);

    ui.horizontal(|ui| {
        ui.label("File name:");
        let mut name = state.options.output_name.clone();
        if ui.text_edit_singleline(&mut name).changed() {
            state.options.set_output_name(name);
        }
    });
    ui.label(
        egui::RichText::new(format!("Will save as {}", state.options.output_file_name())).weak(),
    );
}
