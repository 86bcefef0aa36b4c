use album_assemble::ExportPhase;
use album_async_runtime::AlbumCommand;
use eframe::egui;
use tokio::sync::mpsc;

use super::state::AlbumState;

pub fn show(
    ui: &mut egui::Ui,
    state: &mut AlbumState,
    command_tx: &mpsc::UnboundedSender<AlbumCommand>,
) {
    // Export needs slides and a ready encoder, and only one export may be
    // in flight at a time.
    let can_export =
        !state.deck.is_empty() && state.encoder_ready && state.phase == ExportPhase::Idle;

    let label = if state.encoder_ready {
        "💾 Export PDF…"
    } else {
        "⏳ Starting encoder…"
    };

    if ui
        .add_enabled(can_export, egui::Button::new(label))
        .clicked()
    {
        start_export(state, command_tx);
    }

    if state.phase == ExportPhase::Generating {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Generating…");
        });
    }
}

fn start_export(state: &mut AlbumState, command_tx: &mpsc::UnboundedSender<AlbumCommand>) {
    let Some(mut path) = rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name(state.options.output_file_name())
        .save_file()
    else {
        return;
    };

    // The dialog lets the user type any name; the suffix stays enforced.
    let has_pdf_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    if !has_pdf_ext {
        path.set_extension("pdf");
    }

    log::info!(
        "Exporting {} slide(s) to {}",
        state.deck.len(),
        path.display()
    );
    state.phase = ExportPhase::Generating;
    let _ = command_tx.send(AlbumCommand::AssembleAlbum {
        slides: state.deck.slides().to_vec(),
        options: state.options.clone(),
        output_path: path,
    });
}
