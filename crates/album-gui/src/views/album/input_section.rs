use album_async_runtime::AlbumCommand;
use eframe::egui;
use tokio::sync::mpsc;

pub fn show(ui: &mut egui::Ui, command_tx: &mpsc::UnboundedSender<AlbumCommand>) {
    ui.label("Drop images anywhere in the window, or:");

    if ui.button("🖼 Add Images…").clicked() {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff"])
            .pick_files()
        {
            let _ = command_tx.send(AlbumCommand::IntakeFiles { paths });
        }
    }
}
