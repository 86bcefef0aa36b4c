use std::path::PathBuf;

use album_assemble::{AssembleOptions, PrintPdfEncoder, SlideItem, assemble_document};
use album_async_runtime::AlbumUpdate;
use tokio::sync::mpsc;

pub async fn handle_assemble(
    slides: Vec<SlideItem>,
    options: AssembleOptions,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let page_count = slides.len();
    let progress_tx = update_tx.clone();

    // The whole assemble pass runs on one blocking thread; slides are
    // decoded and handed to the encoder strictly in list order.
    let result = tokio::task::spawn_blocking(move || {
        let encoder = PrintPdfEncoder::new(&options.output_file_name());
        assemble_document(&slides, &options, encoder, |current, total| {
            let _ = progress_tx.send(AlbumUpdate::Progress {
                operation: "Assembling album".to_string(),
                current,
                total,
            });
        })
    })
    .await;

    let bytes = match result {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            log::error!("Export aborted: {e}");
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Export aborted: {e}"),
            });
            return;
        }
        Err(e) => {
            log::error!("Export task failed: {e}");
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Export task failed: {e}"),
            });
            return;
        }
    };

    match tokio::fs::write(&output_path, bytes).await {
        Ok(()) => {
            log::info!("Saved album to {}", output_path.display());
            let _ = update_tx.send(AlbumUpdate::AssembleComplete {
                path: output_path,
                page_count,
            });
        }
        Err(e) => {
            log::error!("Failed to save album: {e}");
            let _ = update_tx.send(AlbumUpdate::Error {
                message: format!("Failed to save album: {e}"),
            });
        }
    }
}
