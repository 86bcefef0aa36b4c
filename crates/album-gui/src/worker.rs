use album_async_runtime::{AlbumCommand, AlbumUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes album commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<AlbumCommand>,
    update_tx: mpsc::UnboundedSender<AlbumUpdate>,
) {
    // The PDF encoder is linked in-process; readiness is signalled once
    // the worker is running so the export action stays disabled until the
    // channel is actually being serviced.
    let _ = update_tx.send(AlbumUpdate::EncoderReady);

    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            AlbumCommand::IntakeFiles { paths } => {
                handlers::intake::handle_intake(paths, &update_tx).await;
            }
            AlbumCommand::AssembleAlbum {
                slides,
                options,
                output_path,
            } => {
                handlers::assemble::handle_assemble(slides, options, output_path, &update_tx)
                    .await;
            }
        }
    }
}
