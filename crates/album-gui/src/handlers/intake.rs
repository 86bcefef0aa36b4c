use std::path::PathBuf;

use album_assemble::SlideItem;
use album_async_runtime::AlbumUpdate;
use anyhow::Context;
use tokio::sync::mpsc;

/// Longest side of a slide thumbnail, in pixels.
const THUMBNAIL_MAX_PX: u32 = 256;

pub async fn handle_intake(paths: Vec<PathBuf>, update_tx: &mpsc::UnboundedSender<AlbumUpdate>) {
    let (slides, skipped) = album_assemble::accept_files(paths).await;
    if slides.is_empty() && skipped == 0 {
        return;
    }
    if skipped > 0 {
        log::info!("Skipped {skipped} non-image file(s) at intake");
    }

    let _ = update_tx.send(AlbumUpdate::SlidesAccepted {
        slides: slides.clone(),
        skipped,
    });

    // Thumbnails are decoded one at a time after the slides are already
    // in the list, so a slow decode never blocks intake.
    for slide in slides {
        match build_preview(&slide).await {
            Ok((width, height, rgba_data)) => {
                let _ = update_tx.send(AlbumUpdate::PreviewReady {
                    id: slide.id,
                    width,
                    height,
                    rgba_data,
                });
            }
            Err(e) => {
                log::warn!("No preview for {}: {e:#}", slide.name);
            }
        }
    }
}

async fn build_preview(slide: &SlideItem) -> anyhow::Result<(usize, usize, Vec<u8>)> {
    let bytes = slide.bytes.clone();
    let name = slide.name.clone();

    tokio::task::spawn_blocking(move || -> anyhow::Result<(usize, usize, Vec<u8>)> {
        let decoded = image::load_from_memory(&bytes)
            .with_context(|| format!("decode {name}"))?;
        let thumb = decoded
            .thumbnail(THUMBNAIL_MAX_PX, THUMBNAIL_MAX_PX)
            .to_rgba8();
        let (width, height) = (thumb.width() as usize, thumb.height() as usize);
        Ok((width, height, thumb.into_raw()))
    })
    .await
    .context("preview task failed")?
}
