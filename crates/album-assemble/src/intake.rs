//! Input validation: filter candidate files down to supported raster
//! images and turn them into slides.

use std::path::{Path, PathBuf};

use crate::{ImageKind, SlideItem};

/// Map a declared media type string to a supported raster kind.
///
/// Vector types (SVG) and anything unrecognized return `None` and are
/// skipped at intake rather than treated as an error.
pub fn kind_for_media_type(media_type: &str) -> Option<ImageKind> {
    match media_type {
        "image/png" => Some(ImageKind::Png),
        "image/jpeg" => Some(ImageKind::Jpeg),
        "image/gif" => Some(ImageKind::Gif),
        "image/bmp" => Some(ImageKind::Bmp),
        "image/tiff" => Some(ImageKind::Tiff),
        _ => None,
    }
}

/// Map a file's extension to a supported raster kind.
pub fn media_kind_for(path: &Path) -> Option<ImageKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some(ImageKind::Png),
        "jpg" | "jpeg" => Some(ImageKind::Jpeg),
        "gif" => Some(ImageKind::Gif),
        "bmp" => Some(ImageKind::Bmp),
        "tif" | "tiff" => Some(ImageKind::Tiff),
        _ => None,
    }
}

/// Read the candidate files and build slides for the supported ones.
///
/// Returns the accepted slides in input order plus the number of skipped
/// candidates. Non-image inputs and unreadable files are skipped silently;
/// the count is for a status line, not an error.
pub async fn accept_files(paths: Vec<PathBuf>) -> (Vec<SlideItem>, usize) {
    let mut accepted = Vec::new();
    let mut skipped = 0;

    for path in paths {
        let Some(kind) = media_kind_for(&path) else {
            skipped += 1;
            continue;
        };
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                accepted.push(SlideItem::new(name, kind, bytes));
            }
            Err(_) => skipped += 1,
        }
    }

    (accepted, skipped)
}
