//! The assembly driver: iterates the slides in deck order, runs the layout
//! engine per image and feeds the resulting instructions to the document
//! encoder, strictly sequentially.

use std::path::Path;

use image::GenericImageView;

use crate::encoder::DocumentEncoder;
use crate::layout::plan_page;
use crate::pdf::PrintPdfEncoder;
use crate::types::PixelDimensions;
use crate::{AssembleError, AssembleOptions, Result, SlideItem};

/// Export lifecycle. `Idle` is both the initial and the terminal state;
/// success and failure both return to it, there is no persisted "done" or
/// "failed" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportPhase {
    #[default]
    Idle,
    Generating,
}

/// Assemble the slides into one document and return the serialized bytes.
///
/// Slides are processed strictly in order: the first slide's geometry
/// seeds document construction, every later slide opens its own page. Any
/// decode or encode failure aborts the remaining slides and propagates —
/// partial documents are never produced. `on_page(current, total)` fires
/// after each completed slide.
pub fn assemble_document<E>(
    slides: &[SlideItem],
    options: &AssembleOptions,
    mut encoder: E,
    mut on_page: impl FnMut(usize, usize),
) -> Result<Vec<u8>>
where
    E: DocumentEncoder,
{
    options.validate()?;
    if slides.is_empty() {
        return Err(AssembleError::EmptyDeck);
    }

    let total = slides.len();
    for (index, slide) in slides.iter().enumerate() {
        let dims = measure(slide)?;
        let plan = plan_page(dims, options);

        if index == 0 {
            encoder.construct_document(&plan.geometry)?;
        } else {
            encoder.add_page(&plan.geometry)?;
        }
        encoder.place_image(&slide.bytes, slide.kind.format_tag(), &plan.placement)?;

        on_page(index + 1, total);
    }

    encoder.finish()
}

/// Decode a slide far enough to read its natural resolution.
fn measure(slide: &SlideItem) -> Result<PixelDimensions> {
    let decoded = image::load_from_memory(&slide.bytes).map_err(|source| AssembleError::Decode {
        name: slide.name.clone(),
        source,
    })?;
    let (width_px, height_px) = decoded.dimensions();
    Ok(PixelDimensions::new(width_px, height_px))
}

/// Assemble on a blocking thread and write the finished document to
/// `output_path`. Returns the page count.
pub async fn assemble_to_file(
    slides: Vec<SlideItem>,
    options: AssembleOptions,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let output_path = output_path.as_ref().to_owned();
    let page_count = slides.len();

    let bytes = tokio::task::spawn_blocking(move || {
        let encoder = PrintPdfEncoder::new(&options.output_file_name());
        assemble_document(&slides, &options, encoder, |_, _| {})
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(page_count)
}
