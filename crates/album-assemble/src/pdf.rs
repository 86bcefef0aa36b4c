//! printpdf-backed implementation of the encoder contract.

use printpdf::*;

use crate::encoder::DocumentEncoder;
use crate::types::{ImageFormatTag, PageGeometry, PlacementRect};
use crate::{AssembleError, Result};

/// Render images at the same 96 dpi reference density the layout engine
/// uses for its pixel→millimetre conversion, so a scale factor of 1.0
/// reproduces an image's physical size exactly.
const RENDER_DPI: f32 = 96.0;

/// Builds a PDF by accumulating drawing ops per page and flushing each
/// page when the next one opens.
pub struct PrintPdfEncoder {
    doc: PdfDocument,
    current_page: Option<(PageGeometry, Vec<Op>)>,
}

impl PrintPdfEncoder {
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::new(title),
            current_page: None,
        }
    }

    fn flush_page(&mut self) {
        if let Some((geometry, ops)) = self.current_page.take() {
            let width_pt = Mm(geometry.width_mm).into_pt();
            let height_pt = Mm(geometry.height_mm).into_pt();
            let page_box = Rect {
                x: Pt(0.0),
                y: Pt(0.0),
                width: width_pt,
                height: height_pt,
            };
            self.doc.pages.push(PdfPage {
                media_box: page_box.clone(),
                trim_box: page_box.clone(),
                crop_box: page_box,
                ops,
            });
        }
    }
}

impl DocumentEncoder for PrintPdfEncoder {
    fn construct_document(&mut self, first_page: &PageGeometry) -> Result<()> {
        if self.current_page.is_some() || !self.doc.pages.is_empty() {
            return Err(AssembleError::Encode(
                "document already constructed".to_string(),
            ));
        }
        self.current_page = Some((*first_page, Vec::new()));
        Ok(())
    }

    fn add_page(&mut self, page: &PageGeometry) -> Result<()> {
        if self.current_page.is_none() {
            return Err(AssembleError::Encode(
                "add_page before construct_document".to_string(),
            ));
        }
        self.flush_page();
        self.current_page = Some((*page, Vec::new()));
        Ok(())
    }

    fn place_image(
        &mut self,
        bytes: &[u8],
        _format: ImageFormatTag,
        placement: &PlacementRect,
    ) -> Result<()> {
        let Some((_, ops)) = self.current_page.as_mut() else {
            return Err(AssembleError::Encode(
                "place_image with no open page".to_string(),
            ));
        };

        let mut warnings = Vec::new();
        let image = RawImage::decode_from_bytes(bytes, &mut warnings)
            .map_err(AssembleError::Encode)?;

        // Natural render size at RENDER_DPI, in points.
        let natural_w_pt = image.width as f32 * 72.0 / RENDER_DPI;
        let natural_h_pt = image.height as f32 * 72.0 / RENDER_DPI;

        let image_id = self.doc.add_image(&image);
        ops.push(Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Mm(placement.x_mm).into_pt()),
                translate_y: Some(Mm(placement.y_mm).into_pt()),
                scale_x: Some(Mm(placement.width_mm).into_pt().0 / natural_w_pt),
                scale_y: Some(Mm(placement.height_mm).into_pt().0 / natural_h_pt),
                dpi: Some(RENDER_DPI),
                ..Default::default()
            },
        });

        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.flush_page();
        let mut warnings = Vec::new();
        Ok(self.doc.save(&PdfSaveOptions::default(), &mut warnings))
    }
}
