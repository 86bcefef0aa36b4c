//! The contract this crate requires from the document-encoding
//! collaborator. How the collaborator serializes bytes is entirely its own
//! concern; the core only dictates geometry and sequencing.

use crate::types::{ImageFormatTag, PageGeometry, PlacementRect};
use crate::Result;

/// A document encoder receives exactly this call sequence from the
/// assembly driver:
///
/// 1. `construct_document` once, with the first page's geometry;
/// 2. `add_page` for every subsequent page, in page order;
/// 3. `place_image` once after each of the above, targeting the page most
///    recently opened;
/// 4. `finish` once, yielding the serialized document.
///
/// Implementations may assume the sequence but should fail cleanly (not
/// panic) when it is violated.
pub trait DocumentEncoder {
    /// Initialize the document with its first page.
    fn construct_document(&mut self, first_page: &PageGeometry) -> Result<()>;

    /// Open a new page with its own independent geometry.
    fn add_page(&mut self, page: &PageGeometry) -> Result<()>;

    /// Draw an image into the given rectangle of the current page.
    ///
    /// `bytes` are the original encoded image bytes; `format` tells the
    /// encoder which compression path the source came from.
    fn place_image(
        &mut self,
        bytes: &[u8],
        format: ImageFormatTag,
        placement: &PlacementRect,
    ) -> Result<()>;

    /// Serialize the finished document.
    fn finish(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}
