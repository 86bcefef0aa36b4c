/// Millimetres per pixel at the 96 dpi reference density.
///
/// Image density metadata is deliberately not read; every input is treated
/// as 96 dpi. Downstream consumers depend on this exact value, so changing
/// it changes every auto-matched page size.
pub const PX_TO_MM: f32 = 25.4 / 96.0;

/// Standard page size (ISO A4) used for the forced orientations, in
/// portrait: width < height.
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Natural resolution of a decoded image, read once per export pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelDimensions {
    pub width_px: u32,
    pub height_px: u32,
}

impl PixelDimensions {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Physical size in millimetres at the fixed reference density.
    pub fn physical_mm(self) -> (f32, f32) {
        (
            self.width_px as f32 * PX_TO_MM,
            self.height_px as f32 * PX_TO_MM,
        )
    }
}

/// Width, height and orientation of one output page.
///
/// Every page is computed independently; nothing requires two pages of the
/// same document to share a size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub orientation: Orientation,
}

impl PageGeometry {
    /// The standard page size with the given orientation applied.
    pub fn standard(orientation: Orientation) -> Self {
        let (width_mm, height_mm) = match orientation {
            Orientation::Portrait => (A4_WIDTH_MM, A4_HEIGHT_MM),
            Orientation::Landscape => (A4_HEIGHT_MM, A4_WIDTH_MM),
        };
        Self {
            width_mm,
            height_mm,
            orientation,
        }
    }

    /// A custom page sized to exactly the given physical dimensions,
    /// orientation derived from the aspect ratio.
    pub fn matching(width_mm: f32, height_mm: f32) -> Self {
        let orientation = if width_mm > height_mm {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        Self {
            width_mm,
            height_mm,
            orientation,
        }
    }
}

/// A rectangular area on a page, in millimetres from the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementRect {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PlacementRect {
    pub fn new(x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) -> Self {
        Self {
            x_mm,
            y_mm,
            width_mm,
            height_mm,
        }
    }

    /// Right edge x coordinate
    pub fn right_mm(&self) -> f32 {
        self.x_mm + self.width_mm
    }

    /// Top edge y coordinate
    pub fn top_mm(&self) -> f32 {
        self.y_mm + self.height_mm
    }
}

/// Raster formats accepted at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageKind {
    /// Encoding tag handed to the document encoder: photographic sources
    /// stay on the lossy path, everything else on the lossless one.
    pub fn format_tag(self) -> ImageFormatTag {
        match self {
            ImageKind::Jpeg => ImageFormatTag::Photographic,
            ImageKind::Png | ImageKind::Gif | ImageKind::Bmp | ImageKind::Tiff => {
                ImageFormatTag::Lossless
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageKind::Png => "PNG",
            ImageKind::Jpeg => "JPEG",
            ImageKind::Gif => "GIF",
            ImageKind::Bmp => "BMP",
            ImageKind::Tiff => "TIFF",
        }
    }
}

/// How the encoder should treat an image's pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormatTag {
    /// Indexed-colour or lossless sources (PNG, GIF, BMP, TIFF)
    Lossless,
    /// Photographic, lossy-compressed sources (JPEG)
    Photographic,
}
