use crate::{AssembleError, Result};

/// Upper bound for the uniform padding distance. Kept well below half of
/// the standard page's short side (105 mm) so the padded content box can
/// never invert on a standard page; the layout engine itself does not
/// clamp.
pub const MAX_PADDING_MM: f32 = 50.0;

/// Step for the padding control.
pub const PADDING_STEP_MM: f32 = 1.0;

/// Fallback output name used when the configured one is empty.
pub const DEFAULT_OUTPUT_NAME: &str = "album";

/// How page orientation is chosen per slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationMode {
    /// Standard page, portrait, for every slide
    ForcePortrait,
    /// Standard page, landscape, for every slide
    ForceLandscape,
    /// Each page sized and oriented to match its own image
    #[default]
    AutoMatch,
}

/// Mutable per-document configuration. Fields are independent; no
/// cross-field validation is required.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembleOptions {
    pub orientation_mode: OrientationMode,
    pub padding_mm: f32,
    pub output_name: String,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            orientation_mode: OrientationMode::default(),
            padding_mm: 0.0,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl AssembleOptions {
    pub fn set_orientation_mode(&mut self, mode: OrientationMode) {
        self.orientation_mode = mode;
    }

    /// Overwrite the padding distance. Rejects values outside
    /// `[0, MAX_PADDING_MM]` and leaves the prior value in place.
    pub fn set_padding_mm(&mut self, padding_mm: f32) -> Result<()> {
        if !padding_mm.is_finite() || !(0.0..=MAX_PADDING_MM).contains(&padding_mm) {
            return Err(AssembleError::Settings(format!(
                "padding must be between 0 and {MAX_PADDING_MM} mm, got {padding_mm}"
            )));
        }
        self.padding_mm = padding_mm;
        Ok(())
    }

    pub fn set_output_name(&mut self, name: impl Into<String>) {
        self.output_name = name.into();
    }

    /// The effective output file name: the configured name (defaulted when
    /// blank) with a `.pdf` suffix appended if not already present.
    pub fn output_file_name(&self) -> String {
        let trimmed = self.output_name.trim();
        let base = if trimmed.is_empty() {
            DEFAULT_OUTPUT_NAME
        } else {
            trimmed
        };
        if base.to_ascii_lowercase().ends_with(".pdf") {
            base.to_string()
        } else {
            format!("{base}.pdf")
        }
    }

    /// Validate the options as a whole before an export pass.
    pub fn validate(&self) -> Result<()> {
        if !self.padding_mm.is_finite() || !(0.0..=MAX_PADDING_MM).contains(&self.padding_mm) {
            return Err(AssembleError::Settings(format!(
                "padding must be between 0 and {MAX_PADDING_MM} mm, got {}",
                self.padding_mm
            )));
        }
        Ok(())
    }
}
