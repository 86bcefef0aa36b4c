use std::path::PathBuf;

// Re-export the core types the GUI exchanges with the worker
pub use album_assemble::{AssembleOptions, ExportPhase, SlideId, SlideItem};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum AlbumCommand {
    /// Validate candidate files and turn the raster ones into slides
    IntakeFiles { paths: Vec<PathBuf> },
    /// Assemble the given slides, in order, into a document at `output_path`
    AssembleAlbum {
        slides: Vec<SlideItem>,
        options: AssembleOptions,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum AlbumUpdate {
    /// The worker is up and the PDF backend is available; until this
    /// arrives the export action stays disabled
    EncoderReady,
    /// Intake finished: accepted slides in input order, plus the number
    /// of candidates silently skipped as non-images
    SlidesAccepted {
        slides: Vec<SlideItem>,
        skipped: usize,
    },
    /// A thumbnail for one slide, ready to upload as a texture
    PreviewReady {
        id: SlideId,
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
    },
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    AssembleComplete {
        path: PathBuf,
        page_count: usize,
    },
    Error {
        message: String,
    },
}
