use std::collections::HashMap;

use album_assemble::{AssembleOptions, ExportPhase, SlideDeck, SlideId};
use eframe::egui;

use crate::logger::AppLogger;

pub struct AlbumState {
    pub deck: SlideDeck,
    pub options: AssembleOptions,
    /// Thumbnail textures keyed by slide id. Entries are removed exactly
    /// once, when the slide leaves the deck; dropping the handle frees
    /// the texture.
    pub previews: HashMap<SlideId, egui::TextureHandle>,
    pub phase: ExportPhase,
    pub encoder_ready: bool,
    pub logger: AppLogger,
}

impl AlbumState {
    pub fn new(logger: AppLogger) -> Self {
        Self {
            deck: SlideDeck::new(),
            options: AssembleOptions::default(),
            previews: HashMap::new(),
            phase: ExportPhase::default(),
            encoder_ready: false,
            logger,
        }
    }

    /// Release a removed slide's preview resource.
    pub fn release_preview(&mut self, id: SlideId) {
        self.previews.remove(&id);
    }
}
