use album_assemble::ExportPhase;
use album_async_runtime::{AlbumCommand, AlbumUpdate};
use eframe::egui;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{AlbumState, show_album};

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct AlbumApp {
    state: AlbumState,
    status: String,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<AlbumCommand>,
    update_rx: mpsc::UnboundedReceiver<AlbumUpdate>,

    // Progress tracking
    progress: Option<ProgressState>,

    // The worker task lives on this runtime
    _runtime: tokio::runtime::Runtime,
}

impl AlbumApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        runtime.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            state: AlbumState::new(logger),
            status: "Starting PDF encoder...".to_string(),
            command_tx,
            update_rx,
            progress: None,
            _runtime: runtime,
        }
    }

    /// Funnel dropped files into intake; validation happens in the worker
    /// so non-image drops are silently skipped there.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !paths.is_empty() {
            log::info!("Received {} dropped file(s)", paths.len());
            let _ = self.command_tx.send(AlbumCommand::IntakeFiles { paths });
        }
    }

    /// Process all pending updates from the worker
    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                AlbumUpdate::EncoderReady => {
                    self.state.encoder_ready = true;
                    self.status = "Ready".to_string();
                }
                AlbumUpdate::SlidesAccepted { slides, skipped } => {
                    let added = slides.len();
                    self.state.deck.append(slides);
                    self.status = if skipped > 0 {
                        format!("Added {added} image(s), skipped {skipped} non-image file(s)")
                    } else {
                        format!("Added {added} image(s)")
                    };
                }
                AlbumUpdate::PreviewReady {
                    id,
                    width,
                    height,
                    rgba_data,
                } => {
                    // The slide may have been removed while its thumbnail
                    // was still decoding; discard the orphan.
                    if self.state.deck.contains(id) {
                        let color_image =
                            egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba_data);
                        let texture = ctx.load_texture(
                            format!("slide_{}", id.0),
                            color_image,
                            egui::TextureOptions::default(),
                        );
                        self.state.previews.insert(id, texture);
                    }
                }
                AlbumUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        current,
                        total,
                    });
                    ctx.request_repaint();
                }
                AlbumUpdate::AssembleComplete { path, page_count } => {
                    self.state.phase = ExportPhase::Idle;
                    self.progress = None;
                    self.status = format!("Saved {page_count}-page album → {}", path.display());
                }
                AlbumUpdate::Error { message } => {
                    self.state.phase = ExportPhase::Idle;
                    self.progress = None;
                    self.status = format!("Error: {message}");
                }
            }
        }
    }
}

impl eframe::App for AlbumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.process_updates(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.phase == ExportPhase::Generating {
                    ui.spinner();
                }
                match &self.progress {
                    Some(p) => {
                        ui.label(format!("{} ({}/{})", p.operation, p.current, p.total));
                    }
                    None => {
                        ui.label(&self.status);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_album(ui, &mut self.state, &self.command_tx);
        });

        if self.state.phase == ExportPhase::Generating {
            // Keep pumping worker updates while an export is in flight
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
