pub mod assemble;
mod deck;
mod encoder;
mod intake;
mod layout;
mod options;
mod pdf;
mod types;

pub use assemble::{ExportPhase, assemble_document, assemble_to_file};
pub use deck::{MoveDirection, SlideDeck, SlideId, SlideItem};
pub use encoder::DocumentEncoder;
pub use intake::{accept_files, kind_for_media_type, media_kind_for};
pub use layout::{PagePlan, plan_page};
pub use options::*;
pub use pdf::PrintPdfEncoder;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("failed to decode '{name}': {source}")]
    Decode {
        name: String,
        source: image::ImageError,
    },
    #[error("encoder error: {0}")]
    Encode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings: {0}")]
    Settings(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No slides to assemble")]
    EmptyDeck,
}

pub type Result<T> = std::result::Result<T, AssembleError>;
