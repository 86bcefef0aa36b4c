pub mod album;

pub use album::{AlbumState, show_album};
