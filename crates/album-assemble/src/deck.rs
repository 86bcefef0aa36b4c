//! The ordered slide list: a sequence-of-records manager with no geometry
//! logic. Order is exactly the export page order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::ImageKind;

static NEXT_SLIDE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier for an accepted slide. Never reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(pub u64);

impl SlideId {
    /// Allocate a fresh identifier.
    pub fn next() -> Self {
        Self(NEXT_SLIDE_ID.fetch_add(1, Ordering::SeqCst))
    }
}

/// One accepted image, corresponding to one output page.
#[derive(Debug, Clone)]
pub struct SlideItem {
    pub id: SlideId,
    pub name: String,
    pub kind: ImageKind,
    pub bytes: Arc<[u8]>,
}

impl SlideItem {
    pub fn new(name: impl Into<String>, kind: ImageKind, bytes: Vec<u8>) -> Self {
        Self {
            id: SlideId::next(),
            name: name.into(),
            kind,
            bytes: bytes.into(),
        }
    }
}

/// Direction for [`SlideDeck::move_adjacent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// The user-chosen sequence of accepted images.
///
/// Removal operations hand the removed items back so the owning layer can
/// release any preview resource exactly once.
#[derive(Debug, Default)]
pub struct SlideDeck {
    slides: Vec<SlideItem>,
}

impl SlideDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch to the end, preserving the batch's relative order.
    pub fn append(&mut self, items: Vec<SlideItem>) {
        self.slides.extend(items);
    }

    /// Swap the slide at `index` with its neighbor. Returns false (and
    /// changes nothing) when the neighbor index is out of bounds.
    pub fn move_adjacent(&mut self, index: usize, direction: MoveDirection) -> bool {
        let neighbor = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1),
        };
        match neighbor {
            Some(neighbor) if index < self.slides.len() && neighbor < self.slides.len() => {
                self.slides.swap(index, neighbor);
                true
            }
            _ => false,
        }
    }

    /// Delete the matching slide and return it for resource release.
    /// Absent identifiers are a no-op.
    pub fn remove(&mut self, id: SlideId) -> Option<SlideItem> {
        let index = self.slides.iter().position(|s| s.id == id)?;
        Some(self.slides.remove(index))
    }

    /// Empty the sequence, handing every slide back for resource release.
    pub fn clear(&mut self) -> Vec<SlideItem> {
        std::mem::take(&mut self.slides)
    }

    pub fn slides(&self) -> &[SlideItem] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn contains(&self, id: SlideId) -> bool {
        self.slides.iter().any(|s| s.id == id)
    }
}
