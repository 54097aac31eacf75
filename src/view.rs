//! Transcript view adapter
//!
//! Derives the "scroll to latest" signal from transcript mutations without
//! depending on any rendering technology. The runtime calls
//! [`TranscriptView::scroll_to_latest`] after every transcript append, and
//! only then; the adapter pins the surface's scroll offset to its content
//! height. A widget can run headless: an unattached adapter swallows the
//! signal.

use std::sync::{Arc, Mutex};

/// The only UI-level coupling in the crate: a scrollable container exposing
/// its content height and a writable scroll offset, both in pixels.
pub trait ScrollSurface: Send + Sync {
    fn content_height(&self) -> u32;
    fn set_scroll_offset(&self, offset: u32);
}

/// Adapter between the state machine and a scroll surface. Created detached;
/// the surface is attached once the UI layer exists.
pub struct TranscriptView<V> {
    surface: Mutex<Option<Arc<V>>>,
}

impl<V: ScrollSurface> TranscriptView<V> {
    /// An adapter with no surface yet; scroll signals are dropped until
    /// [`attach`](Self::attach) is called.
    pub fn detached() -> Self {
        Self {
            surface: Mutex::new(None),
        }
    }

    pub fn attached(surface: Arc<V>) -> Self {
        Self {
            surface: Mutex::new(Some(surface)),
        }
    }

    pub fn attach(&self, surface: Arc<V>) {
        *self.surface.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(surface);
    }

    /// Pin the surface to its latest content. Safe to call with no surface
    /// attached; that is a no-op, not an error.
    pub fn scroll_to_latest(&self) {
        let guard = self
            .surface
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match guard.as_ref() {
            Some(surface) => surface.set_scroll_offset(surface.content_height()),
            None => tracing::debug!("scroll signal with no surface attached, dropping"),
        }
    }
}

/// Surface for headless use; swallows scroll signals
pub struct NullSurface;

impl ScrollSurface for NullSurface {
    fn content_height(&self) -> u32 {
        0
    }

    fn set_scroll_offset(&self, _offset: u32) {}
}
