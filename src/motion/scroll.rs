//! Scroll-driven helpers and the handle type for window listeners.

/// Page offset after which the header switches to its solid style
pub const SCROLLED_OFFSET: f64 = 10.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET
}

/// How far a block has scrolled past the top of the viewport, in `[0, 1]`.
///
/// `0` while its top edge is at or below the viewport top, `1` once its
/// bottom edge has reached it.
pub fn scroll_progress(rect_top: f64, rect_height: f64) -> f64 {
    if !(rect_height.is_finite() && rect_height > 0.0) {
        return 0.0;
    }
    (-rect_top / rect_height).clamp(0.0, 1.0)
}

/// Background translation (percent) for a given scroll progress
pub fn parallax_offset(progress: f64, max_percent: f64) -> f64 {
    progress.clamp(0.0, 1.0) * max_percent
}

/// A listener that must be removed exactly once.
///
/// `release` may be called any number of times; only the first call runs
/// the removal.
pub struct ListenerHandle {
    remove: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ListenerHandle {
    pub fn new(remove: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    /// Returns `true` if this call actually removed the listener
    pub fn release(&mut self) -> bool {
        match self.remove.take() {
            Some(remove) => {
                remove();
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.remove.is_some()
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn scrolled_only_past_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn progress_clamps() {
        assert_eq!(scroll_progress(100.0, 500.0), 0.0);
        assert_eq!(scroll_progress(0.0, 500.0), 0.0);
        assert_eq!(scroll_progress(-250.0, 500.0), 0.5);
        assert_eq!(scroll_progress(-900.0, 500.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 0.0), 0.0);
    }

    #[test]
    fn parallax_scales_progress() {
        assert_eq!(parallax_offset(0.0, 30.0), 0.0);
        assert_eq!(parallax_offset(0.5, 30.0), 15.0);
        assert_eq!(parallax_offset(2.0, 30.0), 30.0);
    }

    #[test]
    fn handle_releases_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut handle = ListenerHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(handle.is_attached());
        assert!(handle.release());
        assert!(!handle.release());
        assert!(!handle.is_attached());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
