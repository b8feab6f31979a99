//! Pointer tilt and viewport reveal mechanics.
//!
//! Everything in here is plain Rust with no DOM access so it runs the same
//! on the server, in the browser and under `cargo test`. The browser glue
//! lives in [`crate::hooks`].

pub mod reveal;
pub mod scroll;
pub mod tilt;

pub use reveal::{OneShotReveal, RevealPhase, RevealState, Threshold, Watcher};
pub use scroll::{is_scrolled, parallax_offset, scroll_progress, ListenerHandle, SCROLLED_OFFSET};
pub use tilt::{Bounds, Intensity, PointerOffset, PointerSample, Tilt, TiltTracker};

/// Errors raised when constructing motion parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("Tilt intensity must be a positive finite number, got {0}")]
    InvalidIntensity(f64),
    #[error("Reveal threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),
}
