//! One-shot viewport reveal.
//!
//! A section starts hidden and flips to visible the first time enough of
//! it intersects the viewport. The flag never flips back, and the
//! underlying watcher is disconnected as soon as it has done its job.

use super::MotionError;

/// Fraction of the element's area that must be inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Feature grid
    pub const LOW: Self = Self(0.1);
    /// Stats section, team cards
    pub const MEDIUM: Self = Self(0.2);
    /// Timeline entries, showcase rows
    pub const HIGH: Self = Self(0.3);

    pub fn new(value: f64) -> Result<Self, MotionError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(MotionError::InvalidThreshold(value))
        }
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_met_by(&self, ratio: f64) -> bool {
        ratio >= self.0
    }
}

/// Monotonic visibility flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    has_been_visible: bool,
}

impl RevealState {
    pub fn has_been_visible(&self) -> bool {
        self.has_been_visible
    }

    fn mark_visible(&mut self) {
        self.has_been_visible = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Watching,
    Fired,
}

/// Something that can stop delivering visibility notifications.
///
/// Implemented by the browser `IntersectionObserver` wrapper in
/// [`crate::hooks`]; tests use a counting double.
pub trait Watcher {
    fn disconnect(&mut self);
}

impl Watcher for () {
    fn disconnect(&mut self) {}
}

/// No watcher at all, e.g. when the browser could not create one
impl<W: Watcher> Watcher for Option<W> {
    fn disconnect(&mut self) {
        if let Some(watcher) = self {
            watcher.disconnect();
        }
    }
}

/// Reveal state machine bound to one watcher
#[derive(Debug)]
pub struct OneShotReveal<W: Watcher> {
    threshold: Threshold,
    state: RevealState,
    watcher: Option<W>,
}

impl<W: Watcher> OneShotReveal<W> {
    pub fn new(threshold: Threshold, watcher: W) -> Self {
        Self {
            threshold,
            state: RevealState::default(),
            watcher: Some(watcher),
        }
    }

    /// Feed one intersection ratio. Returns `true` only for the single
    /// notification that flips the flag.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state.has_been_visible() || self.watcher.is_none() {
            return false;
        }
        if !self.threshold.is_met_by(ratio) {
            return false;
        }
        self.state.mark_visible();
        self.release();
        true
    }

    /// Stop watching. Safe to call any number of times, from either phase.
    pub fn release(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.disconnect();
        }
    }

    /// Observation is unavailable: show the content rather than hide it forever.
    pub fn fail_open(&mut self) {
        self.state.mark_visible();
        self.release();
    }

    pub fn is_visible(&self) -> bool {
        self.state.has_been_visible()
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn phase(&self) -> RevealPhase {
        if self.state.has_been_visible() {
            RevealPhase::Fired
        } else {
            RevealPhase::Watching
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state
    }
}

/// Class list driving the CSS enter transition
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal is-visible"
    } else {
        "reveal"
    }
}

/// Inline style staggering siblings by `step_ms`
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", index as u64 * step_ms as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingWatcher(Rc<Cell<u32>>);

    impl Watcher for CountingWatcher {
        fn disconnect(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn reveal(threshold: f64) -> (OneShotReveal<CountingWatcher>, Rc<Cell<u32>>) {
        let watcher = CountingWatcher::default();
        let count = watcher.0.clone();
        (OneShotReveal::new(Threshold::new(threshold).unwrap(), watcher), count)
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let (mut r, count) = reveal(0.2);
        assert!(!r.observe(0.0));
        assert!(!r.observe(0.19));
        assert!(!r.is_visible());
        assert_eq!(r.phase(), RevealPhase::Watching);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn fires_once_and_disconnects_immediately() {
        let (mut r, count) = reveal(0.2);
        assert!(r.observe(0.2));
        assert_eq!(count.get(), 1);
        assert!(!r.is_watching());

        assert!(!r.observe(0.9));
        assert!(!r.observe(1.0));
        assert_eq!(count.get(), 1);
        assert_eq!(r.phase(), RevealPhase::Fired);
    }

    #[test]
    fn never_reverts_to_hidden() {
        let (mut r, _) = reveal(0.1);
        r.observe(0.5);
        r.observe(0.0);
        r.release();
        assert!(r.is_visible());
        assert!(r.state().has_been_visible());
    }

    #[test]
    fn release_is_idempotent() {
        let (mut r, count) = reveal(0.3);
        r.release();
        r.release();
        assert_eq!(count.get(), 1);

        // released before firing: nothing can reveal it any more
        assert!(!r.observe(1.0));
        assert!(!r.is_visible());
    }

    #[test]
    fn release_after_fire_does_not_disconnect_twice() {
        let (mut r, count) = reveal(0.3);
        r.observe(0.4);
        r.release();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn fail_open_shows_content() {
        let (mut r, count) = reveal(0.3);
        r.fail_open();
        assert!(r.is_visible());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn threshold_range() {
        assert!(Threshold::new(0.0).is_err());
        assert!(Threshold::new(1.01).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::new(1.0).unwrap().value(), 1.0);
        assert_eq!(Threshold::LOW.value(), 0.1);
    }

    #[test]
    fn presentation_helpers() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal is-visible");
        assert_eq!(stagger_delay(3, 100), "transition-delay: 300ms");
    }
}
