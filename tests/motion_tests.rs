// Host-side tests for the pointer tilt and one-shot reveal machinery.

use std::cell::Cell;
use std::rc::Rc;

use innovate::motion::{
    is_scrolled, parallax_offset, scroll_progress, Bounds, Intensity, OneShotReveal, PointerSample, RevealPhase,
    Threshold, Tilt, TiltTracker, Watcher,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn card_tilt_follows_pointer() {
    // 400x200 card, pointer a quarter of the way in on both axes.
    // (100/400 - 0.5) * 8 and (50/200 - 0.5) * 8 are both -2.0
    let bounds = Bounds::new(0.0, 0.0, 400.0, 200.0);
    let sample = PointerSample::from_client(bounds, 100.0, 50.0, Intensity::CARD);

    let offset = sample.offset().unwrap();
    assert!(close(offset.x_percent, -2.0));
    assert!(close(offset.y_percent, -2.0));

    let tilt = Tilt::from_offset(offset);
    assert!(close(tilt.rotate_x, 2.0));
    assert!(close(tilt.rotate_y, -2.0));
}

#[test]
fn card_tilt_from_page_coordinates() {
    // Same card scrolled to (50, 300) in the viewport
    let bounds = Bounds::new(50.0, 300.0, 400.0, 200.0);
    let sample = PointerSample::from_client(bounds, 210.0, 325.0, Intensity::CARD);

    let offset = sample.offset().unwrap();
    assert!(close(offset.x_percent, -0.8));
    assert!(close(offset.y_percent, -3.0));
    assert!(close(Tilt::from_offset(offset).rotate_x, 3.0));
}

#[test]
fn hovering_moves_between_cards() {
    let bounds = Bounds::new(0.0, 0.0, 400.0, 200.0);
    let mut tracker = TiltTracker::new();

    tracker.on_move("security", &PointerSample::from_client(bounds, 400.0, 0.0, Intensity::CARD));
    assert!(tracker.is_active(&"security"));
    assert_eq!(tracker.transform_for(&"analytics"), "none");

    tracker.on_move("analytics", &PointerSample::from_client(bounds, 200.0, 100.0, Intensity::CARD));
    assert!(!tracker.is_active(&"security"));
    assert_eq!(tracker.tilt(), Tilt::ZERO);

    tracker.on_leave();
    assert_eq!(tracker.active(), None);
    assert_eq!(tracker.transform_for(&"analytics"), "none");
}

#[derive(Clone, Default)]
struct Disconnects(Rc<Cell<u32>>);

impl Watcher for Disconnects {
    fn disconnect(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn section_reveals_once_while_scrolling() {
    let watcher = Disconnects::default();
    let count = watcher.0.clone();
    let mut reveal = OneShotReveal::new(Threshold::MEDIUM, watcher);

    // Below the fold
    assert!(!reveal.observe(0.0));
    assert!(!reveal.is_visible());

    // Scrolled a little: 10% showing
    assert!(!reveal.observe(0.1));
    assert_eq!(reveal.phase(), RevealPhase::Watching);

    // A quarter on screen
    assert!(reveal.observe(0.25));
    assert!(reveal.is_visible());
    assert_eq!(count.get(), 1);

    // Scrolled back out of view
    assert!(!reveal.observe(0.0));
    assert!(reveal.is_visible());

    // Unmount
    reveal.release();
    assert_eq!(count.get(), 1);
}

#[test]
fn unmount_before_reveal_disconnects() {
    let watcher = Disconnects::default();
    let count = watcher.0.clone();
    let mut reveal = OneShotReveal::new(Threshold::HIGH, watcher);

    reveal.release();
    assert_eq!(count.get(), 1);
    assert!(!reveal.is_watching());
    assert!(!reveal.is_visible());
}

#[test]
fn header_and_parallax_scroll_helpers() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(10.0));
    assert!(is_scrolled(11.0));

    // Hero 800px tall, scrolled 200px past the top
    let progress = scroll_progress(-200.0, 800.0);
    assert!(close(progress, 0.25));
    assert!(close(parallax_offset(progress, 30.0), 7.5));
}
