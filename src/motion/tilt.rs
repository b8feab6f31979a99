//! Parallax tilt: pointer position inside an element to a bounded rotation.

use super::MotionError;

/// Rectangle of the hovered element, captured when the event fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// False until the element has been laid out with a real area
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Scaling factor bounding the normalized pointer offset
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Intensity(f64);

impl Intensity {
    pub const DEFAULT: Self = Self(0.05);
    /// Hero artwork
    pub const HERO: Self = Self(20.0);
    /// Feature grid cards
    pub const CARD: Self = Self(8.0);

    pub fn new(value: f64) -> Result<Self, MotionError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(MotionError::InvalidIntensity(value))
        }
    }

    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Normalized offset of the pointer from the element centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerOffset {
    pub x_percent: f64,
    pub y_percent: f64,
}

/// One pointer-move reading, relative to the element's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub bounds: Bounds,
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub intensity: Intensity,
}

impl PointerSample {
    /// Build a sample from viewport (client) coordinates
    pub fn from_client(bounds: Bounds, client_x: f64, client_y: f64, intensity: Intensity) -> Self {
        Self {
            bounds,
            pointer_x: client_x - bounds.left,
            pointer_y: client_y - bounds.top,
            intensity,
        }
    }

    /// Each axis lands in `[-i/2, i/2]` for a pointer inside the element.
    /// Returns `None` for an element without area.
    pub fn offset(&self) -> Option<PointerOffset> {
        if !self.bounds.has_area() {
            return None;
        }
        let i = self.intensity.value();
        Some(PointerOffset {
            x_percent: (self.pointer_x / self.bounds.width - 0.5) * i,
            y_percent: (self.pointer_y / self.bounds.height - 0.5) * i,
        })
    }
}

/// Two-axis rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const ZERO: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Vertical axis is inverted: pointer above centre tips the top edge towards the viewer.
    pub fn from_offset(offset: PointerOffset) -> Self {
        Self {
            rotate_x: -offset.y_percent,
            rotate_y: offset.x_percent,
        }
    }

    pub fn transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.rotate_x, self.rotate_y)
    }
}

/// Tilt owned by a single component, plus which of its elements is hovered.
///
/// The hero uses `K = ()`, the feature grid keys cards by id.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltTracker<K> {
    active: Option<K>,
    tilt: Tilt,
}

impl<K> Default for TiltTracker<K> {
    fn default() -> Self {
        Self {
            active: None,
            tilt: Tilt::ZERO,
        }
    }
}

impl<K: PartialEq> TiltTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Degenerate samples mark the element active but leave the tilt alone.
    pub fn on_move(&mut self, key: K, sample: &PointerSample) {
        self.active = Some(key);
        if let Some(offset) = sample.offset() {
            self.tilt = Tilt::from_offset(offset);
        }
    }

    pub fn on_leave(&mut self) {
        self.active = None;
        self.tilt = Tilt::ZERO;
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active.as_ref() == Some(key)
    }

    /// CSS transform for `key`; `"none"` unless it is the hovered element
    pub fn transform_for(&self, key: &K) -> String {
        if self.is_active(key) {
            self.tilt.transform()
        } else {
            "none".to_string()
        }
    }
}
