use crate::constants::{
    GYRO_BETA_RANGE_DEG, GYRO_BETA_REST_DEG, GYRO_GAMMA_RANGE_DEG, SCROLL_SIGNAL_SCALE,
};
use glam::Vec2;

/// Client-space bounding box of the tracked region (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Normalized pointer (or tilt) position. Roughly [-0.5, 0.5] from the
/// pointer, roughly [-1, 1] from the gyroscope.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Device behind a pointer event, from `PointerEvent.pointerType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Unknown or empty types are treated as a mouse.
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }

    /// Whether a `pointerleave` from this device means the pointer moved
    /// away. A touch contact reports leave when the finger lifts, ahead of
    /// the tap's `click`.
    #[inline]
    pub fn leave_ends_hover(self) -> bool {
        self != Self::Touch
    }
}

/// Latest values written by the input handlers and read by the frame tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Signals {
    pub pointer: PointerSignal,
    pub scroll: f32,
}

/// Pointer position relative to the region centre, divided by region size.
/// A zero-sized or non-finite region yields no signal.
#[inline]
pub fn pointer_from_client(client_x: f32, client_y: f32, rect: &Rect) -> Option<PointerSignal> {
    if rect.is_degenerate() {
        return None;
    }
    let c = rect.center();
    Some(PointerSignal::new(
        (client_x - c.x) / rect.width,
        (client_y - c.y) / rect.height,
    ))
}

/// Map device orientation (degrees) to a pointer signal.
///
/// `gamma` is left/right tilt, `beta` front/back tilt. A missing axis reads
/// as centred; an event carrying neither axis produces no update.
#[inline]
pub fn pointer_from_orientation(gamma: Option<f64>, beta: Option<f64>) -> Option<PointerSignal> {
    let gamma = gamma.filter(|g| g.is_finite());
    let beta = beta.filter(|b| b.is_finite());
    if gamma.is_none() && beta.is_none() {
        return None;
    }
    let x = gamma.map_or(0.0, |g| g as f32 / GYRO_GAMMA_RANGE_DEG);
    let y = beta.map_or(0.0, |b| (b as f32 - GYRO_BETA_REST_DEG) / GYRO_BETA_RANGE_DEG);
    Some(PointerSignal::new(x, y))
}

#[inline]
pub fn scroll_signal(scroll_y: f64) -> f32 {
    if scroll_y.is_finite() {
        scroll_y as f32 * SCROLL_SIGNAL_SCALE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_kind_from_event_type() {
        assert_eq!(PointerKind::from_pointer_type("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from_pointer_type("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from_pointer_type("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_pointer_type(""), PointerKind::Mouse);
        assert!(!PointerKind::Touch.leave_ends_hover());
        assert!(PointerKind::Pen.leave_ends_hover());
    }

    #[test]
    fn pointer_is_relative_to_region_centre() {
        let rect = Rect::new(100.0, 50.0, 800.0, 450.0);
        let s = pointer_from_client(100.0 + 600.0, 50.0 + 225.0, &rect).unwrap();
        assert!((s.x - 0.25).abs() < 1e-6);
        assert!(s.y.abs() < 1e-6);

        let corner = pointer_from_client(100.0, 50.0, &rect).unwrap();
        assert!((corner.x + 0.5).abs() < 1e-6);
        assert!((corner.y + 0.5).abs() < 1e-6);
    }

    #[test]
    fn degenerate_region_gives_no_signal() {
        assert!(pointer_from_client(10.0, 10.0, &Rect::new(0.0, 0.0, 0.0, 100.0)).is_none());
        assert!(pointer_from_client(10.0, 10.0, &Rect::new(0.0, 0.0, f32::NAN, 1.0)).is_none());
    }

    #[test]
    fn orientation_maps_gamma_and_beta() {
        let s = pointer_from_orientation(Some(45.0), Some(90.0)).unwrap();
        assert!((s.x - 1.0).abs() < 1e-6);
        assert!((s.y - 1.0).abs() < 1e-6);

        let level = pointer_from_orientation(Some(-22.5), Some(45.0)).unwrap();
        assert!((level.x + 0.5).abs() < 1e-6);
        assert!(level.y.abs() < 1e-6);
    }

    #[test]
    fn orientation_without_data_is_ignored() {
        assert_eq!(pointer_from_orientation(None, None), None);
        assert_eq!(pointer_from_orientation(Some(f64::NAN), None), None);
        let only_beta = pointer_from_orientation(None, Some(0.0)).unwrap();
        assert_eq!(only_beta.x, 0.0);
        assert!((only_beta.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn scroll_is_scaled() {
        assert!((scroll_signal(250.0) - 25.0).abs() < 1e-6);
        assert_eq!(scroll_signal(f64::INFINITY), 0.0);
    }
}
