//! Depth-mapped per-tile targets and the springs that chase them.

use crate::catalog::GalleryItem;
use crate::constants::*;
use crate::signal::Signals;
use crate::spring::{Spring, SpringConfig};
use crate::state::InteractionState;
use glam::Vec2;
use std::f32::consts::TAU;

/// Linear map from `from` to `to`, clamping the input to `from` first.
#[inline]
pub fn map_range_clamped(v: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let (a, b) = from;
    if (b - a).abs() < f32::EPSILON {
        return to.0;
    }
    let t = ((v - a) / (b - a)).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Orbit centre offset, in percent of the container, for item `index` of `count`.
#[inline]
pub fn orbit_position(index: usize, count: usize, depth: f32, scroll: f32) -> Vec2 {
    let angle = (index as f32 / count.max(1) as f32) * TAU;
    let radius = ORBIT_BASE_RADIUS_PCT + depth * ORBIT_DEPTH_RADIUS_PCT;
    let phase = angle + scroll * ORBIT_SCROLL_RATE;
    Vec2::new(phase.cos() * radius, phase.sin() * radius)
}

#[inline]
pub fn base_opacity(depth: f32) -> f32 {
    OPACITY_BASE - depth * OPACITY_DEPTH_FALLOFF
}

/// The seven animated channels of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileTargets {
    /// Parallax offset in pixels.
    pub offset: Vec2,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub blur_px: f32,
}

pub fn tile_targets(
    item: &GalleryItem,
    index: usize,
    signals: &Signals,
    state: &InteractionState,
) -> TileTargets {
    let d = item.depth;
    let p = signals.pointer;
    let unit = (-1.0, 1.0);

    let offset = Vec2::new(
        map_range_clamped(p.x, unit, (-PARALLAX_X_PX * d, PARALLAX_X_PX * d)),
        map_range_clamped(p.y, unit, (-PARALLAX_Y_PX * d, PARALLAX_Y_PX * d)),
    );
    let rotate_x_deg = map_range_clamped(p.y, unit, (TILT_DEG * d, -TILT_DEG * d));
    let rotate_y_deg = map_range_clamped(p.x, unit, (-TILT_DEG * d, TILT_DEG * d));

    let mut scale = if state.is_hovering() {
        1.0 + d * HOVER_SCALE_PER_DEPTH
    } else {
        1.0
    };
    if state.active_index() == Some(index) {
        scale *= ACTIVE_SCALE_MULTIPLIER;
    }
    if state.hovered_tile() == Some(index) {
        scale *= TILE_HOVER_SCALE_MULTIPLIER;
    }

    let opacity = match state.active_index() {
        Some(active) if active == index => OPACITY_ACTIVE,
        Some(_) => OPACITY_DIMMED,
        None if state.is_hovering() => OPACITY_HOVER,
        None => base_opacity(d),
    };

    let blur_px = if state.is_hovering() {
        0.0
    } else {
        (1.0 - d) * BLUR_PER_DEPTH_PX
    };

    TileTargets {
        offset,
        rotate_x_deg,
        rotate_y_deg,
        scale,
        opacity,
        blur_px,
    }
}

/// Static box of a tile within the container, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileLayout {
    pub width_pct: f32,
    pub height_pct: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub z_index: i32,
}

pub fn tile_layout(index: usize, count: usize, depth: f32, scroll: f32) -> TileLayout {
    let width_pct = TILE_BASE_WIDTH_PCT + depth * TILE_DEPTH_WIDTH_PCT;
    let height_pct = width_pct * TILE_ASPECT;
    let orbit = orbit_position(index, count, depth, scroll);
    TileLayout {
        width_pct,
        height_pct,
        left_pct: 50.0 + orbit.x - width_pct / 2.0,
        top_pct: 50.0 + orbit.y - height_pct / 2.0,
        z_index: (depth * TILE_Z_PER_DEPTH).round() as i32,
    }
}

/// One spring per animated channel, all sharing the tile's depth-derived mass.
#[derive(Clone, Debug)]
pub struct TileMotion {
    x: Spring,
    y: Spring,
    rotate_x: Spring,
    rotate_y: Spring,
    scale: Spring,
    opacity: Spring,
    blur: Spring,
}

impl TileMotion {
    pub fn new(depth: f32, initial: &TileTargets) -> Self {
        let cfg = SpringConfig::for_depth(depth);
        Self {
            x: Spring::new(initial.offset.x, cfg),
            y: Spring::new(initial.offset.y, cfg),
            rotate_x: Spring::new(initial.rotate_x_deg, cfg),
            rotate_y: Spring::new(initial.rotate_y_deg, cfg),
            scale: Spring::new(initial.scale, cfg),
            opacity: Spring::new(initial.opacity, cfg),
            blur: Spring::new(initial.blur_px, cfg),
        }
    }

    pub fn retarget(&mut self, t: &TileTargets) {
        self.x.set_target(t.offset.x);
        self.y.set_target(t.offset.y);
        self.rotate_x.set_target(t.rotate_x_deg);
        self.rotate_y.set_target(t.rotate_y_deg);
        self.scale.set_target(t.scale);
        self.opacity.set_target(t.opacity);
        self.blur.set_target(t.blur_px);
    }

    pub fn step(&mut self, dt_sec: f32) {
        for s in self.springs_mut() {
            s.step(dt_sec);
        }
    }

    pub fn is_at_rest(&self) -> bool {
        [
            &self.x,
            &self.y,
            &self.rotate_x,
            &self.rotate_y,
            &self.scale,
            &self.opacity,
            &self.blur,
        ]
        .iter()
        .all(|s| s.is_at_rest())
    }

    pub fn current(&self) -> TileTargets {
        TileTargets {
            offset: Vec2::new(self.x.value(), self.y.value()),
            rotate_x_deg: self.rotate_x.value(),
            rotate_y_deg: self.rotate_y.value(),
            scale: self.scale.value(),
            opacity: self.opacity.value(),
            blur_px: self.blur.value(),
        }
    }

    fn springs_mut(&mut self) -> [&mut Spring; 7] {
        [
            &mut self.x,
            &mut self.y,
            &mut self.rotate_x,
            &mut self.rotate_y,
            &mut self.scale,
            &mut self.opacity,
            &mut self.blur,
        ]
    }
}
