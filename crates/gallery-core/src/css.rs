//! Inline style strings for a composed tile frame.

use crate::gallery::TileFrame;
use std::fmt::Write;

pub fn transform(frame: &TileFrame) -> String {
    let m = &frame.motion;
    format!(
        "translate3d({:.2}px, {:.2}px, 0px) scale({:.4}) rotateX({:.3}deg) rotateY({:.3}deg)",
        m.offset.x, m.offset.y, m.scale, m.rotate_x_deg, m.rotate_y_deg
    )
}

/// Blur never goes negative; tiles deeper than 1.0 are simply sharp at rest.
pub fn filter(frame: &TileFrame) -> String {
    format!("blur({:.2}px)", frame.motion.blur_px.max(0.0))
}

/// Drop shadow, contact shadow and inner vignette, all scaled by depth.
pub fn box_shadow(depth: f32) -> String {
    let d = depth;
    let drop = format!(
        "0 {:.1}px {:.1}px rgba(0,0,0,{:.3})",
        20.0 * d,
        40.0 * d,
        0.4 + d * 0.2
    );
    let contact = format!(
        "0 {:.1}px {:.1}px rgba(0,0,0,{:.3})",
        2.0 * d,
        10.0 * d,
        0.3 + d * 0.1
    );
    let vignette = format!("inset 0 0 {:.1}px rgba(0,0,0,{:.3})", 30.0 * d, 0.4 + d * 0.1);
    format!("{}, {}, {}", drop, contact, vignette)
}

/// Full `style` attribute for a tile.
pub fn tile_style(frame: &TileFrame) -> String {
    let l = &frame.layout;
    let mut css = String::with_capacity(320);
    _ = write!(
        css,
        "left:{:.3}%;top:{:.3}%;width:{:.3}%;height:{:.3}%;z-index:{};",
        l.left_pct, l.top_pct, l.width_pct, l.height_pct, l.z_index
    );
    _ = write!(css, "opacity:{:.3};", frame.motion.opacity.clamp(0.0, 1.0));
    _ = write!(css, "transform:{};", transform(frame));
    _ = write!(css, "filter:{};", filter(frame));
    _ = write!(css, "box-shadow:{};", box_shadow(frame.depth));
    if frame.removed {
        css.push_str("visibility:hidden;");
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{TileLayout, TileTargets};
    use glam::Vec2;

    fn frame() -> TileFrame {
        TileFrame {
            index: 0,
            depth: 1.0,
            layout: TileLayout {
                width_pct: 20.0,
                height_pct: 24.0,
                left_pct: 90.0,
                top_pct: 38.0,
                z_index: 20,
            },
            motion: TileTargets {
                offset: Vec2::new(50.0, -12.5),
                rotate_x_deg: 0.0,
                rotate_y_deg: 3.0,
                scale: 1.4,
                opacity: 0.95,
                blur_px: -0.6,
            },
            removed: false,
        }
    }

    #[test]
    fn transform_lists_translate_scale_rotate() {
        assert_eq!(
            transform(&frame()),
            "translate3d(50.00px, -12.50px, 0px) scale(1.4000) rotateX(0.000deg) rotateY(3.000deg)"
        );
    }

    #[test]
    fn negative_blur_is_clamped() {
        assert_eq!(filter(&frame()), "blur(0.00px)");
    }

    #[test]
    fn style_carries_layout_and_motion() {
        let css = tile_style(&frame());
        assert!(css.starts_with(
            "left:90.000%;top:38.000%;width:20.000%;height:24.000%;z-index:20;"
        ));
        assert!(css.contains("opacity:0.950;"));
        assert!(css.contains("box-shadow:0 20.0px 40.0px rgba(0,0,0,0.600)"));
        assert!(!css.contains("visibility"));
    }

    #[test]
    fn removed_tiles_are_hidden() {
        let mut f = frame();
        f.removed = true;
        assert!(tile_style(&f).ends_with("visibility:hidden;"));
    }
}
