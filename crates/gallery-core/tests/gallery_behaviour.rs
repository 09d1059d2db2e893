// Behavioural tests for the gallery model, driven the way the web layer
// drives it: raw event values in, frames out.

use gallery_core::constants::{DEPTH_MAX, DEPTH_MIN};
use gallery_core::*;

fn model() -> GalleryModel {
    GalleryModel::new(GalleryConfig::default()).unwrap()
}

fn model_with_depths(depths: &[f32]) -> GalleryModel {
    let items = depths
        .iter()
        .enumerate()
        .map(|(i, &d)| GalleryItem::new(format!("img-{i}.jpg"), d, Category::Abstract))
        .collect();
    let mut config = GalleryConfig::with_catalog(Catalog::new(items).unwrap());
    config.entrance = false;
    GalleryModel::new(config).unwrap()
}

#[test]
fn catalog_depths_are_bounded() {
    for item in model().items() {
        assert!(DEPTH_MIN <= item.depth && item.depth <= DEPTH_MAX);
    }
}

#[test]
fn pointer_scenario_800_by_450() {
    let mut m = model_with_depths(&[1.0]);
    let region = Rect::new(40.0, 120.0, 800.0, 450.0);
    assert!(m.pointer_moved(40.0 + 600.0, 120.0 + 225.0, &region));

    let s = m.signals().pointer;
    assert!((s.x - 0.25).abs() < 1e-6);
    assert!(s.y.abs() < 1e-6);

    let t = m.targets()[0];
    assert!((t.offset.x - 50.0).abs() < 1e-4);
    assert!(t.offset.y.abs() < 1e-4);
}

#[test]
fn orbit_scenario_first_of_twelve() {
    let orbit = orbit_position(0, 12, 1.2, 0.0);
    assert!((orbit.x - 54.0).abs() < 1e-4);
    assert!(orbit.y.abs() < 1e-4);
}

#[test]
fn gyro_and_pointer_are_mutually_exclusive() {
    let mut m = model_with_depths(&[0.5, 1.0]);
    let region = Rect::new(0.0, 0.0, 100.0, 100.0);

    assert!(!m.orientation_changed(Some(30.0), Some(60.0)));
    assert!(m.pointer_moved(75.0, 50.0, &region));
    let from_pointer = m.signals().pointer;

    assert!(m.toggle_gyro());
    assert!(!m.pointer_moved(0.0, 0.0, &region));
    assert_eq!(m.signals().pointer, from_pointer);
    assert!(m.orientation_changed(Some(45.0), Some(45.0)));
    assert_eq!(m.signals().pointer, PointerSignal::new(1.0, 0.0));

    assert!(!m.toggle_gyro());
    assert!(!m.orientation_changed(Some(-45.0), Some(0.0)));
    assert_eq!(m.signals().pointer, PointerSignal::new(1.0, 0.0));
}

#[test]
fn gyro_without_orientation_data_keeps_signal() {
    let mut m = model_with_depths(&[0.5]);
    m.toggle_gyro();
    m.orientation_changed(Some(9.0), Some(45.0));
    let before = m.signals();
    assert!(!m.orientation_changed(None, None));
    assert_eq!(m.signals(), before);
}

#[test]
fn click_click_round_trips() {
    let mut m = model();
    m.pointer_entered();
    let before = m.state().clone();
    assert_eq!(m.tile_clicked(5).unwrap(), Some(5));
    assert_eq!(m.tile_clicked(5).unwrap(), None);
    assert_eq!(m.state(), &before);
}

#[test]
fn focus_dims_every_other_tile() {
    let mut m = model();
    m.pointer_entered();
    m.tile_clicked(7).unwrap();
    let targets = m.targets();
    let full: Vec<usize> = targets
        .iter()
        .enumerate()
        .filter(|(_, t)| t.opacity == 1.0)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(full, vec![7]);
    assert!(targets
        .iter()
        .enumerate()
        .all(|(i, t)| i == 7 || t.opacity == 0.3));
}

#[test]
fn clicking_region_background_keeps_focus_until_leave() {
    let mut m = model();
    m.pointer_entered();
    m.tile_clicked(2).unwrap();
    // a move inside the region is not a click and changes nothing
    m.pointer_moved(10.0, 10.0, &Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(m.state().active_index(), Some(2));
    assert!(m.region_left(PointerKind::Mouse));
    assert!(!m.state().is_hovering());
    assert_eq!(m.state().active_index(), None);
}

// Touch delivers enter, leave on lift, then the click for every tap.
fn tap(m: &mut GalleryModel, index: usize) -> Option<usize> {
    m.pointer_entered();
    m.tile_hovered(Some(index)).unwrap();
    m.tile_left(PointerKind::Touch);
    m.region_left(PointerKind::Touch);
    m.tile_clicked(index).unwrap()
}

#[test]
fn tapping_a_tile_twice_clears_focus() {
    let mut m = model();
    assert_eq!(tap(&mut m, 3), Some(3));
    assert_eq!(m.state().active_index(), Some(3));
    assert_eq!(tap(&mut m, 3), None);
    assert_eq!(m.state().active_index(), None);
}

#[test]
fn tapping_another_tile_moves_focus() {
    let mut m = model();
    tap(&mut m, 3);
    assert_eq!(tap(&mut m, 5), Some(5));
    assert_eq!(m.state().hovered_tile(), Some(5));
}

#[test]
fn mouse_leaving_a_tile_clears_tile_hover_only() {
    let mut m = model();
    m.pointer_entered();
    m.tile_hovered(Some(4)).unwrap();
    m.tile_clicked(4).unwrap();
    assert!(m.tile_left(PointerKind::Mouse));
    assert_eq!(m.state().hovered_tile(), None);
    assert!(m.state().is_hovering());
    assert_eq!(m.state().active_index(), Some(4));
}

#[test]
fn auto_animate_flips_once_and_stays_off() {
    let mut m = model();
    assert!(m.state().auto_animate_active());
    let mut flips = 0;
    for frame in 0..400 {
        m.tick(1.0 / 60.0);
        if frame == 180 && m.expire_auto_animate() {
            flips += 1;
        }
        if frame > 180 && m.expire_auto_animate() {
            flips += 1;
        }
    }
    assert_eq!(flips, 1);
    assert!(!m.state().auto_animate_active());
}

#[test]
fn parallax_springs_settle_on_pointer_target() {
    let mut m = model_with_depths(&[1.0, 0.2]);
    let region = Rect::new(0.0, 0.0, 800.0, 450.0);
    m.pointer_entered();
    m.pointer_moved(600.0, 225.0, &region);

    m.tick(1.0 / 60.0);
    let early = m.frames();
    assert!(early[0].motion.offset.x > 0.0 && early[0].motion.offset.x < 50.0);

    for _ in 0..300 {
        m.tick(1.0 / 60.0);
    }
    let settled = m.frames();
    assert!((settled[0].motion.offset.x - 50.0).abs() < 1e-4);
    assert!((settled[1].motion.offset.x - 10.0).abs() < 1e-4);
    assert_eq!(settled[0].motion.blur_px, 0.0);
}

#[test]
fn scroll_turns_the_orbit() {
    let mut m = model_with_depths(&[1.0, 1.0]);
    let before = m.frames()[0].layout;
    m.scrolled(150.0);
    assert!((m.signals().scroll - 15.0).abs() < 1e-5);
    let after = m.frames()[0].layout;
    assert_ne!(before.left_pct, after.left_pct);
    assert_eq!(before.width_pct, after.width_pct);
}

#[test]
fn unmount_is_idempotent() {
    let mut m = model();
    m.tick(2.0);
    m.begin_unmount();
    m.tick(0.1);
    m.begin_unmount();
    for _ in 0..60 {
        m.tick(1.0 / 60.0);
    }
    assert!(m.is_removed());
}

#[test]
fn styles_render_for_every_tile() {
    let m = model();
    for frame in m.frames() {
        let css = css::tile_style(&frame);
        assert!(css.contains("transform:translate3d("));
        assert!(css.contains("filter:blur("));
    }
}
