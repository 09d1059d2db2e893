use gallery_core::{PointerKind, Rect};
use wasm_bindgen::JsValue;
use web_sys as web;

// ---------------- Event readers ----------------

#[inline]
pub fn region_rect(region: &web::Element) -> Rect {
    let r = region.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn pointer_kind(ev: &web::PointerEvent) -> PointerKind {
    PointerKind::from_pointer_type(&ev.pointer_type())
}

/// `(gamma, beta)`; either is `None` when the sensor does not report it.
#[inline]
pub fn orientation_angles(ev: &web::DeviceOrientationEvent) -> (Option<f64>, Option<f64>) {
    (ev.gamma(), ev.beta())
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or_else(|e| {
        log::warn!("[input] scrollY unavailable: {:?}", e);
        0.0
    })
}

/// Whether the platform exposes `DeviceOrientationEvent` at all.
pub fn orientation_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("DeviceOrientationEvent")).unwrap_or(false)
}

