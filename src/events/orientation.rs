use super::EventWiring;
use crate::input;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Register the deviceorientation listener, or `None` when the platform has
/// no orientation sensor API.
pub fn orientation_listener(w: &EventWiring) -> Option<EventListener> {
    if !input::orientation_supported(&w.window) {
        log::warn!("[gyro] DeviceOrientationEvent unavailable; tilt input disabled");
        return None;
    }
    let model = w.model.clone();
    Some(EventListener::new(&w.window, "deviceorientation", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        let (gamma, beta) = input::orientation_angles(ev);
        _ = model.borrow_mut().orientation_changed(gamma, beta);
    }))
}

/// Flip gyro mode, swap the sensor subscription to match and restyle the
/// toggle. Returns the new mode.
pub fn apply_gyro_toggle(w: &EventWiring) -> bool {
    let on = w.model.borrow_mut().toggle_gyro();
    let listener = if on { orientation_listener(w) } else { None };
    *w.gyro.borrow_mut() = listener;
    w.dom.set_gyro(on);
    on
}

pub(super) fn wire_gyro_button(w: &EventWiring) -> EventListener {
    let wiring = w.clone();
    EventListener::new(&w.dom.gyro_button, "click", move |_| {
        apply_gyro_toggle(&wiring);
    })
}
