use super::EventWiring;
use crate::input;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(w: &EventWiring) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(4 + w.dom.tiles.len() * 3);
    listeners.push(wire_pointermove(w));
    listeners.push(wire_region_enter(w));
    listeners.push(wire_region_leave(w));
    for (index, tile) in w.dom.tiles.iter().enumerate() {
        listeners.extend(wire_tile(w, index, tile));
    }
    listeners.push(wire_cta(w));
    listeners
}

fn wire_pointermove(w: &EventWiring) -> EventListener {
    let model = w.model.clone();
    let region = w.dom.region.clone();
    EventListener::new(&w.dom.region, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let (x, y) = input::pointer_client(ev);
        let rect = input::region_rect(&region);
        _ = model.borrow_mut().pointer_moved(x, y, &rect);
    })
}

fn wire_region_enter(w: &EventWiring) -> EventListener {
    let model = w.model.clone();
    EventListener::new(&w.dom.region, "pointerenter", move |_| {
        model.borrow_mut().pointer_entered();
    })
}

fn wire_region_leave(w: &EventWiring) -> EventListener {
    let model = w.model.clone();
    EventListener::new(&w.dom.region, "pointerleave", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        _ = model.borrow_mut().region_left(input::pointer_kind(ev));
    })
}

// ---------------- Tiles ----------------

fn wire_tile(w: &EventWiring, index: usize, tile: &web::Element) -> [EventListener; 3] {
    let model = w.model.clone();
    let click = EventListener::new(tile, "click", move |_| {
        match model.borrow_mut().tile_clicked(index) {
            Ok(active) => log::debug!("[input] tile {} clicked, active={:?}", index, active),
            Err(e) => log::warn!("[input] click ignored: {}", e),
        }
    });

    let model = w.model.clone();
    let enter = EventListener::new(tile, "pointerenter", move |_| {
        if let Err(e) = model.borrow_mut().tile_hovered(Some(index)) {
            log::warn!("[input] hover ignored: {}", e);
        }
    });

    let model = w.model.clone();
    let leave = EventListener::new(tile, "pointerleave", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        _ = model.borrow_mut().tile_left(input::pointer_kind(ev));
    });

    [click, enter, leave]
}

fn wire_cta(w: &EventWiring) -> EventListener {
    let label = w.model.borrow().config().cta_label.clone();
    EventListener::new(&w.dom.cta, "click", move |_| {
        log::info!("[gallery] '{}' pressed", label);
    })
}
