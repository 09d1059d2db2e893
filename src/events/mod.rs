//! Browser event wiring. Every registration returns a gloo `EventListener`
//! guard; dropping the guard removes the listener.

use crate::render::GalleryDom;
use gallery_core::GalleryModel;
use gloo::events::EventListener;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod orientation;
mod pointer;
mod scroll;

pub use orientation::{apply_gyro_toggle, orientation_listener};
pub use pointer::wire_pointer_handlers;
pub use scroll::wire_scroll;

/// Slot for the deviceorientation listener; `None` while gyro mode is off.
pub type GyroSlot = Rc<RefCell<Option<EventListener>>>;

#[derive(Clone)]
pub struct EventWiring {
    pub window: web::Window,
    pub model: Rc<RefCell<GalleryModel>>,
    pub dom: Rc<GalleryDom>,
    pub gyro: GyroSlot,
}

/// Listeners owned by one mounted gallery: three per tile plus six shared
/// ones. Inline capacity covers the default twelve-tile catalog.
#[derive(Default)]
pub struct ListenerSet {
    listeners: SmallVec<[EventListener; 64]>,
}

impl ListenerSet {
    pub fn push(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn extend(&mut self, listeners: impl IntoIterator<Item = EventListener>) {
        self.listeners.extend(listeners);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Unregister everything.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

pub fn wire_all(w: &EventWiring) -> ListenerSet {
    let mut set = ListenerSet::default();
    set.extend(wire_pointer_handlers(w));
    set.push(wire_scroll(w));
    set.push(orientation::wire_gyro_button(w));
    if w.model.borrow().state().gyro_enabled() {
        *w.gyro.borrow_mut() = orientation_listener(w);
    }
    set
}
