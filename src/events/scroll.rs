use super::EventWiring;
use crate::input;
use gloo::events::EventListener;

/// Track the page scroll offset. The model is seeded with the current offset
/// so a gallery mounted mid-page starts at the right orbit phase.
pub fn wire_scroll(w: &EventWiring) -> EventListener {
    w.model.borrow_mut().scrolled(input::scroll_y(&w.window));
    let model = w.model.clone();
    let window = w.window.clone();
    EventListener::new(&w.window, "scroll", move |_| {
        model.borrow_mut().scrolled(input::scroll_y(&window));
    })
}
