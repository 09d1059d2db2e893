use crate::constants::CONFIG_ATTR_PREFIX;
use crate::dom;
use crate::events::{self, EventWiring, GyroSlot, ListenerSet};
use crate::frame::{self, FrameContext, FrameHandle};
use crate::render::GalleryDom;
use anyhow::anyhow;
use gallery_core::{GalleryConfig, GalleryModel, ATTRIBUTE_KEYS};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Config from the mount element's `data-*` attributes. Unparseable values
/// are logged and skipped.
pub fn config_from_element(mount: &web::Element) -> GalleryConfig {
    let mut config = GalleryConfig::default();
    for (key, value) in dom::config_attributes(mount, ATTRIBUTE_KEYS, CONFIG_ATTR_PREFIX) {
        if let Err(e) = config.apply_attribute(&key, &value) {
            log::warn!("[config] ignoring {}{}: {}", CONFIG_ATTR_PREFIX, key, e);
        }
    }
    config
}

/// One gallery mounted into the page.
///
/// Owns every listener and timer it registered. Unmounting releases them at
/// once and lets the frame loop play the exit before detaching the markup;
/// dropping the view unmounts it.
pub struct GalleryView {
    wiring: EventWiring,
    listeners: ListenerSet,
    auto_animate: Option<Timeout>,
    frame: FrameHandle,
    unmounted: bool,
}

impl GalleryView {
    pub fn mount(mount: &web::Element, config: GalleryConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;

        let model = Rc::new(RefCell::new(GalleryModel::new(config)?));
        let dom = Rc::new(GalleryDom::build(&document, mount, &model.borrow())?);
        let gyro: GyroSlot = Rc::new(RefCell::new(None));
        let wiring = EventWiring {
            window,
            model: model.clone(),
            dom: dom.clone(),
            gyro,
        };
        let listeners = events::wire_all(&wiring);

        let auto_animate = {
            let m = model.borrow();
            m.state().auto_animate_active().then(|| {
                let model = model.clone();
                Timeout::new(m.config().auto_animate_ms, move || {
                    model.borrow_mut().expire_auto_animate();
                })
            })
        };

        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(model, dom)));
        let frame = frame::start_loop(frame_ctx);
        log::info!("[gallery] mounted, {} listeners", listeners.len());

        Ok(Self {
            wiring,
            listeners,
            auto_animate,
            frame,
            unmounted: false,
        })
    }

    pub fn toggle_gyro(&self) -> bool {
        if self.unmounted {
            return self.gyro_enabled();
        }
        events::apply_gyro_toggle(&self.wiring)
    }

    pub fn gyro_enabled(&self) -> bool {
        self.wiring.model.borrow().state().gyro_enabled()
    }

    /// Idempotent.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;
        self.listeners.clear();
        self.wiring.gyro.borrow_mut().take();
        self.auto_animate.take();
        self.wiring.model.borrow_mut().begin_unmount();
        // A stopped loop never sees the exit finish.
        if self.frame.borrow().is_none() {
            self.wiring.dom.detach();
        }
    }
}

impl Drop for GalleryView {
    fn drop(&mut self) {
        self.unmount();
    }
}
