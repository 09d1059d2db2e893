use crate::render::GalleryDom;
use gallery_core::GalleryModel;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

/// Pending animation frame of a running loop; `None` once the loop has ended.
pub type FrameHandle = Rc<RefCell<Option<AnimationFrame>>>;

pub struct FrameContext {
    pub model: Rc<RefCell<GalleryModel>>,
    pub dom: Rc<GalleryDom>,
    pub last_instant: Instant,
    // Set once an at-rest frame has been written; cleared by any motion.
    painted_idle: bool,
    painted_scroll: f32,
}

impl FrameContext {
    pub fn new(model: Rc<RefCell<GalleryModel>>, dom: Rc<GalleryDom>) -> Self {
        Self {
            model,
            dom,
            last_instant: Instant::now(),
            painted_idle: false,
            painted_scroll: f32::NAN,
        }
    }

    /// Advance one frame. Returns `false` when the exit animation has
    /// finished and the markup has been detached.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut model = self.model.borrow_mut();
        model.tick(dt_sec);

        if model.is_removed() {
            self.dom.detach();
            log::info!("[frame] exit finished, gallery detached");
            return false;
        }

        // Layout follows scroll directly, so a scroll change repaints even
        // when every spring is at rest.
        let scroll = model.signals().scroll;
        let idle = model.is_idle();
        if idle && self.painted_idle && scroll == self.painted_scroll {
            return true;
        }

        self.dom.paint(
            &model.frames(),
            model.state().active_index(),
            model.overlay_opacity(),
        );
        self.painted_idle = idle;
        self.painted_scroll = scroll;
        true
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameHandle {
    let handle: FrameHandle = Rc::new(RefCell::new(None));
    schedule(frame_ctx, handle.clone());
    handle
}

fn schedule(frame_ctx: Rc<RefCell<FrameContext>>, handle: FrameHandle) {
    let next_handle = handle.clone();
    let frame = request_animation_frame(move |_timestamp| {
        next_handle.borrow_mut().take();
        let running = frame_ctx.borrow_mut().frame();
        if running {
            schedule(frame_ctx, next_handle);
        }
    });
    *handle.borrow_mut() = Some(frame);
}
