#![cfg(target_arch = "wasm32")]
use crate::constants::AUTO_MOUNT_ID;
use anyhow::anyhow;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod view;

thread_local! {
    // Gallery mounted by the start hook; lives for the page.
    static AUTO_MOUNTED: RefCell<Option<view::GalleryView>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    wait_for_dom(&document).await?;

    let Some(mount) = document.get_element_by_id(AUTO_MOUNT_ID) else {
        log::info!("[gallery] no #{} element, waiting for mount()", AUTO_MOUNT_ID);
        return Ok(());
    };
    let gallery = view::GalleryView::mount(&mount, view::config_from_element(&mount))?;
    AUTO_MOUNTED.with(|slot| {
        slot.borrow_mut().replace(gallery);
    });
    Ok(())
}

/// Resolve once the document has been parsed.
async fn wait_for_dom(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let target = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = target.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    JsFuture::from(ready).await.map_err(dom::js_err)?;
    Ok(())
}

/// Handle returned to JavaScript by [`mount`].
#[wasm_bindgen]
pub struct GalleryHandle {
    view: Option<view::GalleryView>,
}

#[wasm_bindgen]
impl GalleryHandle {
    /// Play the exit animation and remove the gallery. Safe to call twice.
    pub fn unmount(&mut self) {
        if let Some(mut gallery) = self.view.take() {
            gallery.unmount();
        }
    }

    #[wasm_bindgen(js_name = toggleGyro)]
    pub fn toggle_gyro(&self) -> bool {
        self.view.as_ref().is_some_and(|g| g.toggle_gyro())
    }

    #[wasm_bindgen(js_name = gyroEnabled)]
    pub fn gyro_enabled(&self) -> bool {
        self.view.as_ref().is_some_and(|g| g.gyro_enabled())
    }
}

/// Mount a gallery into the element with the given id.
#[wasm_bindgen]
pub fn mount(element_id: &str) -> Result<GalleryHandle, JsValue> {
    let document =
        dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", element_id)))?;
    view::GalleryView::mount(&element, view::config_from_element(&element))
        .map(|gallery| GalleryHandle {
            view: Some(gallery),
        })
        .map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })
}
