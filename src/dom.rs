use crate::constants::{GALLERY_CSS, STYLE_ELEMENT_ID};
use anyhow::anyhow;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Create `<tag class="...">`.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let e = document.create_element(tag).map_err(js_err)?;
    e.set_class_name(class);
    Ok(e)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

#[inline]
pub fn set_style(e: &web::Element, css: &str) {
    _ = e.set_attribute("style", css);
}

/// Add the gallery stylesheet to `<head>` unless an earlier mount already did.
pub fn ensure_stylesheet(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style").map_err(js_err)?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(GALLERY_CSS));
    let head = document.head().ok_or_else(|| anyhow!("document has no <head>"))?;
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}

/// Read every `data-<key>` attribute the config understands.
pub fn config_attributes(
    mount: &web::Element,
    keys: &[&str],
    prefix: &str,
) -> Vec<(String, String)> {
    keys.iter()
        .filter_map(|key| {
            mount
                .get_attribute(&format!("{}{}", prefix, key))
                .map(|value| (key.to_string(), value))
        })
        .collect()
}
