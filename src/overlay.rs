use crate::constants::{CTA_CLASS, OVERLAY_CLASS, TITLE_CLASS};
use crate::dom;
use web_sys as web;

/// Title and call-to-action layered over the gallery. The container ignores
/// pointer events so tiles underneath stay interactive; only the button
/// takes clicks.
pub fn build(
    document: &web::Document,
    title: &str,
    cta_label: &str,
) -> anyhow::Result<(web::Element, web::Element)> {
    let overlay = dom::el(document, "div", OVERLAY_CLASS)?;
    let heading = dom::el(document, "h1", TITLE_CLASS)?;
    heading.set_text_content(Some(title));
    dom::append(&overlay, &heading)?;

    let cta = dom::el(document, "button", CTA_CLASS)?;
    _ = cta.set_attribute("type", "button");
    cta.set_text_content(Some(cta_label));
    dom::append(&overlay, &cta)?;
    Ok((overlay, cta))
}

#[inline]
pub fn set_opacity(overlay: &web::Element, opacity: f32) {
    dom::set_style(overlay, &format!("opacity:{:.3};", opacity.clamp(0.0, 1.0)));
}

