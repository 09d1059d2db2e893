use crate::constants::*;
use crate::dom;
use crate::overlay;
use gallery_core::{css, GalleryModel, TileFrame};
use web_sys as web;

/// Elements of one mounted gallery. Tiles are indexed like the catalog.
pub struct GalleryDom {
    pub root: web::Element,
    pub region: web::Element,
    pub gyro_button: web::Element,
    pub tiles: Vec<web::Element>,
    pub overlay: web::Element,
    pub cta: web::Element,
}

impl GalleryDom {
    pub fn build(
        document: &web::Document,
        mount: &web::Element,
        model: &GalleryModel,
    ) -> anyhow::Result<Self> {
        dom::ensure_stylesheet(document)?;

        let root = dom::el(document, "div", ROOT_CLASS)?;
        let backdrop = dom::el(document, "div", BACKDROP_CLASS)?;
        let grain = dom::el(document, "div", GRAIN_CLASS)?;
        dom::set_style(&grain, &format!("background-image:url(\"{}\");", GRAIN_URL));
        dom::append(&backdrop, &grain)?;
        dom::append(&root, &backdrop)?;

        let gyro_button = dom::el(document, "button", GYRO_BUTTON_CLASS)?;
        _ = gyro_button.set_attribute("type", "button");
        _ = gyro_button.set_attribute("aria-label", "Toggle gyroscope");
        gyro_button.set_inner_html(COMPASS_SVG);
        dom::append(&root, &gyro_button)?;

        let region = dom::el(document, "div", REGION_CLASS)?;
        let frames = model.frames();
        let mut tiles = Vec::with_capacity(frames.len());
        for (item, frame) in model.items().iter().zip(frames.iter()) {
            let tile = dom::el(document, "div", TILE_CLASS)?;
            _ = tile.set_attribute(TILE_INDEX_ATTR, &frame.index.to_string());
            dom::append(&tile, &dom::el(document, "div", TILE_SHADE_CLASS)?)?;
            dom::append(&tile, &dom::el(document, "div", TILE_HOVER_SHADE_CLASS)?)?;

            let img = dom::el(document, "img", TILE_IMAGE_CLASS)?;
            _ = img.set_attribute("src", &item.source);
            _ = img.set_attribute("alt", &format!("Gallery image {}", frame.index + 1));
            _ = img.set_attribute("draggable", "false");
            dom::append(&tile, &img)?;

            let label = dom::el(document, "div", TILE_LABEL_CLASS)?;
            let chip = document.create_element("span").map_err(dom::js_err)?;
            chip.set_text_content(Some(item.category.as_str()));
            dom::append(&label, &chip)?;
            dom::append(&tile, &label)?;

            dom::set_style(&tile, &css::tile_style(frame));
            dom::append(&region, &tile)?;
            tiles.push(tile);
        }
        dom::append(&root, &region)?;

        let config = model.config();
        let (overlay, cta) = overlay::build(document, &config.title, &config.cta_label)?;
        dom::append(&root, &overlay)?;

        dom::append(mount, &root)?;
        let gallery = Self {
            root,
            region,
            gyro_button,
            tiles,
            overlay,
            cta,
        };
        gallery.set_gyro(model.state().gyro_enabled());
        Ok(gallery)
    }

    pub fn paint(&self, frames: &[TileFrame], active: Option<usize>, overlay_opacity: f32) {
        for (tile, frame) in self.tiles.iter().zip(frames.iter()) {
            dom::set_style(tile, &css::tile_style(frame));
            _ = tile
                .class_list()
                .toggle_with_force(TILE_ACTIVE_CLASS, active == Some(frame.index));
        }
        overlay::set_opacity(&self.overlay, overlay_opacity);
    }

    pub fn set_gyro(&self, on: bool) {
        _ = self
            .gyro_button
            .class_list()
            .toggle_with_force(GYRO_ON_CLASS, on);
        _ = self
            .gyro_button
            .set_attribute("aria-pressed", if on { "true" } else { "false" });
    }

    pub fn detach(&self) {
        self.root.remove();
    }
}
