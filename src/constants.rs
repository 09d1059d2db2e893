// DOM hooks and the stylesheet injected on first mount. Class names are
// shared between the markup builder and GALLERY_CSS.

// Element looked up by the wasm start hook
pub const AUTO_MOUNT_ID: &str = "parallax-gallery";
// <style> element carrying GALLERY_CSS; injected once per document
pub const STYLE_ELEMENT_ID: &str = "parallax-gallery-style";

// Markup classes
pub const ROOT_CLASS: &str = "pg-root";
pub const BACKDROP_CLASS: &str = "pg-backdrop";
pub const GRAIN_CLASS: &str = "pg-grain";
pub const GYRO_BUTTON_CLASS: &str = "pg-gyro";
pub const GYRO_ON_CLASS: &str = "pg-gyro--on";
pub const REGION_CLASS: &str = "pg-region";
pub const TILE_CLASS: &str = "pg-tile";
pub const TILE_SHADE_CLASS: &str = "pg-tile__shade";
pub const TILE_HOVER_SHADE_CLASS: &str = "pg-tile__hover-shade";
pub const TILE_IMAGE_CLASS: &str = "pg-tile__image";
pub const TILE_LABEL_CLASS: &str = "pg-tile__label";
pub const TILE_ACTIVE_CLASS: &str = "pg-tile--active";
pub const OVERLAY_CLASS: &str = "pg-overlay";
pub const TITLE_CLASS: &str = "pg-title";
pub const CTA_CLASS: &str = "pg-cta";

// Data attribute carrying a tile's catalog index
pub const TILE_INDEX_ATTR: &str = "data-index";
// Prefix for configuration attributes on the mount element
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// Noise texture; set inline on the grain layer
pub const GRAIN_URL: &str = "https://grainy-gradients.vercel.app/noise.svg";

// Compass glyph for the gyro toggle
pub const COMPASS_SVG: &str = r#"<svg viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><circle cx="12" cy="12" r="10"/><polygon points="16.24 7.76 14.12 14.12 7.76 16.24 9.88 9.88 16.24 7.76"/></svg>"#;

pub const GALLERY_CSS: &str = r#"
.pg-root { position: relative; min-height: 100vh; background: #030303; display: flex; flex-direction: column; align-items: center; justify-content: center; overflow: hidden; }
.pg-backdrop { position: absolute; inset: 0; background: radial-gradient(circle, #1a1a1a 0%, #0a0a0a 50%, #000 100%); opacity: 0.8; }
.pg-grain { position: absolute; inset: 0; opacity: 0.2; }
.pg-gyro { position: absolute; top: 2rem; right: 2rem; z-index: 50; padding: 0.75rem; border: 0; border-radius: 9999px; background: rgba(255,255,255,0.1); backdrop-filter: blur(16px); color: rgba(255,255,255,0.7); cursor: pointer; transition: transform 0.2s; }
.pg-gyro:hover { transform: scale(1.1); }
.pg-gyro:active { transform: scale(0.9); }
.pg-gyro--on { color: #60a5fa; }
.pg-region { position: relative; width: 100%; max-width: 80rem; aspect-ratio: 16 / 9; margin: 0 auto; padding: 5rem; box-sizing: border-box; }
.pg-tile { position: absolute; border-radius: 1rem; overflow: hidden; cursor: pointer; transform-style: preserve-3d; perspective: 1200px; will-change: transform, opacity, filter; }
.pg-tile__shade { position: absolute; inset: 0; background: linear-gradient(to bottom, transparent, transparent, #000); opacity: 0.4; pointer-events: none; }
.pg-tile__hover-shade { position: absolute; inset: 0; background: linear-gradient(to top, transparent, rgba(0,0,0,0.2), rgba(0,0,0,0.4)); opacity: 0; transition: opacity 0.5s; pointer-events: none; }
.pg-tile:hover .pg-tile__hover-shade { opacity: 0.6; }
.pg-tile__image { width: 100%; height: 100%; object-fit: cover; display: block; }
.pg-tile__label { position: absolute; left: 0; right: 0; bottom: 0; padding: 1rem; color: #fff; font: 500 0.875rem system-ui, sans-serif; opacity: 0; transition: opacity 0.3s; pointer-events: none; }
.pg-tile__label span { background: rgba(0,0,0,0.5); padding: 0.25rem 0.5rem; border-radius: 9999px; backdrop-filter: blur(4px); }
.pg-tile:hover .pg-tile__label, .pg-tile--active .pg-tile__label { opacity: 1; }
.pg-overlay { position: absolute; inset: 0; z-index: 50; display: flex; flex-direction: column; align-items: center; justify-content: center; pointer-events: none; opacity: 0; }
.pg-title { margin: 0 0 2rem; font: italic 700 12rem system-ui, sans-serif; letter-spacing: -0.05em; color: #fff; text-shadow: 0 0 80px rgba(0,0,0,0.8); -webkit-text-stroke: 1px rgba(255,255,255,0.1); }
.pg-cta { pointer-events: auto; padding: 1.25rem 4rem; border: 0; border-radius: 9999px; background: rgba(255,255,255,0.9); color: #000; font: 500 1rem system-ui, sans-serif; cursor: pointer; box-shadow: 0 0 50px rgba(0,0,0,0.3); transition: all 0.5s; }
.pg-cta:hover { background: #fff; transform: translateY(-3px) scale(1.05); box-shadow: 0 0 60px rgba(255,255,255,0.1); }
.pg-cta:active { transform: scale(0.95); }
"#;
