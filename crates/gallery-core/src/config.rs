use crate::catalog::Catalog;
use crate::constants::*;
use crate::error::{GalleryError, Result};
use crate::presence::PresenceTiming;

/// Keys accepted by [`GalleryConfig::apply_attribute`]. The web layer reads
/// each as a `data-<key>` attribute on the mount element.
pub const ATTRIBUTE_KEYS: &[&str] = &[
    "title",
    "cta",
    "gyro",
    "auto-animate-ms",
    "entrance",
    "entrance-duration",
    "stagger",
];

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub catalog: Catalog,
    pub title: String,
    pub cta_label: String,
    pub gyro_enabled: bool,
    /// Play the staggered entrance on mount.
    pub entrance: bool,
    pub auto_animate_ms: u32,
    pub entrance_duration_sec: f32,
    pub entrance_stagger_sec: f32,
    pub exit_duration_sec: f32,
    pub overlay_delay_sec: f32,
    pub overlay_duration_sec: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            title: DEFAULT_TITLE.to_string(),
            cta_label: DEFAULT_CTA_LABEL.to_string(),
            gyro_enabled: false,
            entrance: true,
            auto_animate_ms: AUTO_ANIMATE_MS,
            entrance_duration_sec: ENTRANCE_DURATION_SEC,
            entrance_stagger_sec: ENTRANCE_STAGGER_SEC,
            exit_duration_sec: EXIT_DURATION_SEC,
            overlay_delay_sec: OVERLAY_FADE_DELAY_SEC,
            overlay_duration_sec: OVERLAY_FADE_DURATION_SEC,
        }
    }
}

fn invalid(key: &str, value: &str) -> GalleryError {
    GalleryError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_seconds(key: &str, value: &str, allow_zero: bool) -> Result<f32> {
    let v: f32 = value.trim().parse().map_err(|_| invalid(key, value))?;
    let ok = v.is_finite() && if allow_zero { v >= 0.0 } else { v > 0.0 };
    if ok {
        Ok(v)
    } else {
        Err(invalid(key, value))
    }
}

impl GalleryConfig {
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Override one setting from its string form. Leaves `self` untouched on error.
    pub fn apply_attribute(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "title" => self.title = value.trim().to_string(),
            "cta" => self.cta_label = value.trim().to_string(),
            "gyro" => self.gyro_enabled = parse_flag(key, value)?,
            "entrance" => self.entrance = parse_flag(key, value)?,
            "auto-animate-ms" => {
                self.auto_animate_ms = value.trim().parse().map_err(|_| invalid(key, value))?
            }
            "entrance-duration" => self.entrance_duration_sec = parse_seconds(key, value, false)?,
            "stagger" => self.entrance_stagger_sec = parse_seconds(key, value, true)?,
            _ => return Err(invalid(key, value)),
        }
        log::debug!("[config] {}={}", key, value);
        Ok(())
    }

    /// Timing for item `index`: staggered by position in the catalog.
    pub fn presence_timing(&self, index: usize) -> PresenceTiming {
        PresenceTiming {
            delay_sec: index as f32 * self.entrance_stagger_sec,
            enter_sec: self.entrance_duration_sec,
            exit_sec: self.exit_duration_sec,
        }
    }

    /// The entrance window is open at mount only when there is one to run.
    pub fn starts_auto_animating(&self) -> bool {
        self.entrance && self.auto_animate_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = GalleryConfig::default();
        assert_eq!(c.auto_animate_ms, 3000);
        assert_eq!(c.title, "fancy.");
        assert!(c.starts_auto_animating());
        let t = c.presence_timing(4);
        assert!((t.delay_sec - 0.6).abs() < 1e-6);
        assert_eq!(t.enter_sec, 1.2);
    }

    #[test]
    fn attributes_override_settings() {
        let mut c = GalleryConfig::default();
        c.apply_attribute("title", "  hello ").unwrap();
        c.apply_attribute("gyro", "on").unwrap();
        c.apply_attribute("auto-animate-ms", "1500").unwrap();
        c.apply_attribute("stagger", "0").unwrap();
        assert_eq!(c.title, "hello");
        assert!(c.gyro_enabled);
        assert_eq!(c.auto_animate_ms, 1500);
        assert_eq!(c.entrance_stagger_sec, 0.0);
    }

    #[test]
    fn bad_values_are_rejected_without_side_effects() {
        let mut c = GalleryConfig::default();
        let before = c.clone();
        assert!(c.apply_attribute("gyro", "maybe").is_err());
        assert!(c.apply_attribute("entrance-duration", "0").is_err());
        assert!(c.apply_attribute("stagger", "-1").is_err());
        assert!(c.apply_attribute("auto-animate-ms", "soon").is_err());
        assert_eq!(
            c.apply_attribute("colour", "red"),
            Err(GalleryError::InvalidConfig {
                key: "colour".into(),
                value: "red".into()
            })
        );
        assert_eq!(c, before);
    }

    #[test]
    fn disabling_entrance_closes_window() {
        let mut c = GalleryConfig::default();
        c.apply_attribute("entrance", "false").unwrap();
        assert!(!c.starts_auto_animating());
    }
}
