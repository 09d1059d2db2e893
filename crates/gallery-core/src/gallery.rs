use crate::catalog::GalleryItem;
use crate::config::GalleryConfig;
use crate::easing::CubicBezier;
use crate::error::{GalleryError, Result};
use crate::presence::{Presence, PresencePose};
use crate::signal::{self, PointerKind, Rect, Signals};
use crate::state::{InputMode, InteractionState};
use crate::transform::{self, TileLayout, TileMotion, TileTargets};

/// Everything the DOM needs to paint one tile this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileFrame {
    pub index: usize,
    pub depth: f32,
    pub layout: TileLayout,
    /// Spring-smoothed channels with the presence pose folded in.
    pub motion: TileTargets,
    pub removed: bool,
}

#[derive(Clone, Debug)]
struct TileSlot {
    motion: TileMotion,
    presence: Presence,
}

/// State of one mounted gallery.
///
/// Input handlers are the only writers of [`Signals`]; [`GalleryModel::tick`]
/// reads them once per frame, retargets every spring and advances time.
#[derive(Clone, Debug)]
pub struct GalleryModel {
    config: GalleryConfig,
    signals: Signals,
    state: InteractionState,
    tiles: Vec<TileSlot>,
    ease: CubicBezier,
    elapsed_sec: f32,
    unmounting: bool,
}

impl GalleryModel {
    pub fn new(config: GalleryConfig) -> Result<Self> {
        if config.catalog.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }
        let state = InteractionState::new(config.gyro_enabled, config.starts_auto_animating());
        let signals = Signals::default();
        let tiles = config
            .catalog
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let initial = transform::tile_targets(item, i, &signals, &state);
                let timing = config.presence_timing(i);
                TileSlot {
                    motion: TileMotion::new(item.depth, &initial),
                    presence: if state.auto_animate_active() {
                        Presence::entering(timing)
                    } else {
                        Presence::steady(timing)
                    },
                }
            })
            .collect();
        log::info!(
            "[gallery] {} items, gyro={}, entrance={}",
            config.catalog.len(),
            state.gyro_enabled(),
            state.auto_animate_active()
        );
        Ok(Self {
            config,
            signals,
            state,
            tiles,
            ease: CubicBezier::entrance(),
            elapsed_sec: 0.0,
            unmounting: false,
        })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn items(&self) -> &[GalleryItem] {
        self.config.catalog.items()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn signals(&self) -> Signals {
        self.signals
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tiles.len() {
            Ok(())
        } else {
            Err(GalleryError::IndexOutOfRange {
                index,
                len: self.tiles.len(),
            })
        }
    }

    // ---------------- Input ----------------

    /// Pointer moved inside the region. Ignored in gyro mode. Returns
    /// whether the pointer signal changed.
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32, region: &Rect) -> bool {
        if self.state.input_mode() != InputMode::Pointer {
            return false;
        }
        match signal::pointer_from_client(client_x, client_y, region) {
            Some(p) => {
                self.signals.pointer = p;
                true
            }
            None => false,
        }
    }

    /// Device orientation changed. Ignored in pointer mode or without data.
    pub fn orientation_changed(&mut self, gamma: Option<f64>, beta: Option<f64>) -> bool {
        if self.state.input_mode() != InputMode::Gyro {
            return false;
        }
        match signal::pointer_from_orientation(gamma, beta) {
            Some(p) => {
                self.signals.pointer = p;
                true
            }
            None => false,
        }
    }

    pub fn scrolled(&mut self, scroll_y: f64) {
        self.signals.scroll = signal::scroll_signal(scroll_y);
    }

    pub fn pointer_entered(&mut self) {
        self.state.enter_region();
    }

    pub fn pointer_left(&mut self) {
        self.state.leave_region();
    }

    pub fn tile_clicked(&mut self, index: usize) -> Result<Option<usize>> {
        self.check_index(index)?;
        Ok(self.state.toggle_active(index))
    }

    pub fn tile_hovered(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(i) = index {
            self.check_index(i)?;
        }
        self.state.set_hovered_tile(index);
        Ok(())
    }

    /// `pointerleave` on the region. Ignored for touch so a tap on the active
    /// tile still reaches [`Self::tile_clicked`] with focus intact.
    pub fn region_left(&mut self, kind: PointerKind) -> bool {
        if !kind.leave_ends_hover() {
            return false;
        }
        self.pointer_left();
        true
    }

    /// `pointerleave` on a tile; same touch rule as [`Self::region_left`].
    pub fn tile_left(&mut self, kind: PointerKind) -> bool {
        if !kind.leave_ends_hover() {
            return false;
        }
        self.state.set_hovered_tile(None);
        true
    }

    pub fn toggle_gyro(&mut self) -> bool {
        let on = self.state.toggle_gyro();
        log::info!("[gyro] enabled={}", on);
        on
    }

    /// One-shot end of the entrance window; tiles still entering jump to
    /// steady. Returns `true` only the first time.
    pub fn expire_auto_animate(&mut self) -> bool {
        if !self.state.expire_auto_animate() {
            return false;
        }
        for tile in &mut self.tiles {
            tile.presence.settle();
        }
        log::info!("[gallery] entrance window closed");
        true
    }

    // ---------------- Lifecycle ----------------

    pub fn begin_unmount(&mut self) {
        if self.unmounting {
            return;
        }
        self.unmounting = true;
        for tile in &mut self.tiles {
            tile.presence.begin_exit(&self.ease);
        }
        log::info!("[gallery] unmounting");
    }

    pub fn is_unmounting(&self) -> bool {
        self.unmounting
    }

    /// All tiles finished their exit.
    pub fn is_removed(&self) -> bool {
        self.unmounting && self.tiles.iter().all(|t| t.presence.is_removed())
    }

    // ---------------- Frame ----------------

    /// Unsmoothed targets for every tile from the current signals.
    pub fn targets(&self) -> Vec<TileTargets> {
        self.items()
            .iter()
            .enumerate()
            .map(|(i, item)| transform::tile_targets(item, i, &self.signals, &self.state))
            .collect()
    }

    pub fn tick(&mut self, dt_sec: f32) {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.elapsed_sec += dt;
        let targets = self.targets();
        for (tile, target) in self.tiles.iter_mut().zip(targets.iter()) {
            tile.motion.retarget(target);
            tile.motion.step(dt);
            tile.presence.tick(dt);
        }
    }

    /// Composed frames. Entrance and exit add their offset to the smoothed
    /// `y` and scale the smoothed scale and opacity; steady tiles are orbit
    /// plus springs only.
    pub fn frames(&self) -> Vec<TileFrame> {
        let count = self.tiles.len();
        self.items()
            .iter()
            .zip(self.tiles.iter())
            .enumerate()
            .map(|(i, (item, tile))| {
                let mut motion = tile.motion.current();
                let pose = tile.presence.pose(&self.ease);
                if pose != PresencePose::STEADY {
                    motion.opacity *= pose.opacity;
                    motion.scale *= pose.scale;
                    motion.offset.y += pose.offset_y;
                }
                TileFrame {
                    index: i,
                    depth: item.depth,
                    layout: transform::tile_layout(i, count, item.depth, self.signals.scroll),
                    motion,
                    removed: tile.presence.is_removed(),
                }
            })
            .collect()
    }

    /// Overlay fades in once, after a delay, and stays.
    pub fn overlay_opacity(&self) -> f32 {
        let c = &self.config;
        let t = self.elapsed_sec - c.overlay_delay_sec;
        if c.overlay_duration_sec <= 0.0 {
            return if t >= 0.0 { 1.0 } else { 0.0 };
        }
        (t / c.overlay_duration_sec).clamp(0.0, 1.0)
    }

    /// Nothing left to animate until the next input event.
    pub fn is_idle(&self) -> bool {
        !self.state.auto_animate_active()
            && self.overlay_opacity() >= 1.0
            && self
                .tiles
                .iter()
                .all(|t| t.motion.is_at_rest() && !t.presence.is_animating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled_model() -> GalleryModel {
        let mut config = GalleryConfig::default();
        config.entrance = false;
        GalleryModel::new(config).unwrap()
    }

    #[test]
    fn entrance_starts_hidden_and_resolves() {
        let mut m = GalleryModel::new(GalleryConfig::default()).unwrap();
        let first = m.frames();
        assert!(first.iter().all(|f| f.motion.opacity == 0.0));
        assert!(first.iter().all(|f| (f.motion.offset.y - 100.0).abs() < 1e-4));
        assert!(first.iter().all(|f| (f.motion.scale - 0.5).abs() < 1e-4));
        for _ in 0..(60 * 3) {
            m.tick(1.0 / 60.0);
        }
        let steady = m.frames();
        for (f, item) in steady.iter().zip(m.items()) {
            assert!((f.motion.opacity - transform::base_opacity(item.depth)).abs() < 1e-4);
            assert_eq!(f.motion.offset.y, 0.0);
        }
    }

    #[test]
    fn stagger_reveals_lower_indices_first() {
        let mut m = GalleryModel::new(GalleryConfig::default()).unwrap();
        for _ in 0..30 {
            m.tick(1.0 / 60.0);
        }
        let frames = m.frames();
        assert!(frames[0].motion.opacity > frames[3].motion.opacity);
        assert_eq!(frames[11].motion.opacity, 0.0);
    }

    #[test]
    fn expiring_entrance_settles_tiles() {
        let mut m = GalleryModel::new(GalleryConfig::default()).unwrap();
        m.tick(0.1);
        assert!(m.expire_auto_animate());
        assert!(!m.expire_auto_animate());
        assert!(m.frames().iter().all(|f| f.motion.offset.y == 0.0));
    }

    #[test]
    fn tile_click_validates_index() {
        let mut m = settled_model();
        assert_eq!(m.tile_clicked(2), Ok(Some(2)));
        assert!(m.tile_clicked(99).is_err());
        assert!(m.tile_hovered(Some(12)).is_err());
        assert_eq!(m.state().active_index(), Some(2));
    }

    #[test]
    fn unmount_runs_exit_then_removes() {
        let mut m = settled_model();
        assert!(!m.is_removed());
        m.begin_unmount();
        assert!(!m.is_removed());
        m.tick(0.2);
        assert!(!m.is_removed());
        m.tick(0.25);
        assert!(m.is_removed());
        assert!(m.frames().iter().all(|f| f.removed && f.motion.opacity == 0.0));
    }

    #[test]
    fn overlay_fades_in_after_delay() {
        let mut m = settled_model();
        assert_eq!(m.overlay_opacity(), 0.0);
        m.tick(0.8);
        assert_eq!(m.overlay_opacity(), 0.0);
        m.tick(0.15);
        assert!((m.overlay_opacity() - 0.5).abs() < 1e-3);
        m.tick(1.0);
        assert_eq!(m.overlay_opacity(), 1.0);
    }

    #[test]
    fn settled_gallery_goes_idle() {
        let mut m = settled_model();
        assert!(!m.is_idle());
        for _ in 0..120 {
            m.tick(1.0 / 60.0);
        }
        assert!(m.is_idle());
        m.pointer_entered();
        m.tick(1.0 / 60.0);
        assert!(!m.is_idle());
    }
}
