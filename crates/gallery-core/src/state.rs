//! Interaction state mutated by user input and the auto-animate timer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Gyro,
}

/// Hover, focus and mode flags for one mounted gallery.
///
/// Fields are private so the pairing rules hold: leaving the region clears
/// hover and focus together, `active_index` toggles, and the auto-animate
/// flag only ever goes from `true` to `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionState {
    is_hovering: bool,
    active_index: Option<usize>,
    hovered_tile: Option<usize>,
    gyro_enabled: bool,
    auto_animate_active: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(false, true)
    }
}

impl InteractionState {
    pub fn new(gyro_enabled: bool, auto_animate_active: bool) -> Self {
        Self {
            is_hovering: false,
            active_index: None,
            hovered_tile: None,
            gyro_enabled,
            auto_animate_active,
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn hovered_tile(&self) -> Option<usize> {
        self.hovered_tile
    }

    pub fn gyro_enabled(&self) -> bool {
        self.gyro_enabled
    }

    pub fn auto_animate_active(&self) -> bool {
        self.auto_animate_active
    }

    pub fn input_mode(&self) -> InputMode {
        if self.gyro_enabled {
            InputMode::Gyro
        } else {
            InputMode::Pointer
        }
    }

    pub fn enter_region(&mut self) {
        self.is_hovering = true;
    }

    pub fn leave_region(&mut self) {
        self.is_hovering = false;
        self.active_index = None;
        self.hovered_tile = None;
    }

    /// Clicking the active item clears focus; clicking any other focuses it.
    /// Returns the new active index.
    pub fn toggle_active(&mut self, index: usize) -> Option<usize> {
        self.active_index = if self.active_index == Some(index) {
            None
        } else {
            Some(index)
        };
        self.active_index
    }

    pub fn set_hovered_tile(&mut self, index: Option<usize>) {
        self.hovered_tile = index;
    }

    /// Returns the new gyro flag.
    pub fn toggle_gyro(&mut self) -> bool {
        self.gyro_enabled = !self.gyro_enabled;
        self.gyro_enabled
    }

    /// Ends the entrance window. Returns `true` only on the call that
    /// actually flipped the flag.
    pub fn expire_auto_animate(&mut self) -> bool {
        std::mem::replace(&mut self.auto_animate_active, false)
    }
}
