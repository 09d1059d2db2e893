use crate::constants::{
    SPRING_DAMPING, SPRING_MASS_BASE, SPRING_MASS_PER_DEPTH, SPRING_MAX_FRAME_SEC,
    SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_STIFFNESS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: SPRING_DAMPING,
            stiffness: SPRING_STIFFNESS,
            mass: SPRING_MASS_BASE,
        }
    }
}

impl SpringConfig {
    /// Deeper tiles are heavier and trail the pointer more.
    pub fn for_depth(depth: f32) -> Self {
        Self {
            mass: SPRING_MASS_BASE + depth * SPRING_MASS_PER_DEPTH,
            ..Self::default()
        }
    }

    /// ζ = c / (2·sqrt(k·m)); 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Damped second-order filter chasing `target`.
///
/// Integrated with semi-implicit Euler in fixed sub-steps so a long frame
/// does not blow up the oscillator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config: SpringConfig {
                damping: config.damping.max(0.0),
                stiffness: config.stiffness.max(1e-4),
                mass: config.mass.max(1e-4),
            },
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Place the spring at `value` with no motion.
    pub fn jump_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }

    pub fn step(&mut self, dt_sec: f32) -> f32 {
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, SPRING_MAX_FRAME_SEC)
        } else {
            0.0
        };
        if dt <= 0.0 || (self.is_at_rest() && self.value == self.target) {
            return self.value;
        }
        let SpringConfig {
            damping,
            stiffness,
            mass,
        } = self.config;
        let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            let accel = (stiffness * (self.target - self.value) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}
