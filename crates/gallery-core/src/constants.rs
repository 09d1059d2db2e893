// Gallery tuning constants. Every number that shapes the motion lives here
// so the transform and animation code reads as formulas over named quantities.

// Input normalization
pub const SCROLL_SIGNAL_SCALE: f32 = 0.1;
pub const GYRO_GAMMA_RANGE_DEG: f32 = 45.0;
pub const GYRO_BETA_REST_DEG: f32 = 45.0; // phone held at 45° reads as centred
pub const GYRO_BETA_RANGE_DEG: f32 = 45.0;

// Depth bounds for catalog items
pub const DEPTH_MIN: f32 = 0.2;
pub const DEPTH_MAX: f32 = 1.5;

// Orbit layout (percent of container)
pub const ORBIT_BASE_RADIUS_PCT: f32 = 30.0;
pub const ORBIT_DEPTH_RADIUS_PCT: f32 = 20.0;
pub const ORBIT_SCROLL_RATE: f32 = 0.1; // radians per unit of scroll signal

// Parallax and tilt, per unit depth at full pointer deflection
pub const PARALLAX_X_PX: f32 = 200.0;
pub const PARALLAX_Y_PX: f32 = 150.0;
pub const TILT_DEG: f32 = 12.0;

// Scale
pub const HOVER_SCALE_PER_DEPTH: f32 = 0.4;
pub const ACTIVE_SCALE_MULTIPLIER: f32 = 1.2;
pub const TILE_HOVER_SCALE_MULTIPLIER: f32 = 1.05;

// Opacity
pub const OPACITY_BASE: f32 = 0.7;
pub const OPACITY_DEPTH_FALLOFF: f32 = 0.1;
pub const OPACITY_HOVER: f32 = 0.95;
pub const OPACITY_ACTIVE: f32 = 1.0;
pub const OPACITY_DIMMED: f32 = 0.3;

// Depth-of-field blur at rest
pub const BLUR_PER_DEPTH_PX: f32 = 3.0;

// Spring smoothing
pub const SPRING_DAMPING: f32 = 15.0;
pub const SPRING_STIFFNESS: f32 = 150.0;
pub const SPRING_MASS_BASE: f32 = 1.0;
pub const SPRING_MASS_PER_DEPTH: f32 = 0.3;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // tab switches produce huge dt
pub const SPRING_REST_DELTA: f32 = 0.01;
pub const SPRING_REST_SPEED: f32 = 0.01;

// Entrance and exit
pub const AUTO_ANIMATE_MS: u32 = 3000;
pub const ENTRANCE_DURATION_SEC: f32 = 1.2;
pub const ENTRANCE_STAGGER_SEC: f32 = 0.15;
pub const ENTRANCE_OFFSET_Y_PX: f32 = 100.0;
pub const ENTRANCE_START_SCALE: f32 = 0.5;
pub const ENTRANCE_EASE: [f32; 4] = [0.23, 1.0, 0.32, 1.0];
pub const EXIT_DURATION_SEC: f32 = 0.4;

// Overlay fade-in
pub const OVERLAY_FADE_DELAY_SEC: f32 = 0.8;
pub const OVERLAY_FADE_DURATION_SEC: f32 = 0.3;

// Tile layout
pub const TILE_BASE_WIDTH_PCT: f32 = 15.0;
pub const TILE_DEPTH_WIDTH_PCT: f32 = 5.0;
pub const TILE_ASPECT: f32 = 1.2; // height / width
pub const TILE_Z_PER_DEPTH: f32 = 20.0;

// Overlay copy
pub const DEFAULT_TITLE: &str = "fancy.";
pub const DEFAULT_CTA_LABEL: &str = "Download";
