// Shared scene/animation tuning constants used by the core and the web frontend.

// Scene layout
pub const GLOBE_TILT_RAD: f32 = 0.41; // ~23.4 degrees, axial tilt
pub const QUAKE_LIFT: f32 = 1.01; // markers float just above the point cloud
pub const RING_SPIN_RAD_PER_SEC: f32 = -0.03;
pub const NEBULA_SPIN_RAD_PER_SEC: f32 = 0.008;
pub const NEBULA_DISTANCE: f32 = -3.0; // world-space z of the nebula plane

// Camera
pub const CAMERA_FOVY_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_Z_START: f32 = 7.5;
pub const CAMERA_Z_END: f32 = 3.4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Intro sequence (seconds)
pub const INTRO_BACKGROUND_FADE_SEC: f32 = 1.2;
pub const INTRO_GLOBE_DELAY_SEC: f32 = 0.4;
pub const INTRO_GLOBE_FADE_SEC: f32 = 2.0;
pub const INTRO_CAMERA_SEC: f32 = 3.0;
pub const INTRO_RING_DELAY_SEC: f32 = 1.5;
pub const INTRO_RING_SEC: f32 = 2.0;
pub const INTRO_SCATTER_START: f32 = 0.35; // initial outward point offset

// Pulse timing (seconds)
pub const FIRST_PULSE_DELAY_SEC: f32 = 3.5;
pub const PULSE_INTERVAL_MIN_SEC: f32 = 5.0;
pub const PULSE_INTERVAL_MAX_SEC: f32 = 6.0;
pub const PULSE_DURATION_SEC: f32 = 3.0;
pub const PULSE_RING_MAX_RADIUS: f32 = 1.0; // normalized, scaled by sprite size in the shader

// Pertinent selection
pub const PERTINENT_MIN_DOT: f32 = 0.55; // only quakes well inside the visible hemisphere
pub const PERTINENT_POOL: usize = 8; // random pick among the N best-facing quakes

// Marker sizing (pixels at devicePixelRatio 1)
pub const QUAKE_BASE_SIZE_PX: f32 = 6.0;
pub const QUAKE_SIZE_PER_MAG_PX: f32 = 3.0;
pub const BIG_QUAKE_SIZE_PX: f32 = 96.0;

// Device classification
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0; // CSS px
pub const MOBILE_UA_MARKER: &str = "Mobi";
