// Shared tuning constants for the starfield backdrop.
//
// Configuration is a fixed in-process table: the values below are immutable
// for the process lifetime and there is no external override mechanism.

// Pool sizes
pub const LINE_COUNT: usize = 200;
pub const STAR_COUNT: usize = 500;

// Depth range along the view axis. Particles (re)spawn at the far plane
// (-MAX_DISTANCE) and are recycled once they reach NEAR_PLANE_Z, ten units
// past the viewer.
pub const MAX_DISTANCE: f32 = 100.0;
pub const NEAR_PLANE_Z: f32 = 10.0;

// Line tuning
pub const BASE_LINE_SPEED: f32 = 1.0;
pub const LINE_SPEED_SPAN: f32 = 0.5;
pub const LINE_LENGTH: f32 = 10.0;
pub const LINE_LENGTH_SPAN: f32 = 20.0;
pub const SPAWN_RADIUS_MIN: f32 = 5.0;
pub const SPAWN_RADIUS_MAX: f32 = 25.0;
pub const OUTWARD_BIAS: f32 = 0.1; // xy drift per unit of forward travel
pub const LINE_THICKNESS_MIN: f32 = 1.0;
pub const LINE_THICKNESS_MAX: f32 = 3.0;
pub const LINE_BRIGHTNESS_MIN: f32 = 0.5;
pub const LINE_BRIGHTNESS_MAX: f32 = 1.0;
pub const TAIL_DIM: f32 = 0.1; // tail endpoint color factor

// Star tuning
pub const STAR_SPEED: f32 = 0.2;
pub const STAR_SPREAD_XY: f32 = 100.0; // x, y in [-spread, spread)
pub const STAR_DEPTH_MIN: f32 = -250.0;
pub const STAR_DEPTH_MAX: f32 = -50.0;
pub const STAR_SIZE_MIN: f32 = 0.5;
pub const STAR_SIZE_MAX: f32 = 2.5;
pub const TWINKLE_SPEED_MIN: f32 = 0.01;
pub const TWINKLE_SPEED_MAX: f32 = 0.03;
pub const STAR_BASE_ALPHA: f32 = 0.6;

// Camera sway applied by the frame driver
pub const SWAY_X_FREQ: f32 = 0.1;
pub const SWAY_X_AMP: f32 = 0.5;
pub const SWAY_Y_FREQ: f32 = 0.15;
pub const SWAY_Y_AMP: f32 = 0.3;

// Camera frustum shared by both frontends
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_3;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 400.0;

// Palette. Line colors: primary 60%, secondary 20%, white 20%.
// Star colors: white 70%, primary 20%, secondary 10%.
pub const PRIMARY_COLOR: [f32; 3] = [0.42, 0.39, 1.0]; // violet accent
pub const SECONDARY_COLOR: [f32; 3] = [0.0, 0.83, 1.0]; // cyan accent
pub const WHITE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LINE_PRIMARY_WEIGHT: f32 = 0.6;
pub const LINE_SECONDARY_WEIGHT: f32 = 0.2;
pub const STAR_WHITE_WEIGHT: f32 = 0.7;
pub const STAR_PRIMARY_WEIGHT: f32 = 0.2;

/// Shared configuration owned by a [`crate::Starfield`] context.
///
/// Populations, speed/length ranges, depth bounds and palette values; fixed
/// at construction and never mutated by any particle.
#[derive(Clone, Debug)]
pub struct StarfieldConfig {
    pub line_count: usize,
    pub star_count: usize,
    pub base_line_speed: f32,
    pub line_speed_span: f32,
    pub line_length: f32,
    pub line_length_span: f32,
    pub star_speed: f32,
    pub max_distance: f32,
    pub near_plane_z: f32,
    pub primary_color: [f32; 3],
    pub secondary_color: [f32; 3],
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            line_count: LINE_COUNT,
            star_count: STAR_COUNT,
            base_line_speed: BASE_LINE_SPEED,
            line_speed_span: LINE_SPEED_SPAN,
            line_length: LINE_LENGTH,
            line_length_span: LINE_LENGTH_SPAN,
            star_speed: STAR_SPEED,
            max_distance: MAX_DISTANCE,
            near_plane_z: NEAR_PLANE_Z,
            primary_color: PRIMARY_COLOR,
            secondary_color: SECONDARY_COLOR,
        }
    }
}
