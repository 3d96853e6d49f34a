use crate::config::{
    StarfieldConfig, STAR_BASE_ALPHA, STAR_DEPTH_MAX, STAR_DEPTH_MIN, STAR_SIZE_MAX,
    STAR_SIZE_MIN, STAR_SPREAD_XY, TWINKLE_SPEED_MAX, TWINKLE_SPEED_MIN,
};
use crate::palette::sample_star_color;
use glam::Vec3;
use rand::Rng;

/// A twinkling point of light drifting slowly toward the viewer.
#[derive(Clone, Debug)]
pub struct StarParticle {
    pub pos: Vec3,
    pub size: f32,
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
    pub color: [f32; 3],
    /// Visible opacity, rewritten every update. Bounded by
    /// `STAR_BASE_ALPHA` times the twinkle amplitude range.
    pub opacity: f32,
}

impl StarParticle {
    pub fn new<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> Self {
        let mut particle = Self {
            pos: Vec3::ZERO,
            size: 0.0,
            twinkle_speed: 0.0,
            twinkle_phase: 0.0,
            color: [0.0; 3],
            opacity: 0.0,
        };
        particle.reset(config, rng);
        particle
    }

    pub fn reset<R: Rng>(&mut self, config: &StarfieldConfig, rng: &mut R) {
        let x = (rng.gen::<f32>() * 2.0 - 1.0) * STAR_SPREAD_XY;
        let y = (rng.gen::<f32>() * 2.0 - 1.0) * STAR_SPREAD_XY;
        let z = STAR_DEPTH_MIN + rng.gen::<f32>() * (STAR_DEPTH_MAX - STAR_DEPTH_MIN);
        self.pos = Vec3::new(x, y, z);
        self.size = STAR_SIZE_MIN + rng.gen::<f32>() * (STAR_SIZE_MAX - STAR_SIZE_MIN);
        self.twinkle_speed =
            TWINKLE_SPEED_MIN + rng.gen::<f32>() * (TWINKLE_SPEED_MAX - TWINKLE_SPEED_MIN);
        self.twinkle_phase = rng.gen::<f32>() * std::f32::consts::TAU;
        self.color = sample_star_color(config, rng);
        self.opacity = 0.0;
    }

    /// Drift forward one tick and recompute the twinkle opacity from the
    /// shared elapsed clock.
    pub fn update<R: Rng>(&mut self, config: &StarfieldConfig, rng: &mut R, elapsed_sec: f32) {
        self.pos.z += config.star_speed;
        if self.pos.z >= config.near_plane_z {
            self.reset(config, rng);
        }
        let twinkle = 0.7 + 0.3 * (elapsed_sec * self.twinkle_speed + self.twinkle_phase).sin();
        self.opacity = STAR_BASE_ALPHA * twinkle;
    }
}
