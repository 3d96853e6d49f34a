use crate::config::{
    StarfieldConfig, LINE_BRIGHTNESS_MAX, LINE_BRIGHTNESS_MIN, LINE_THICKNESS_MAX,
    LINE_THICKNESS_MIN, OUTWARD_BIAS, SPAWN_RADIUS_MAX, SPAWN_RADIUS_MIN, TAIL_DIM,
};
use crate::palette::{sample_line_color, scale_color};
use glam::Vec3;
use rand::Rng;

/// A line segment rushing from the far plane toward the viewer.
///
/// Created once at pool initialization and recycled in place: when the depth
/// coordinate reaches the near-plane threshold the instance is fully
/// re-seeded rather than reallocated.
#[derive(Clone, Debug)]
pub struct LineParticle {
    /// Spawn point on the disc around the view axis, at the far plane.
    pub origin: Vec3,
    /// Travel direction, biased outward from the spawn point (z = 1).
    pub dir: Vec3,
    /// Depth along the view axis; advanced by `speed` every update.
    pub z: f32,
    pub speed: f32,
    pub thickness: f32,
    pub brightness: f32,
    pub length: f32,
    /// Palette color already scaled by brightness.
    pub color: [f32; 3],

    // Endpoints consumed by the rendering backend, refreshed every update.
    pub head: Vec3,
    pub tail: Vec3,
    pub head_color: [f32; 3],
    pub tail_color: [f32; 3],
}

impl LineParticle {
    pub fn new<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> Self {
        let mut particle = Self {
            origin: Vec3::ZERO,
            dir: Vec3::Z,
            z: -config.max_distance,
            speed: 0.0,
            thickness: 0.0,
            brightness: 0.0,
            length: 0.0,
            color: [0.0; 3],
            head: Vec3::ZERO,
            tail: Vec3::ZERO,
            head_color: [0.0; 3],
            tail_color: [0.0; 3],
        };
        particle.reset(config, rng);
        particle
    }

    /// Re-seed every field and send the particle back to the far plane.
    pub fn reset<R: Rng>(&mut self, config: &StarfieldConfig, rng: &mut R) {
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let radius = SPAWN_RADIUS_MIN + rng.gen::<f32>() * (SPAWN_RADIUS_MAX - SPAWN_RADIUS_MIN);
        let x = angle.cos() * radius;
        let y = angle.sin() * radius;
        self.origin = Vec3::new(x, y, -config.max_distance);
        self.dir = Vec3::new(x * OUTWARD_BIAS, y * OUTWARD_BIAS, 1.0);
        self.z = -config.max_distance;
        self.speed = config.base_line_speed + rng.gen::<f32>() * config.line_speed_span;
        self.thickness =
            LINE_THICKNESS_MIN + rng.gen::<f32>() * (LINE_THICKNESS_MAX - LINE_THICKNESS_MIN);
        self.brightness =
            LINE_BRIGHTNESS_MIN + rng.gen::<f32>() * (LINE_BRIGHTNESS_MAX - LINE_BRIGHTNESS_MIN);
        self.length = config.line_length + rng.gen::<f32>() * config.line_length_span;
        self.color = scale_color(sample_line_color(config, rng), self.brightness);
        self.refresh_endpoints(config);
    }

    /// Advance one tick and refresh the drawable endpoints.
    ///
    /// Motion is per-tick, not per-second: the host clock drives redraw
    /// cadence and slow frames are simply dropped.
    pub fn update<R: Rng>(&mut self, config: &StarfieldConfig, rng: &mut R) {
        self.z += self.speed;
        if self.z >= config.near_plane_z {
            self.reset(config, rng);
            return;
        }
        self.refresh_endpoints(config);
    }

    /// Move to an explicit depth; used to stagger pool initialization.
    pub fn place_at_depth(&mut self, config: &StarfieldConfig, z: f32) {
        self.z = z;
        self.refresh_endpoints(config);
    }

    fn refresh_endpoints(&mut self, config: &StarfieldConfig) {
        let travel = self.z + config.max_distance;
        self.head = self.origin + self.dir * travel;
        self.tail = self.origin + self.dir * (travel - self.length);
        // The head brightens over the first half of its flight; the tail
        // stays dim, producing a motion-blurred gradient.
        let progress = (self.z + config.max_distance) / config.max_distance;
        self.head_color = scale_color(self.color, (progress * 2.0).min(1.0));
        self.tail_color = scale_color(self.color, TAIL_DIM);
    }
}
