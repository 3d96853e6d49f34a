use crate::config::{StarfieldConfig, SWAY_X_AMP, SWAY_X_FREQ, SWAY_Y_AMP, SWAY_Y_FREQ};
use crate::line::LineParticle;
use crate::star::StarParticle;
use crate::state::{LineInstance, StarInstance};
use glam::Vec3;
use rand::prelude::*;

/// The starfield context: both particle pools, the shared clock and the
/// seeded RNG, owned by the caller with an explicit lifecycle rather than
/// living in module-level globals.
pub struct Starfield {
    pub config: StarfieldConfig,
    pub lines: Vec<LineParticle>,
    pub stars: Vec<StarParticle>,
    /// Seconds accumulated since construction; feeds twinkle and camera sway.
    pub elapsed: f32,
    rng: StdRng,
}

impl Starfield {
    pub fn new(config: StarfieldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let depth_span = config.near_plane_z + config.max_distance;
        let count = config.line_count.max(1) as f32;
        let mut lines = Vec::with_capacity(config.line_count);
        for i in 0..config.line_count {
            let mut line = LineParticle::new(&config, &mut rng);
            // Stagger initial depths evenly across the far-to-near range so
            // the field is full from the first frame.
            line.place_at_depth(&config, -config.max_distance + depth_span * (i as f32 / count));
            lines.push(line);
        }
        let stars: Vec<StarParticle> = (0..config.star_count)
            .map(|_| StarParticle::new(&config, &mut rng))
            .collect();
        log::info!(
            "[field] lines={} stars={} seed={}",
            lines.len(),
            stars.len(),
            seed
        );
        Self {
            config,
            lines,
            stars,
            elapsed: 0.0,
            rng,
        }
    }

    pub fn from_entropy(config: StarfieldConfig) -> Self {
        Self::new(config, rand::random())
    }

    /// Advance one tick: accumulate the clock, update every line, update
    /// every star. Particle motion is per-tick; `dt` only drives twinkle
    /// and sway, so slow hosts drop frames instead of compensating.
    pub fn advance(&mut self, dt_sec: f32) {
        self.elapsed += dt_sec.max(0.0);
        let config = &self.config;
        let rng = &mut self.rng;
        for line in &mut self.lines {
            line.update(config, rng);
        }
        for star in &mut self.stars {
            star.update(config, rng, self.elapsed);
        }
    }

    /// Small camera oscillation derived from the shared clock.
    pub fn camera_offset(&self) -> Vec3 {
        Vec3::new(
            (self.elapsed * SWAY_X_FREQ).sin() * SWAY_X_AMP,
            (self.elapsed * SWAY_Y_FREQ).cos() * SWAY_Y_AMP,
            0.0,
        )
    }

    /// Pack current line endpoints into GPU instance records.
    pub fn write_line_instances(&self, out: &mut Vec<LineInstance>) {
        out.clear();
        out.extend(self.lines.iter().map(|line| LineInstance {
            head: line.head.to_array(),
            thickness: line.thickness,
            tail: line.tail.to_array(),
            _pad: 0.0,
            head_color: [
                line.head_color[0],
                line.head_color[1],
                line.head_color[2],
                1.0,
            ],
            tail_color: [
                line.tail_color[0],
                line.tail_color[1],
                line.tail_color[2],
                1.0,
            ],
        }));
    }

    /// Pack current star positions and twinkle opacity into GPU instance
    /// records.
    pub fn write_star_instances(&self, out: &mut Vec<StarInstance>) {
        out.clear();
        out.extend(self.stars.iter().map(|star| StarInstance {
            center: star.pos.to_array(),
            size: star.size,
            color: [star.color[0], star.color[1], star.color[2], star.opacity],
        }));
    }
}
