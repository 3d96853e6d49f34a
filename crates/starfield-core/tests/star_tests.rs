use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::{StarParticle, StarfieldConfig, STAR_BASE_ALPHA};

#[test]
fn opacity_stays_within_twinkle_bounds() {
    // Property: opacity = 0.6 * (0.7 + 0.3*sin(...)) stays in
    // [0.6*0.4, 0.6*1.0] for every particle and every time value.
    let config = StarfieldConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut star = StarParticle::new(&config, &mut rng);
    for step in 0..5_000 {
        star.update(&config, &mut rng, step as f32 * 0.016);
        assert!(star.opacity >= STAR_BASE_ALPHA * 0.4 - 1e-5);
        assert!(star.opacity <= STAR_BASE_ALPHA + 1e-5);
    }
}

#[test]
fn reset_draws_fields_within_documented_ranges() {
    let config = StarfieldConfig::default();
    let mut rng = StdRng::seed_from_u64(9);
    let mut star = StarParticle::new(&config, &mut rng);
    for _ in 0..1_000 {
        star.reset(&config, &mut rng);
        assert!((-100.0..100.0).contains(&star.pos.x));
        assert!((-100.0..100.0).contains(&star.pos.y));
        assert!((-250.0..-50.0).contains(&star.pos.z));
        assert!((0.5..2.5).contains(&star.size));
        assert!((0.01..0.03).contains(&star.twinkle_speed));
        assert!((0.0..std::f32::consts::TAU).contains(&star.twinkle_phase));
    }
}

#[test]
fn star_recycles_when_it_passes_the_viewer() {
    // A fast drift forces a handful of near-plane crossings.
    let config = StarfieldConfig {
        star_speed: 50.0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(4);
    let mut star = StarParticle::new(&config, &mut rng);
    let mut reseeds = 0;
    let mut prev_z = star.pos.z;
    for step in 0..100 {
        star.update(&config, &mut rng, step as f32 * 0.016);
        assert!(star.pos.z < config.near_plane_z);
        if star.pos.z < prev_z {
            reseeds += 1;
        }
        prev_z = star.pos.z;
    }
    assert!(reseeds > 0, "expected at least one recycle at that speed");
}
