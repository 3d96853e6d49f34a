use starfield_core::{Starfield, StarfieldConfig, SWAY_X_AMP, SWAY_Y_AMP};

#[test]
fn pools_are_populated_to_the_configured_counts() {
    let field = Starfield::new(StarfieldConfig::default(), 1);
    assert_eq!(field.lines.len(), field.config.line_count);
    assert_eq!(field.stars.len(), field.config.star_count);
}

#[test]
fn initial_line_depths_are_staggered_across_the_range() {
    let field = Starfield::new(StarfieldConfig::default(), 1);
    let far = -field.config.max_distance;
    let span = field.config.max_distance + field.config.near_plane_z;
    for (i, line) in field.lines.iter().enumerate() {
        let expected = far + span * (i as f32 / field.lines.len() as f32);
        assert!(
            (line.z - expected).abs() < 1e-3,
            "line {i} at {} expected {expected}",
            line.z
        );
    }
}

#[test]
fn camera_sway_follows_the_clock() {
    let mut field = Starfield::new(
        StarfieldConfig {
            line_count: 1,
            star_count: 1,
            ..Default::default()
        },
        5,
    );
    for _ in 0..100 {
        field.advance(0.1);
        let sway = field.camera_offset();
        let t = field.elapsed;
        assert!((sway.x - (t * 0.1).sin() * 0.5).abs() < 1e-5);
        assert!((sway.y - (t * 0.15).cos() * 0.3).abs() < 1e-5);
        assert!(sway.x.abs() <= SWAY_X_AMP + 1e-6);
        assert!(sway.y.abs() <= SWAY_Y_AMP + 1e-6);
        assert_eq!(sway.z, 0.0);
    }
}

#[test]
fn negative_dt_does_not_rewind_the_clock() {
    let mut field = Starfield::new(
        StarfieldConfig {
            line_count: 1,
            star_count: 1,
            ..Default::default()
        },
        5,
    );
    field.advance(1.0);
    let elapsed = field.elapsed;
    field.advance(-5.0);
    assert_eq!(field.elapsed, elapsed);
}

#[test]
fn instance_packing_mirrors_particle_state() {
    let mut field = Starfield::new(
        StarfieldConfig {
            line_count: 3,
            star_count: 2,
            ..Default::default()
        },
        9,
    );
    field.advance(0.016);

    let mut lines = Vec::new();
    let mut stars = Vec::new();
    field.write_line_instances(&mut lines);
    field.write_star_instances(&mut stars);
    assert_eq!(lines.len(), 3);
    assert_eq!(stars.len(), 2);

    for (instance, line) in lines.iter().zip(&field.lines) {
        assert_eq!(instance.head, line.head.to_array());
        assert_eq!(instance.tail, line.tail.to_array());
        assert_eq!(instance.thickness, line.thickness);
        assert_eq!(instance.head_color[3], 1.0);
        assert_eq!(instance.tail_color[3], 1.0);
    }
    for (instance, star) in stars.iter().zip(&field.stars) {
        assert_eq!(instance.center, star.pos.to_array());
        assert_eq!(instance.size, star.size);
        // Twinkle opacity travels in the alpha channel.
        assert_eq!(instance.color[3], star.opacity);
    }

    // Scratch buffers are reused: packing twice never grows the output.
    field.write_line_instances(&mut lines);
    assert_eq!(lines.len(), 3);
}
