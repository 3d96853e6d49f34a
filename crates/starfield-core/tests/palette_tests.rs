use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::{sample_line_color, sample_star_color, scale_color, StarfieldConfig, WHITE_COLOR};

#[test]
fn line_palette_converges_to_60_20_20() {
    // Property: over N >= 10,000 draws the weighted shares converge to the
    // documented 60/20/20 split within two percentage points.
    let config = StarfieldConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let n = 10_000;
    let (mut primary, mut secondary, mut white) = (0usize, 0usize, 0usize);
    for _ in 0..n {
        let color = sample_line_color(&config, &mut rng);
        if color == config.primary_color {
            primary += 1;
        } else if color == config.secondary_color {
            secondary += 1;
        } else if color == WHITE_COLOR {
            white += 1;
        } else {
            panic!("color outside the palette: {color:?}");
        }
    }
    let share = |count: usize| count as f32 / n as f32;
    assert!((share(primary) - 0.6).abs() < 0.02, "primary {}", share(primary));
    assert!((share(secondary) - 0.2).abs() < 0.02, "secondary {}", share(secondary));
    assert!((share(white) - 0.2).abs() < 0.02, "white {}", share(white));
}

#[test]
fn star_palette_converges_to_70_20_10() {
    let config = StarfieldConfig::default();
    let mut rng = StdRng::seed_from_u64(17);
    let n = 10_000;
    let (mut white, mut primary, mut secondary) = (0usize, 0usize, 0usize);
    for _ in 0..n {
        let color = sample_star_color(&config, &mut rng);
        if color == WHITE_COLOR {
            white += 1;
        } else if color == config.primary_color {
            primary += 1;
        } else {
            secondary += 1;
        }
    }
    let share = |count: usize| count as f32 / n as f32;
    assert!((share(white) - 0.7).abs() < 0.02);
    assert!((share(primary) - 0.2).abs() < 0.02);
    assert!((share(secondary) - 0.1).abs() < 0.02);
}

#[test]
fn scale_color_is_componentwise() {
    let scaled = scale_color([0.2, 0.4, 1.0], 0.5);
    assert_eq!(scaled, [0.1, 0.2, 0.5]);
    assert_eq!(scale_color(WHITE_COLOR, 0.0), [0.0, 0.0, 0.0]);
}
