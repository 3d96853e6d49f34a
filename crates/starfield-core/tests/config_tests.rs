// Sanity checks on the tuning constants and their relationships.

use starfield_core::config::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(LINE_COUNT > 0);
    assert!(STAR_COUNT > 0);

    assert!(MAX_DISTANCE > 0.0);
    assert!(NEAR_PLANE_Z > 0.0);
    assert!(MAX_DISTANCE > NEAR_PLANE_Z);

    assert!(BASE_LINE_SPEED > 0.0);
    assert!(LINE_SPEED_SPAN >= 0.0);
    assert!(STAR_SPEED > 0.0);

    // Twinkle and dimming factors stay inside the unit interval
    assert!(TAIL_DIM > 0.0 && TAIL_DIM < 1.0);
    assert!(STAR_BASE_ALPHA > 0.0 && STAR_BASE_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn range_constants_are_ordered() {
    assert!(SPAWN_RADIUS_MIN < SPAWN_RADIUS_MAX);
    assert!(LINE_THICKNESS_MIN < LINE_THICKNESS_MAX);
    assert!(LINE_BRIGHTNESS_MIN < LINE_BRIGHTNESS_MAX);
    assert!(STAR_SIZE_MIN < STAR_SIZE_MAX);
    assert!(TWINKLE_SPEED_MIN < TWINKLE_SPEED_MAX);
    assert!(STAR_DEPTH_MIN < STAR_DEPTH_MAX);
    assert!(STAR_DEPTH_MAX < 0.0);

    // Stars spawn beyond the line far plane and drift slower than lines
    assert!(STAR_DEPTH_MIN < -MAX_DISTANCE);
    assert!(STAR_SPEED < BASE_LINE_SPEED);

    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > -STAR_DEPTH_MIN, "stars must fit in the frustum");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn palette_weights_leave_room_for_every_entry() {
    assert!(LINE_PRIMARY_WEIGHT > 0.0);
    assert!(LINE_SECONDARY_WEIGHT > 0.0);
    assert!(LINE_PRIMARY_WEIGHT + LINE_SECONDARY_WEIGHT < 1.0);

    assert!(STAR_WHITE_WEIGHT > 0.0);
    assert!(STAR_PRIMARY_WEIGHT > 0.0);
    assert!(STAR_WHITE_WEIGHT + STAR_PRIMARY_WEIGHT < 1.0);
}

#[test]
fn palette_colors_are_normalized() {
    for color in [PRIMARY_COLOR, SECONDARY_COLOR, WHITE_COLOR] {
        for channel in color {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

#[test]
fn default_config_matches_the_constant_table() {
    let config = StarfieldConfig::default();
    assert_eq!(config.line_count, LINE_COUNT);
    assert_eq!(config.star_count, STAR_COUNT);
    assert_eq!(config.max_distance, MAX_DISTANCE);
    assert_eq!(config.near_plane_z, NEAR_PLANE_Z);
    assert_eq!(config.primary_color, PRIMARY_COLOR);
    assert_eq!(config.secondary_color, SECONDARY_COLOR);
}
