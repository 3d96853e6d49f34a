use crate::config::{
    StarfieldConfig, LINE_PRIMARY_WEIGHT, LINE_SECONDARY_WEIGHT, STAR_PRIMARY_WEIGHT,
    STAR_WHITE_WEIGHT, WHITE_COLOR,
};
use rand::Rng;

/// Draw a base color for a line particle: primary 60%, secondary 20%,
/// white 20%.
pub fn sample_line_color<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> [f32; 3] {
    let roll = rng.gen::<f32>();
    if roll < LINE_PRIMARY_WEIGHT {
        config.primary_color
    } else if roll < LINE_PRIMARY_WEIGHT + LINE_SECONDARY_WEIGHT {
        config.secondary_color
    } else {
        WHITE_COLOR
    }
}

/// Draw a base color for a star particle: white 70%, primary 20%,
/// secondary 10%.
pub fn sample_star_color<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> [f32; 3] {
    let roll = rng.gen::<f32>();
    if roll < STAR_WHITE_WEIGHT {
        WHITE_COLOR
    } else if roll < STAR_WHITE_WEIGHT + STAR_PRIMARY_WEIGHT {
        config.primary_color
    } else {
        config.secondary_color
    }
}

#[inline]
pub fn scale_color(color: [f32; 3], factor: f32) -> [f32; 3] {
    [color[0] * factor, color[1] * factor, color[2] * factor]
}
