//! Centralized backdrop palette & helpers.
//! Single source of truth for particle + grid colors.

use bevy::prelude::*;

/// Neon-blue particle palette. The second half repeats the base hues at
/// reduced alpha so some particles read as softer glows. Update here only.
pub const PARTICLE_COLORS: [Color; 8] = [
    Color::srgb(0.310, 0.675, 0.996), // sky
    Color::srgb(0.000, 0.949, 0.996), // cyan
    Color::srgb(0.000, 0.824, 1.000), // azure
    Color::srgb(0.039, 0.518, 1.000), // cobalt
    Color::srgba(0.310, 0.675, 0.996, 0.8),
    Color::srgba(0.000, 0.949, 0.996, 0.8),
    Color::srgba(0.000, 0.824, 1.000, 0.8),
    Color::srgba(0.039, 0.518, 1.000, 0.8),
];

/// Faint grid line color.
pub const GRID_COLOR: Color = Color::srgba(0.310, 0.675, 0.996, 0.12);

/// Returns a particle color for arbitrary index, wrapping around the palette.
#[inline]
pub fn color_for_index(i: usize) -> Color {
    PARTICLE_COLORS[i % PARTICLE_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_behavior() {
        assert_eq!(color_for_index(0), PARTICLE_COLORS[0]);
        assert_eq!(color_for_index(8), PARTICLE_COLORS[0]); // wrap
        assert_eq!(color_for_index(9), PARTICLE_COLORS[1]);
    }

    #[test]
    fn all_colors_distinct_enough() {
        // No two entries exactly identical (protect against accidental duplicates)
        for (i, c1) in PARTICLE_COLORS.iter().enumerate() {
            for (j, c2) in PARTICLE_COLORS.iter().enumerate() {
                if i == j {
                    continue;
                }
                assert!(c1 != c2, "Palette contains duplicate colors at {i} and {j}");
            }
        }
    }
}
