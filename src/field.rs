//! Renders a noise pipeline into a dense, terrain-colored grid.

use alloc::vec::Vec;

use bevy_math::{UVec2, Vec2, ops};

use crate::{
    Noise, SampleableFor, adapters::SNormToUNorm, fractal::FractalOctaves, perlin::Perlin,
    table::PermutationTable,
};

/// Values below this are shaded as water.
const WATER_LEVEL: f32 = 0.5;
/// Values at or above this are shaded as peaks.
const PEAK_LEVEL: f32 = 0.9;

/// An 8-bit color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// One cell of a [`FractalField`]: the unorm scalar and its quantized color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// The sampled value, nominally in `[0, 1]`. Deep fractal sums can land
    /// slightly outside; the color quantization clamps, this does not.
    pub value: f32,
    /// The terrain color of [`value`](Self::value).
    pub color: Rgb8,
}

/// A dense row-major grid of [`FieldSample`]s.
///
/// Row-major with `x` fastest: the sample for `(x, y)` lives at
/// `y * width + x`, matching top-to-bottom scanline iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalField {
    size: UVec2,
    samples: Vec<FieldSample>,
}

impl FractalField {
    /// The grid dimensions.
    #[inline]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// The sample at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<&FieldSample> {
        if x < self.size.x && y < self.size.y {
            // widen before multiplying so huge grids can't overflow u32
            self.samples
                .get(y as usize * self.size.x as usize + x as usize)
        } else {
            None
        }
    }

    /// All samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[FieldSample] {
        &self.samples
    }

    /// The number of samples, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Quantizes a unorm value to a terrain color.
///
/// `intensity = round(255 * value)`, then fixed thresholds pick the palette:
/// below [`WATER_LEVEL`] the blue channel carries `intensity * 2`, below
/// [`PEAK_LEVEL`] green dominates with a half-strength blue, and from the
/// peak level up the color is greyscale. Both threshold comparisons are
/// strict `<`, so exactly 0.5 is land and exactly 0.9 is peak.
///
/// The float to integer casts saturate, which clamps the open-ended fractal
/// sum to the 8-bit range; branch selection uses the unclamped value.
pub fn shade(value: f32) -> Rgb8 {
    let intensity = ops::round(255.0 * value);
    if value < WATER_LEVEL {
        Rgb8 {
            r: 0,
            g: 0,
            b: (intensity * 2.0) as u8,
        }
    } else if value < PEAK_LEVEL {
        Rgb8 {
            r: 0,
            g: intensity as u8,
            b: ops::round(intensity * 0.5) as u8,
        }
    } else {
        let level = intensity as u8;
        Rgb8 {
            r: level,
            g: level,
            b: level,
        }
    }
}

/// Samples `noise` at every integer coordinate of a `size` grid and shades
/// each value.
///
/// `noise` is expected to produce unorm values, like
/// [`terrain_noise`] does. The grid is freshly allocated on every call and
/// fully recomputed; callers wanting amortized reuse across frames should
/// hold on to the previous field themselves. Either dimension being zero
/// yields an empty field.
pub fn fractal_field(noise: &impl SampleableFor<Vec2, f32>, size: UVec2) -> FractalField {
    let mut samples = Vec::with_capacity(size.x as usize * size.y as usize);
    for y in 0..size.y {
        for x in 0..size.x {
            let value = noise.sample(Vec2::new(x as f32, y as f32));
            samples.push(FieldSample {
                value,
                color: shade(value),
            });
        }
    }
    FractalField { size, samples }
}

/// The reference terrain pipeline: 8 octaves of quintic-blended perlin noise
/// over the published permutation table, remapped to unorm.
///
/// `base_frequency` is the live control knob; interactive views typically
/// sweep it through `0.001..=0.1`.
pub fn terrain_noise(base_frequency: f32) -> Noise<(FractalOctaves<Perlin>, SNormToUNorm)> {
    debug_assert!(base_frequency.is_finite());
    Noise {
        noise: (FractalOctaves::default(), SNormToUNorm),
        table: PermutationTable::REFERENCE,
        frequency: base_frequency,
    }
}

/// One-call field generation with the reference pipeline, the spec of the
/// original interactive demo: `fractal_field(&terrain_noise(f), size)`.
pub fn terrain_field(size: UVec2, base_frequency: f32) -> FractalField {
    fractal_field(&terrain_noise(base_frequency), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::misc_noise::Constant;

    #[test]
    fn water_land_and_peak_thresholds_are_strict() {
        // exactly 0.5 selects the land branch: round(127.5) = 128
        assert_eq!(shade(0.5), Rgb8 { r: 0, g: 128, b: 64 });
        // just below: water, blue = intensity * 2
        assert_eq!(shade(0.49999997), Rgb8 { r: 0, g: 0, b: 254 });
        // exactly 0.9 selects the peak branch; 255 * 0.9f32 rounds to 229.5
        assert_eq!(shade(0.9), Rgb8 { r: 230, g: 230, b: 230 });
        // just below: land
        assert_eq!(shade(0.89999), Rgb8 { r: 0, g: 229, b: 115 });
    }

    #[test]
    fn quantization_clamps_out_of_range_values() {
        assert_eq!(shade(-0.1), Rgb8 { r: 0, g: 0, b: 0 });
        assert_eq!(shade(0.0), Rgb8 { r: 0, g: 0, b: 0 });
        assert_eq!(shade(1.0), Rgb8 { r: 255, g: 255, b: 255 });
        assert_eq!(shade(1.2), Rgb8 { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn zero_octave_fields_are_mid_grey_land() {
        let mut noise = terrain_noise(0.05);
        noise.noise.0.octaves = 0;
        let field = fractal_field(&noise, UVec2::new(3, 3));
        for sample in field.samples() {
            assert_eq!(sample.value, 0.5);
            assert_eq!(sample.color, Rgb8 { r: 0, g: 128, b: 64 });
        }
    }

    #[test]
    fn constant_pipelines_shade_uniformly() {
        // Constant(0.0) through the snorm remap lands exactly on 0.5.
        let noise = Noise::from((Constant(0.0), SNormToUNorm));
        let field = fractal_field(&noise, UVec2::new(2, 2));
        for sample in field.samples() {
            assert_eq!(sample.color, Rgb8 { r: 0, g: 128, b: 64 });
        }
    }

    #[test]
    fn empty_sizes_yield_empty_fields() {
        assert!(terrain_field(UVec2::new(0, 0), 0.05).is_empty());
        assert!(terrain_field(UVec2::new(0, 5), 0.05).is_empty());
        assert_eq!(terrain_field(UVec2::new(5, 0), 0.05).len(), 0);
    }

    #[test]
    fn grid_is_row_major_with_x_fastest() {
        struct Coord;
        impl SampleableFor<Vec2, f32> for Coord {
            fn sample(&self, loc: Vec2) -> f32 {
                loc.x + loc.y * 100.0
            }
        }

        let field = fractal_field(&Coord, UVec2::new(3, 2));
        assert_eq!(field.len(), 6);
        assert_eq!(field.size(), UVec2::new(3, 2));
        for y in 0..2 {
            for x in 0..3 {
                let expected = x as f32 + y as f32 * 100.0;
                assert_eq!(field.samples()[(y * 3 + x) as usize].value, expected);
                assert_eq!(field.get(x, y).unwrap().value, expected);
            }
        }
        assert!(field.get(3, 0).is_none());
        assert!(field.get(0, 2).is_none());
    }

    #[test]
    fn indexing_widens_before_multiplying() {
        struct Coord;
        impl SampleableFor<Vec2, f32> for Coord {
            fn sample(&self, loc: Vec2) -> f32 {
                loc.x + loc.y * 4096.0
            }
        }

        // index math runs in usize so wide grids address their far cells
        let size = UVec2::new(2048, 512);
        let field = fractal_field(&Coord, size);
        assert_eq!(field.len(), size.x as usize * size.y as usize);
        let far = field.get(size.x - 1, size.y - 1).unwrap();
        assert_eq!(far.value, 2047.0 + 511.0 * 4096.0);
    }

    /// Regression fixture: the exact field the original interactive demo
    /// produces for a 4x4 grid at base frequency 0.05 with the published
    /// permutation table.
    #[test]
    fn golden_four_by_four_field() {
        #[rustfmt::skip]
        let expected: [(f32, [u8; 3]); 16] = [
            (0.500000000, [0, 128, 64]),
            (0.270462513, [0, 0, 138]),
            (0.201102644, [0, 0, 102]),
            (0.213464737, [0, 0, 108]),
            (0.703319907, [0, 179, 90]),
            (0.436742783, [0, 0, 222]),
            (0.307693571, [0, 0, 156]),
            (0.132875293, [0, 0, 68]),
            (0.741070747, [0, 189, 95]),
            (0.505538821, [0, 129, 65]),
            (0.409422576, [0, 0, 208]),
            (0.233176351, [0, 0, 118]),
            (0.792101443, [0, 202, 101]),
            (0.606527686, [0, 155, 78]),
            (0.442735493, [0, 0, 226]),
            (0.316583335, [0, 0, 162]),
        ];

        let field = terrain_field(UVec2::new(4, 4), 0.05);
        assert_eq!(field.len(), expected.len());
        for (sample, (value, [r, g, b])) in field.samples().iter().zip(expected) {
            assert!(
                (sample.value - value).abs() < 1e-5,
                "expected {value}, got {}",
                sample.value
            );
            assert_eq!(sample.color, Rgb8 { r, g, b });
        }
    }
}
