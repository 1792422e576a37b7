//! Layers octaves of a [`NoiseFunction`] into a fractal sum (fBm).

use bevy_math::{Vec2, ops};

use crate::{NoiseFunction, table::PermutationTable};

/// The amplitude decay exponent `H` of a fractal sum.
///
/// Each octave's amplitude is the previous one's times `2^(-H)`, so larger
/// values suppress fine detail faster. The conventional `0.5` gives a gain
/// of `1/sqrt(2)` per octave.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Persistence(pub f32);

impl Default for Persistence {
    fn default() -> Self {
        Self(0.5)
    }
}

impl Persistence {
    /// The per-octave amplitude multiplier, `2^(-H)`.
    #[inline]
    pub fn gain(&self) -> f32 {
        ops::exp2(-self.0)
    }
}

/// Repeats an inner [`NoiseFunction`] at geometrically increasing frequency
/// and decreasing amplitude, summing the octaves.
///
/// The sum is raw: octave amplitudes are `1, g, g^2, ...` and nothing
/// normalizes the total, so the magnitude can exceed the inner function's
/// range. Consumers remap with
/// [`SNormToUNorm`](crate::adapters::SNormToUNorm) and quantize from there.
///
/// ```
/// use bevy_math::Vec2;
/// use perlin_field::prelude::*;
///
/// let noise = Noise::from((FractalOctaves::<Perlin>::default(), SNormToUNorm));
/// let unorm: f32 = noise.sample(Vec2::new(1.5, 2.5));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct FractalOctaves<N> {
    /// The [`NoiseFunction`] sampled once per octave.
    pub layer: N,
    /// Amplitude decay per octave.
    pub persistence: Persistence,
    /// Frequency growth per octave. A good default is 2.
    pub lacunarity: f32,
    /// The number of octaves. Zero yields a sum of 0.
    pub octaves: u32,
}

impl<N: Default> Default for FractalOctaves<N> {
    fn default() -> Self {
        Self {
            layer: N::default(),
            persistence: Persistence::default(),
            lacunarity: 2.0,
            octaves: 8,
        }
    }
}

impl<N: NoiseFunction<Vec2, Output = f32>> NoiseFunction<Vec2> for FractalOctaves<N> {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: Vec2, table: &PermutationTable) -> Self::Output {
        let gain = self.persistence.gain();
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut position = input;
        for _ in 0..self.octaves {
            sum += amplitude * self.layer.evaluate(position, table);
            position *= self.lacunarity;
            amplitude *= gain;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{curves::Quintic, perlin::Perlin};

    #[test]
    fn default_gain_is_inverse_sqrt_two() {
        assert!((Persistence::default().gain() - 0.70710677).abs() < 1e-7);
        assert_eq!(Persistence(1.0).gain(), 0.5);
        assert_eq!(Persistence(0.0).gain(), 1.0);
    }

    #[test]
    fn zero_octaves_sum_to_zero() {
        let fbm = FractalOctaves::<Perlin> {
            octaves: 0,
            ..Default::default()
        };
        assert_eq!(
            fbm.evaluate(Vec2::new(3.7, 1.2), &PermutationTable::REFERENCE),
            0.0
        );
    }

    #[test]
    fn one_octave_is_the_inner_function() {
        let table = PermutationTable::REFERENCE;
        let fbm = FractalOctaves::<Perlin> {
            octaves: 1,
            ..Default::default()
        };
        let point = Vec2::new(3.7, 1.2);
        assert_eq!(
            fbm.evaluate(point, &table).to_bits(),
            Perlin::<Quintic>::default().evaluate(point, &table).to_bits()
        );
    }

    #[test]
    fn octaves_follow_the_amplitude_and_frequency_schedule() {
        let table = PermutationTable::REFERENCE;
        let fbm = FractalOctaves::<Perlin> {
            octaves: 3,
            ..Default::default()
        };
        let point = Vec2::new(0.3, 0.7);
        let perlin: Perlin = Perlin::default();
        let gain = Persistence::default().gain();

        let mut expected = 0.0;
        let mut amplitude = 1.0;
        let mut position = point;
        for _ in 0..3 {
            expected += amplitude * perlin.evaluate(position, &table);
            position *= 2.0;
            amplitude *= gain;
        }
        assert_eq!(fbm.evaluate(point, &table).to_bits(), expected.to_bits());
    }
}
