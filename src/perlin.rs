//! The single-octave gradient noise evaluator.

use bevy_math::{Curve, Vec2};

use crate::{
    NoiseFunction, cells::LatticeCell, curves::Quintic, gradients::CornerGradient,
    table::PermutationTable,
};

/// Classic 2D perlin noise: gradients at the 4 surrounding lattice points,
/// dotted with the corner-to-point offsets and blended by a [`Curve`] `C`.
///
/// Output is roughly in `(-1, 1)`; the diagonal gradients mean the bound is
/// not tight, and nothing is clamped. Values at integer coordinates are
/// continuous across cell boundaries except at multiples of 255 (see
/// [`cells`](crate::cells)).
///
/// Inputs must be finite; `NaN`/infinite coordinates have no defined result.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Perlin<C = Quintic> {
    /// The blend [`Curve`] weighting the interpolation.
    pub curve: C,
}

impl<C: Curve<f32>> NoiseFunction<Vec2> for Perlin<C> {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: Vec2, table: &PermutationTable) -> Self::Output {
        debug_assert!(input.is_finite(), "perlin noise sampled at {input}");
        let cell = LatticeCell::partition(input);
        cell.interpolate_within(
            table,
            |corner| CornerGradient::select(corner.value).dot(corner.offset),
            &self.curve,
        )
    }
}
