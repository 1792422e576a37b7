//! Contains common adaptive [`NoiseFunction`]s for remapping value ranges.

use bevy_math::Vec2;

use crate::NoiseFunction;

/// Maps values from (-1, 1) to (0, 1).
///
/// This is the `(n + 1) * 0.5` remap the fractal compositor applies before
/// quantizing. The input is not clamped, so out-of-range fractal sums stay
/// out of range here too.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SNormToUNorm;

/// Maps values from (0, 1) to (-1, 1).
#[derive(Debug, Default, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct UNormToSNorm;

macro_rules! impl_vector_spaces {
    ($n:ty, $half:expr, $two:expr) => {
        impl NoiseFunction<$n> for SNormToUNorm {
            type Output = $n;

            #[inline]
            fn evaluate(
                &self,
                input: $n,
                _table: &crate::table::PermutationTable,
            ) -> Self::Output {
                input * $half + $half
            }
        }

        impl NoiseFunction<$n> for UNormToSNorm {
            type Output = $n;

            #[inline]
            fn evaluate(
                &self,
                input: $n,
                _table: &crate::table::PermutationTable,
            ) -> Self::Output {
                (input - $half) * $two
            }
        }
    };
}

impl_vector_spaces!(f32, 0.5, 2.0);
impl_vector_spaces!(Vec2, Vec2::splat(0.5), Vec2::splat(2.0));
