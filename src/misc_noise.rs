//! Odds and ends of [`NoiseFunction`]s.

use crate::{NoiseFunction, table::PermutationTable};

/// A [`NoiseFunction`] that ignores its input and produces a fixed value.
///
/// Useful as a synthetic layer when testing downstream stages.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Constant(pub f32);

impl<I> NoiseFunction<I> for Constant {
    type Output = f32;

    #[inline]
    fn evaluate(&self, _input: I, _table: &PermutationTable) -> Self::Output {
        self.0
    }
}
