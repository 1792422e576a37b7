#![no_std]
#![allow(
    clippy::doc_markdown,
    reason = "These rules should not apply to the readme."
)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod adapters;
pub mod cells;
pub mod curves;
pub mod field;
pub mod fractal;
pub mod gradients;
pub mod misc_noise;
pub mod perlin;
pub mod prelude;
pub mod table;

use bevy_math::Vec2;
use table::PermutationTable;

/// Represents a simple noise function with an input `I` and an output.
///
/// Implementors must be pure: the output is fully determined by `input` and
/// `table`, with no hidden state. `table` is the shared decorrelation source
/// that maps lattice points to gradients.
pub trait NoiseFunction<I> {
    /// The output of the function.
    type Output;

    /// Evaluates the function at `input`.
    fn evaluate(&self, input: I, table: &PermutationTable) -> Self::Output;
}

impl<I, T0: NoiseFunction<I>> NoiseFunction<I> for (T0,) {
    type Output = T0::Output;
    #[inline]
    fn evaluate(&self, input: I, table: &PermutationTable) -> Self::Output {
        self.0.evaluate(input, table)
    }
}

macro_rules! impl_noise_function_tuple {
    ($($l:ident-$t:ident-$i:tt),*) => {
        impl<
            I,
            T0: NoiseFunction<I>,
            $($t: NoiseFunction<$l::Output>,)*
        > NoiseFunction<I> for (T0, $($t,)*)
        {
            type Output = <impl_noise_function_tuple!(last $($t),*)>::Output;

            #[inline]
            fn evaluate(&self, input: I, table: &PermutationTable) -> Self::Output {
                let input = self.0.evaluate(input, table);
                $(let input = self.$i.evaluate(input, table);)*
                input
            }
        }
    };


    (last $f:ident $(,)? ) => {
        $f
    };

    (last $f:ident, $($items:ident),+ $(,)?) => {
        impl_noise_function_tuple!(last $($items),+)
    };
}

#[rustfmt::skip]
mod function_impls {
    use super::*;
    impl_noise_function_tuple!(T0-T1-1);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4, T4-T5-5);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4, T4-T5-5, T5-T6-6);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4, T4-T5-5, T5-T6-6, T6-T7-7);
}

/// Specifies that the scale of this noise is configurable.
///
/// This is the bridge to interactive controls: a UI slider owns the
/// frequency and writes it back between frames.
pub trait ScalableNoise {
    /// Sets the scale of the noise via its frequency.
    fn set_frequency(&mut self, frequency: f32);

    /// Gets the scale of the noise via its frequency.
    fn get_frequency(&self) -> f32;

    /// Sets the scale of the noise via its period.
    fn set_period(&mut self, period: f32) {
        self.set_frequency(1.0 / period);
    }

    /// Gets the scale of the noise via its period.
    fn get_period(&self) -> f32 {
        1.0 / self.get_frequency()
    }
}

/// Indicates that this noise is samplable by type `I` for type `T`.
pub trait SampleableFor<I, T> {
    /// Samples the noise at `loc` for a result of type `T`.
    fn sample(&self, loc: I) -> T;
}

/// This is the standard end interface of a [`NoiseFunction`].
///
/// It owns the [`PermutationTable`] and the base frequency, so a sample is a
/// pure function of this value and the location. There are no process-wide
/// tables or tunables.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Noise<N> {
    /// The [`NoiseFunction`] powering this noise.
    pub noise: N,
    /// The permutation table driving gradient selection.
    pub table: PermutationTable,
    /// The frequency or scale of the [`Noise`].
    pub frequency: f32,
}

impl<N: Default> Default for Noise<N> {
    fn default() -> Self {
        Self {
            noise: N::default(),
            table: PermutationTable::REFERENCE,
            frequency: 1.0,
        }
    }
}

impl<N> From<N> for Noise<N> {
    fn from(value: N) -> Self {
        Self {
            noise: value,
            table: PermutationTable::REFERENCE,
            frequency: 1.0,
        }
    }
}

impl<N> Noise<N> {
    /// Samples the noise at `loc` for a result of type `T`.
    /// This is a convenience over [`SampleableFor`] since it doesn't require `T` to be written in the trait.
    #[inline]
    pub fn sample_for<T>(&self, loc: Vec2) -> T
    where
        Self: SampleableFor<Vec2, T>,
    {
        self.sample(loc)
    }
}

impl<N> ScalableNoise for Noise<N> {
    fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    fn get_frequency(&self) -> f32 {
        self.frequency
    }
}

impl<T, N: NoiseFunction<Vec2, Output: Into<T>>> SampleableFor<Vec2, T> for Noise<N> {
    #[inline]
    fn sample(&self, loc: Vec2) -> T {
        self.noise
            .evaluate(loc * self.frequency, &self.table)
            .into()
    }
}
