//! Contains interpolation curves built to work well with gradient noise.

use bevy_math::{
    Curve, WithDerivative,
    curve::{Interval, derivatives::SampleDerivative},
};

/// Linear interpolation.
///
/// Cheap, but its derivative jumps at lattice lines, which shows up as
/// grid-aligned creases in the output. Prefer [`Quintic`] for anything
/// rendered.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Linear;

impl Curve<f32> for Linear {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::EVERYWHERE
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t
    }
}

impl SampleDerivative<f32> for Linear {
    #[inline]
    fn sample_with_derivative_unchecked(&self, t: f32) -> WithDerivative<f32> {
        WithDerivative {
            value: self.sample_unchecked(t),
            derivative: 1.0,
        }
    }
}

/// The quintic blend curve `6t^5 - 15t^4 + 10t^3`.
///
/// Monotonic on `[0, 1]` with `blend(0) = 0`, `blend(0.5) = 0.5` and
/// `blend(1) = 1`, and zero first and second derivative at both endpoints.
/// The C2 endpoints are what remove visible seams where lattice cells meet.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Quintic;

impl Curve<f32> for Quintic {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::UNIT
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }
}

impl SampleDerivative<f32> for Quintic {
    #[inline]
    fn sample_with_derivative_unchecked(&self, t: f32) -> WithDerivative<f32> {
        // 30t^2 (t - 1)^2
        let s = t * (t - 1.0);
        WithDerivative {
            value: self.sample_unchecked(t),
            derivative: 30.0 * s * s,
        }
    }
}
