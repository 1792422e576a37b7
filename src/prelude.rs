//! Contains common imports

pub use crate::{
    Noise, NoiseFunction, SampleableFor, ScalableNoise,
    adapters::{SNormToUNorm, UNormToSNorm},
    curves::{Linear, Quintic},
    field::{
        FieldSample, FractalField, Rgb8, fractal_field, shade, terrain_field, terrain_noise,
    },
    fractal::{FractalOctaves, Persistence},
    gradients::CornerGradient,
    misc_noise::Constant,
    perlin::Perlin,
    table::PermutationTable,
};

/// Contains type aliases for common noise types.
/// This reduces some boiler plate and is educational.
pub mod common_noise {
    use super::*;

    /// A [`NoiseFunction`] that produces perlin noise `f32`s between -1 and 1.
    pub type Gradient = Perlin<Quintic>;

    /// Represents traditional fractal brownian motion over perlin noise.
    pub type Fbm = FractalOctaves<Gradient>;

    /// The full terrain pipeline: fractal perlin noise remapped to `[0, 1]`.
    pub type Terrain = (Fbm, SNormToUNorm);
}
