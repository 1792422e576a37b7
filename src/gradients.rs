//! The fixed gradient directions assigned to lattice points.

use bevy_math::Vec2;

/// One of the four diagonal gradient directions.
///
/// This is the coarse 4-direction set of the classic reference
/// implementation, not the canonical 8/12-direction one; it trades some
/// isotropy for a branch-free dot product. A closed enum keeps the set
/// total: every table value selects exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerGradient {
    /// `(1, 1)`
    UpRight,
    /// `(-1, 1)`
    UpLeft,
    /// `(-1, -1)`
    DownLeft,
    /// `(1, -1)`
    DownRight,
}

impl CornerGradient {
    /// Selects a gradient from a permutation table value by `value mod 4`.
    #[inline]
    pub const fn select(value: u8) -> Self {
        match value & 3 {
            0 => Self::UpRight,
            1 => Self::UpLeft,
            2 => Self::DownLeft,
            _ => Self::DownRight,
        }
    }

    /// The direction vector of this gradient.
    #[inline]
    pub const fn vector(self) -> Vec2 {
        match self {
            Self::UpRight => Vec2::new(1.0, 1.0),
            Self::UpLeft => Vec2::new(-1.0, 1.0),
            Self::DownLeft => Vec2::new(-1.0, -1.0),
            Self::DownRight => Vec2::new(1.0, -1.0),
        }
    }

    /// The dot product of this gradient with `offset`.
    ///
    /// Computed as `±offset.x ± offset.y` so each result rounds once,
    /// keeping samples reproducible bit-for-bit.
    #[inline]
    pub fn dot(self, offset: Vec2) -> f32 {
        match self {
            Self::UpRight => offset.x + offset.y,
            Self::UpLeft => offset.y - offset.x,
            Self::DownLeft => -(offset.x + offset.y),
            Self::DownRight => offset.x - offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_cycles_through_all_four() {
        assert_eq!(CornerGradient::select(0), CornerGradient::UpRight);
        assert_eq!(CornerGradient::select(1), CornerGradient::UpLeft);
        assert_eq!(CornerGradient::select(2), CornerGradient::DownLeft);
        assert_eq!(CornerGradient::select(3), CornerGradient::DownRight);
        for value in 0..=u8::MAX {
            assert_eq!(
                CornerGradient::select(value),
                CornerGradient::select(value % 4)
            );
        }
    }

    #[test]
    fn dot_matches_the_direction_vector() {
        let offset = Vec2::new(0.25, -0.75);
        for value in 0..4 {
            let gradient = CornerGradient::select(value);
            assert_eq!(gradient.dot(offset), gradient.vector().dot(offset));
        }
    }
}
