//! Divides the sample domain into lattice cells and interpolates within them.

use bevy_math::{Curve, IVec2, Vec2};

use crate::table::PermutationTable;

/// Wrap modulus for lattice coordinates before table lookup.
///
/// The reference implementation reduces coordinates modulo 255 while the
/// table has 256 entries. The mismatch is kept for output compatibility; it
/// makes the field seam at multiples of 255 (left and right neighbors of
/// such a line disagree on their shared corners).
const LATTICE_WRAP: i32 = 255;

/// The grid cell containing a query point.
///
/// Derived from the point on every evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeCell {
    /// The least corner of the cell, `(floor(x), floor(y))`.
    pub floored: IVec2,
    /// The fractional offset from [`floored`](Self::floored) to the query
    /// point, each component in `[0, 1)`.
    pub offset: Vec2,
}

/// One corner of a [`LatticeCell`], as seen from the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCorner {
    /// The permutation-derived value of this corner, `P[P[X + dx] + Y + dy]`.
    pub value: u8,
    /// The offset from this corner to the query point.
    pub offset: Vec2,
}

impl LatticeCell {
    /// Locates the cell containing `point`.
    #[inline]
    pub fn partition(point: Vec2) -> Self {
        let floor = point.floor();
        Self {
            floored: floor.as_ivec2(),
            offset: point - floor,
        }
    }

    #[inline]
    fn corner(&self, table: &PermutationTable, towards: IVec2) -> CellCorner {
        let x = self.floored.x.rem_euclid(LATTICE_WRAP);
        let y = self.floored.y.rem_euclid(LATTICE_WRAP);
        CellCorner {
            value: table.lookup(i32::from(table.lookup(x + towards.x)) + y + towards.y),
            offset: self.offset - towards.as_vec2(),
        }
    }

    /// Maps `f` over the 4 corners: down-left, up-left, down-right, up-right.
    #[inline]
    pub fn corners_map<T>(
        &self,
        table: &PermutationTable,
        mut f: impl FnMut(CellCorner) -> T,
    ) -> [T; 4] {
        [
            f(self.corner(table, IVec2::new(0, 0))),
            f(self.corner(table, IVec2::new(0, 1))),
            f(self.corner(table, IVec2::new(1, 0))),
            f(self.corner(table, IVec2::new(1, 1))),
        ]
    }

    /// Interpolates the values `f` produces at the corners, blending first
    /// vertically then horizontally according to `curve`.
    #[inline]
    pub fn interpolate_within(
        &self,
        table: &PermutationTable,
        f: impl FnMut(CellCorner) -> f32,
        curve: &impl Curve<f32>,
    ) -> f32 {
        // corner influences
        let [ld, lu, rd, ru] = self.corners_map(table, f);
        let u = curve.sample_unchecked(self.offset.x);
        let v = curve.sample_unchecked(self.offset.y);

        // lerp
        let l = lerp(v, ld, lu);
        let r = lerp(v, rd, ru);
        lerp(u, l, r)
    }
}

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}
