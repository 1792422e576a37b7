//! Defines the permutation table that decorrelates lattice points from their
//! coordinates.
//! This does not use the `rand` crate: the table is fixed data, which keeps
//! every sample reproducible bit-for-bit across runs and platforms.

/// A 256-entry table of pseudo-random bytes, indexed with wraparound.
///
/// Looking a lattice coordinate up through the table (twice, see
/// [`LatticeCell`](crate::cells::LatticeCell)) assigns each lattice point a
/// stable pseudo-random value, which in turn selects its
/// [`CornerGradient`](crate::gradients::CornerGradient).
///
/// The entries do not have to form a bijection of `0..=255` and callers must
/// never assume they do; any 256 bytes make a valid table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationTable([u8; 256]);

impl PermutationTable {
    /// The table published by Ken Perlin, used by virtually every classic
    /// implementation. [`Noise`](crate::Noise) defaults to it, and the
    /// crate's golden fixtures are pinned to it.
    pub const REFERENCE: Self = Self([
        151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30,
        69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94,
        252, 219, 203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171,
        168, 68, 175, 74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60,
        211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1,
        216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86,
        164, 100, 109, 198, 173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118,
        126, 255, 82, 85, 212, 207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170,
        213, 119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39,
        253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34,
        242, 193, 238, 210, 144, 12, 191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49,
        192, 214, 31, 181, 199, 106, 157, 184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254,
        138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
    ]);

    /// Builds a table from arbitrary values.
    pub const fn from_values(values: [u8; 256]) -> Self {
        Self(values)
    }

    /// Looks up `index`, wrapping modulo 256.
    ///
    /// Total over all integers: negative indices wrap via the nonnegative
    /// modulo, so `lookup(-1) == lookup(255)`.
    #[inline]
    pub fn lookup(&self, index: i32) -> u8 {
        self.0[index.rem_euclid(256) as usize]
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::REFERENCE
    }
}
