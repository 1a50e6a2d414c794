use std::{fmt::Debug, hash::Hash, ops::Add};

use crate::multmap::MultMap;

/// a weight label produced by the enumeration: a scalar projection for
/// SO(3), a quanta triple for U(3). Partial weights accumulate by addition
/// down the pattern
pub trait Weight:
    Copy + Debug + Default + Eq + Hash + Add<Output = Self> + Send + Sync + 'static
{
}

impl<T> Weight for T where
    T: Copy + Debug + Default + Eq + Hash + Add<Output = Self> + Send + Sync + 'static
{
}

/// the subgroup chain a U(N) irrep is reduced along. An implementation owns
/// the quanta table for one shell; changing the shell means building a new
/// value (and with it a new base-case table)
pub trait Subgroup {
    type Weight: Weight;

    /// the dimension of the U(N) shell the quanta table was generated for
    fn dim(&self) -> usize;

    /// `k` times the quanta vector of state `i`
    fn shift(&self, i: usize, k: u32) -> Self::Weight;

    /// the number of subgroup irreps with highest weight `w`, recovered from
    /// the weight multiplicities by the Weyl-orbit inclusion-exclusion
    fn level_dimensionality(map: &MultMap<Self::Weight>, w: Self::Weight) -> u32;
}
