use rustc_hash::FxHashMap;

use crate::subgroup::Weight;

/// weight multiplicities accumulated by one enumeration. Absent keys read as
/// multiplicity zero; present keys are always positive
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultMap<W: Weight> {
    map: FxHashMap<W, u32>,
}

impl<W: Weight> MultMap<W> {
    pub(crate) fn add(&mut self, w: W) {
        *self.map.entry(w).or_insert(0) += 1;
    }

    /// the multiplicity of `w`
    pub fn get(&self, w: &W) -> u32 {
        self.map.get(w).copied().unwrap_or(0)
    }

    /// fold another map into this one by key-wise addition
    pub(crate) fn absorb(&mut self, other: MultMap<W>) {
        for (w, n) in other.map {
            *self.map.entry(w).or_insert(0) += n;
        }
    }

    /// the total weight count, i.e. the number of Gelfand patterns
    /// enumerated
    pub fn total(&self) -> u64 {
        self.map.values().map(|&n| n as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// iterate over (weight, multiplicity) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&W, &u32)> {
        self.map.iter()
    }
}
