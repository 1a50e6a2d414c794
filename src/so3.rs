use crate::{multmap::MultMap, subgroup::Subgroup};

/// angular momentum projections for one l shell, N = 2l+1 states
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct So3 {
    m: Vec<i32>,
}

impl So3 {
    /// generate the projection table -l..=l for orbital angular momentum l
    pub fn new(l: u32) -> Self {
        let l = l as i32;
        Self { m: (-l..=l).collect() }
    }
}

impl Subgroup for So3 {
    type Weight = i32;

    fn dim(&self) -> usize {
        self.m.len()
    }

    fn shift(&self, i: usize, k: u32) -> i32 {
        k as i32 * self.m[i]
    }

    /// D(l) = M[l] - M[l+1]: the surplus of projection l over l+1 counts the
    /// irreps with highest projection l
    fn level_dimensionality(map: &MultMap<i32>, l: i32) -> u32 {
        if l < 0 {
            return 0;
        }
        map.get(&l).saturating_sub(map.get(&(l + 1)))
    }
}
