use std::{fmt::Display, ops::Add};

use serde::{Deserialize, Serialize};

use crate::{multmap::MultMap, subgroup::Subgroup};

/// a U(3) weight (w_z, w_x, w_y); after enumeration the same triple is read
/// as the irrep labels (f1, f2, f3)
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct U3Weight(pub [u32; 3]);

impl Add for U3Weight {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let Self([a, b, c]) = self;
        let Self([x, y, z]) = rhs;
        Self([a + x, b + y, c + z])
    }
}

impl Display for U3Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self([f1, f2, f3]) = self;
        write!(f, "{f1},{f2},{f3}")
    }
}

/// HO quanta vectors (n_z, n_x, n_y) for one harmonic-oscillator shell,
/// N = (n+1)(n+2)/2 states
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct U3 {
    nz: Vec<u32>,
    nx: Vec<u32>,
    ny: Vec<u32>,
}

impl U3 {
    /// generate the quanta vectors for the nth HO shell. The state ordering
    /// is fixed and observable through the weights: n_z descends from n, and
    /// within each n_z block n_x descends
    pub fn new(n: u32) -> Self {
        let dim = ((n + 1) * (n + 2) / 2) as usize;
        let mut nz = Vec::with_capacity(dim);
        let mut nx = Vec::with_capacity(dim);
        let mut ny = Vec::with_capacity(dim);
        for k in 0..=n {
            for x in (0..=k).rev() {
                nz.push(n - k);
                nx.push(x);
                ny.push(k - x);
            }
        }
        Self { nz, nx, ny }
    }

    /// the quanta triple of state `i`
    pub fn quanta(&self, i: usize) -> [u32; 3] {
        [self.nz[i], self.nx[i], self.ny[i]]
    }
}

impl Subgroup for U3 {
    type Weight = U3Weight;

    fn dim(&self) -> usize {
        self.nz.len()
    }

    fn shift(&self, i: usize, k: u32) -> U3Weight {
        U3Weight([k * self.nz[i], k * self.nx[i], k * self.ny[i]])
    }

    fn level_dimensionality(map: &MultMap<U3Weight>, w: U3Weight) -> u32 {
        let [f1, f2, f3] = w.0.map(|f| f as i64);
        if f1 < f2 || f2 < f3 {
            return 0;
        }
        // probes shifted outside the dominant cone carry no weight
        let m = |a: i64, b: i64, c: i64| -> i64 {
            if a < 0 || b < 0 || c < 0 {
                return 0;
            }
            map.get(&U3Weight([a as u32, b as u32, c as u32])) as i64
        };
        let d = m(f1, f2, f3) + m(f1 + 1, f2 + 1, f3 - 2) + m(f1 + 2, f2 - 1, f3 - 1)
            - m(f1 + 2, f2, f3 - 2)
            - m(f1 + 1, f2 - 1, f3)
            - m(f1, f2 + 1, f3 - 1);
        d.max(0) as u32
    }
}
