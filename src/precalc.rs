use crate::subgroup::{Subgroup, Weight};

/// the weight contributions of the bottom three pattern rows, tabulated per
/// remaining composition (n2, n1, n0) with at most three particles left.
/// Each leaf is a coefficient triple on the three lowest quanta states; the
/// same matrix serves both subgroup chains because the branching below three
/// states only depends on the counts, not on the quanta themselves
const RECIPES: [((usize, usize, usize), &[[u32; 3]]); 16] = [
    ((3, 0, 0), &[[2, 2, 2]]),
    ((0, 3, 0), &[[1, 1, 1]]),
    ((2, 1, 0), &[[1, 2, 2], [2, 1, 2], [2, 2, 1]]),
    (
        (2, 0, 1),
        &[[0, 2, 2], [1, 1, 2], [1, 2, 1], [2, 0, 2], [2, 1, 1], [2, 2, 0]],
    ),
    ((1, 2, 0), &[[1, 1, 2], [1, 2, 1], [2, 1, 1]]),
    ((0, 2, 1), &[[0, 1, 1], [1, 0, 1], [1, 1, 0]]),
    (
        (1, 0, 2),
        &[[0, 0, 2], [0, 1, 1], [0, 2, 0], [1, 0, 1], [1, 1, 0], [2, 0, 0]],
    ),
    ((0, 1, 2), &[[0, 0, 1], [0, 1, 0], [1, 0, 0]]),
    (
        (1, 1, 1),
        &[
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 1, 1],
            [1, 2, 0],
            [1, 1, 1],
            [2, 0, 1],
            [2, 1, 0],
        ],
    ),
    ((2, 0, 0), &[[0, 2, 2]]),
    ((0, 2, 0), &[[0, 1, 1]]),
    ((1, 1, 0), &[[0, 1, 2], [0, 2, 1]]),
    ((1, 0, 1), &[[0, 0, 2], [0, 2, 0], [0, 1, 1]]),
    ((0, 1, 1), &[[0, 0, 1], [0, 1, 0]]),
    ((1, 0, 0), &[[0, 0, 2]]),
    ((0, 1, 0), &[[0, 0, 1]]),
];

/// collapsed enumeration of the bottom three Gelfand pattern rows. A count
/// of zero means the composition contributes nothing beyond the running
/// partial weight (all remaining particles are zeros)
pub(crate) struct Precalc<W> {
    count: [[[u8; 4]; 4]; 4],
    offset: [[[u16; 4]; 4]; 4],
    pool: Vec<W>,
}

impl<W: Weight> Precalc<W> {
    pub(crate) fn new<G: Subgroup<Weight = W>>(group: &G) -> Self {
        let mut count = [[[0; 4]; 4]; 4];
        let mut offset = [[[0; 4]; 4]; 4];
        let mut pool = Vec::with_capacity(45);
        for ((n2, n1, n0), leaves) in RECIPES {
            count[n2][n1][n0] = leaves.len() as u8;
            offset[n2][n1][n0] = pool.len() as u16;
            for &[c2, c1, c0] in leaves {
                pool.push(
                    group.shift(2, c2) + group.shift(1, c1) + group.shift(0, c0),
                );
            }
        }
        Self { count, offset, pool }
    }

    /// the final-weight contributions of composition (n2, n1, n0)
    pub(crate) fn leaves(&self, n2: u16, n1: u16, n0: u16) -> &[W] {
        let (n2, n1, n0) = (n2 as usize, n1 as usize, n0 as usize);
        let n = self.count[n2][n1][n0] as usize;
        let at = self.offset[n2][n1][n0] as usize;
        &self.pool[at..at + n]
    }
}
