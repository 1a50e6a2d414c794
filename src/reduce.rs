use std::{error::Error, fmt::Display, sync::Mutex};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    gelfand::GelfandRow, multmap::MultMap, precalc::Precalc, so3::So3,
    subgroup::Subgroup, u3::U3,
};

/// enumeration controls. `spawn_threshold` is the row size above which the
/// parallel path dispatches recursive calls as rayon tasks; lowering it
/// improves load balance at the cost of scheduling overhead
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub parallel: bool,
    pub spawn_threshold: usize,
    pub precalc: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { parallel: true, spawn_threshold: 8, precalc: true }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReduceError {
    DimensionMismatch { want: usize, got: usize },
}

impl Display for ReduceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for ReduceError {}

/// enumerates the Gelfand patterns of a U(N) irrep and accumulates the
/// multiplicities of its weights under the subgroup chain `G`
pub struct Reducer<G: Subgroup> {
    group: G,
    precalc: Option<Precalc<G::Weight>>,
    settings: Settings,
    mult: MultMap<G::Weight>,
}

pub type UnToU3 = Reducer<U3>;
pub type UnToSo3 = Reducer<So3>;

impl<G: Subgroup + Sync> Reducer<G> {
    pub fn new(group: G) -> Self {
        Self::with_settings(group, Settings::default())
    }

    pub fn with_settings(group: G, settings: Settings) -> Self {
        // the base-case recipes reach down to the third quanta state
        let precalc =
            (settings.precalc && group.dim() >= 3).then(|| Precalc::new(&group));
        Self { group, precalc, settings, mult: MultMap::default() }
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    /// enumerate the Gelfand patterns under `row`, rebuilding the
    /// multiplicity map from scratch. A row whose total does not match the
    /// shell dimension is rejected before the previous map is touched
    pub fn reduce(
        &mut self,
        row: GelfandRow,
    ) -> Result<&MultMap<G::Weight>, ReduceError> {
        let (want, got) = (self.group.dim(), row.total());
        if want != got {
            return Err(ReduceError::DimensionMismatch { want, got });
        }
        // the tabulated base cases only cover rows free of threes and fours;
        // reductions never mint either, so any row that starts without them
        // stays without them all the way down
        let cutoff = match self.precalc {
            Some(_) if row.n4 == 0 && row.n3 == 0 => 2,
            _ => 0,
        };
        self.mult = if self.settings.parallel {
            self.reduce_par(row, cutoff)
        } else {
            let mut map = MultMap::default();
            self.descend(row, G::Weight::default(), cutoff, &mut map);
            map
        };
        debug!(
            "reduced {row}: {} patterns over {} weights",
            self.mult.total(),
            self.mult.len()
        );
        Ok(&self.mult)
    }

    /// the multiplicity map filled by the last reduction
    pub fn mult_map(&self) -> &MultMap<G::Weight> {
        &self.mult
    }

    pub fn level_dimensionality(&self, w: G::Weight) -> u32 {
        G::level_dimensionality(&self.mult, w)
    }

    /// the tail-call-eliminated recursion. Each loop iteration recurses into
    /// the non-degenerate reductions of `row` and folds the one remaining
    /// pure drop into the local state, so runs of same-shape rows never grow
    /// the call stack
    fn descend(
        &self,
        row: GelfandRow,
        pp: G::Weight,
        cutoff: usize,
        map: &mut MultMap<G::Weight>,
    ) {
        let mut row = row;
        let mut pp = pp;
        let mut n = row.total() - 1;
        while n > cutoff {
            let (next, k) = row.branch(|child, k| {
                self.descend(child, pp + self.group.shift(n, k), cutoff, map)
            });
            if k > 0 {
                pp = pp + self.group.shift(n, k);
            }
            row = next;
            n -= 1;
        }
        self.emit(row, pp, map);
    }

    /// finish one pattern tail: either fan out the tabulated contributions
    /// of the remaining composition, or close the single forced pattern
    fn emit(&self, row: GelfandRow, pp: G::Weight, map: &mut MultMap<G::Weight>) {
        if let Some(pre) = &self.precalc {
            let leaves = pre.leaves(row.n2, row.n1, row.n0);
            if !leaves.is_empty() {
                for &s in leaves {
                    map.add(pp + s);
                }
                return;
            }
        }
        let t = 4 * row.n4 + 3 * row.n3 + 2 * row.n2 + row.n1;
        map.add(pp + self.group.shift(0, t as u32));
    }

    fn reduce_par(&self, row: GelfandRow, cutoff: usize) -> MultMap<G::Weight> {
        // one slot per pool worker plus one for the calling thread
        let slots: Vec<_> = (0..=rayon::current_num_threads())
            .map(|_| Mutex::new(MultMap::default()))
            .collect();
        rayon::scope(|scope| {
            self.spawn_descend(row, G::Weight::default(), cutoff, scope, &slots)
        });
        let mut map = MultMap::default();
        for slot in slots {
            map.absorb(slot.into_inner().unwrap());
        }
        map
    }

    /// parallel counterpart of `descend`: while the row is large enough,
    /// non-degenerate children become rayon tasks capturing row and partial
    /// weight by value; the rest of the subtree runs inline into the map
    /// slot of the executing worker. A task locks exactly one slot, and no
    /// two tasks on the same worker overlap, so the slots are uncontended
    fn spawn_descend<'s>(
        &'s self,
        row: GelfandRow,
        pp: G::Weight,
        cutoff: usize,
        scope: &rayon::Scope<'s>,
        slots: &'s [Mutex<MultMap<G::Weight>>],
    ) {
        let mut row = row;
        let mut pp = pp;
        let mut n = row.total() - 1;
        let fence = self.settings.spawn_threshold.max(cutoff);
        while n > fence {
            let (next, k) = row.branch(|child, k| {
                let pp = pp + self.group.shift(n, k);
                scope.spawn(move |scope| {
                    self.spawn_descend(child, pp, cutoff, scope, slots)
                });
            });
            if k > 0 {
                pp = pp + self.group.shift(n, k);
            }
            row = next;
            n -= 1;
        }
        let slot = rayon::current_thread_index().unwrap_or(slots.len() - 1);
        let mut map = slots[slot].lock().unwrap();
        self.descend(row, pp, cutoff, &mut map);
    }
}
