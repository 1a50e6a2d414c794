use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// one Gelfand pattern row, stored as its number of fours, threes, twos,
/// ones, and zeros. The row never records the labels themselves: with the
/// label alphabet capped at four, the five counts are the whole state
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct GelfandRow {
    pub n4: u16,
    pub n3: u16,
    pub n2: u16,
    pub n1: u16,
    pub n0: u16,
}

impl GelfandRow {
    pub fn new(n4: u16, n3: u16, n2: u16, n1: u16, n0: u16) -> Self {
        Self { n4, n3, n2, n1, n0 }
    }

    /// the number of U(N) states the row spans
    pub fn total(&self) -> usize {
        self.n4 as usize
            + self.n3 as usize
            + self.n2 as usize
            + self.n1 as usize
            + self.n0 as usize
    }

    /// the Young diagram row lengths, weakly decreasing
    pub fn labels(&self) -> Vec<u32> {
        let mut f = Vec::with_capacity(self.total());
        let Self { n4, n3, n2, n1, n0 } = *self;
        for (count, label) in [(n4, 4), (n3, 3), (n2, 2), (n1, 1), (n0, 0)] {
            f.extend(std::iter::repeat(label).take(count as usize));
        }
        f
    }

    /// visit every lower row reachable by a non-degenerate reduction of
    /// `self`, along with its quanta multiplier, and return the one remaining
    /// degenerate drop for the caller to fold into its loop state. The drop
    /// is always the pure reduction of the lowest nonzero group, so exactly
    /// one is returned for any nonempty row
    pub(crate) fn branch<F>(self, mut child: F) -> (GelfandRow, u32)
    where
        F: FnMut(GelfandRow, u32),
    {
        let Self { n4, n3, n2, n1, n0 } = self;
        let mut next = self;
        let mut mult = 0;
        if n4 > 0 {
            if n3 > 0 || n2 > 0 || n1 > 0 || n0 > 0 {
                child(Self { n4: n4 - 1, ..self }, 4);
                if n2 > 0 {
                    child(Self { n4: n4 - 1, n3: n3 + 1, n2: n2 - 1, ..self }, 3);
                    if n0 > 0 {
                        child(
                            Self {
                                n4: n4 - 1,
                                n3: n3 + 1,
                                n2: n2 - 1,
                                n1: n1 + 1,
                                n0: n0 - 1,
                            },
                            2,
                        );
                    }
                }
                if n1 > 0 {
                    child(Self { n4: n4 - 1, n3: n3 + 1, n1: n1 - 1, ..self }, 2);
                    child(Self { n4: n4 - 1, n2: n2 + 1, n1: n1 - 1, ..self }, 3);
                }
                if n0 > 0 {
                    child(Self { n4: n4 - 1, n3: n3 + 1, n0: n0 - 1, ..self }, 1);
                    child(Self { n4: n4 - 1, n2: n2 + 1, n0: n0 - 1, ..self }, 2);
                    child(Self { n4: n4 - 1, n1: n1 + 1, n0: n0 - 1, ..self }, 3);
                }
            } else {
                next = Self { n4: n4 - 1, ..self };
                mult = 4;
            }
        }
        if n3 > 0 {
            if n2 > 0 || n1 > 0 || n0 > 0 {
                child(Self { n3: n3 - 1, ..self }, 3);
                if n1 > 0 {
                    child(Self { n3: n3 - 1, n2: n2 + 1, n1: n1 - 1, ..self }, 2);
                }
                if n0 > 0 {
                    child(Self { n3: n3 - 1, n2: n2 + 1, n0: n0 - 1, ..self }, 1);
                    child(Self { n3: n3 - 1, n1: n1 + 1, n0: n0 - 1, ..self }, 2);
                }
            } else {
                next = Self { n3: n3 - 1, ..self };
                mult = 3;
            }
        }
        if n2 > 0 {
            if n1 > 0 || n0 > 0 {
                child(Self { n2: n2 - 1, ..self }, 2);
                if n0 > 0 {
                    child(Self { n2: n2 - 1, n1: n1 + 1, n0: n0 - 1, ..self }, 1);
                }
            } else {
                next = Self { n2: n2 - 1, ..self };
                mult = 2;
            }
        }
        if n1 > 0 {
            if n0 > 0 {
                child(Self { n1: n1 - 1, ..self }, 1);
            } else {
                next = Self { n1: n1 - 1, ..self };
                mult = 1;
            }
        }
        if n0 > 0 {
            next = Self { n0: n0 - 1, ..self };
            mult = 0;
        }
        (next, mult)
    }
}

impl Display for GelfandRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { n4, n3, n2, n1, n0 } = self;
        write!(f, "({n4}, {n3}, {n2}, {n1}, {n0})")
    }
}
