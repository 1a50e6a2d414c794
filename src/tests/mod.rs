use crate::{
    dim::{so3_dim, weyl_dim},
    GelfandRow, Settings, So3, UnToSo3, UnToU3, U3,
};

mod so3;

pub(crate) const SERIAL: Settings =
    Settings { parallel: false, spawn_threshold: 8, precalc: true };

/// run one SO(3) reduction and check the pattern-count and dimension-sum
/// laws against the analytic U(N) dimension
pub(crate) fn check_so3(l: u32, row: GelfandRow, settings: Settings) -> UnToSo3 {
    let mut gen = UnToSo3::with_settings(So3::new(l), settings);
    gen.reduce(row).unwrap();
    let want = weyl_dim(&row.labels());
    assert_eq!(gen.mult_map().total(), want, "pattern count for {row}");
    let mut sum = 0;
    for (&m, _) in gen.mult_map().iter() {
        let d = gen.level_dimensionality(m);
        if d > 0 {
            sum += d as u64 * so3_dim(m);
        }
    }
    assert_eq!(sum, want, "dimension sum for {row}");
    gen
}

/// U(3) counterpart of `check_so3`
pub(crate) fn check_u3(n: u32, row: GelfandRow, settings: Settings) -> UnToU3 {
    let mut gen = UnToU3::with_settings(U3::new(n), settings);
    gen.reduce(row).unwrap();
    let want = weyl_dim(&row.labels());
    assert_eq!(gen.mult_map().total(), want, "pattern count for {row}");
    let mut sum = 0;
    for (&w, _) in gen.mult_map().iter() {
        let d = gen.level_dimensionality(w);
        if d > 0 {
            sum += d as u64 * weyl_dim(&w.0);
        }
    }
    assert_eq!(sum, want, "dimension sum for {row}");
    gen
}
