use test_case::test_case;

use super::{check_so3, SERIAL};
use crate::{GelfandRow, ReduceError, Settings, So3, UnToSo3};

#[test]
fn trivial_shell() {
    let mut gen = UnToSo3::with_settings(So3::new(0), SERIAL);
    let map = gen.reduce(GelfandRow::new(0, 0, 0, 0, 1)).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&0), 1);
    assert_eq!(gen.level_dimensionality(0), 1);
}

#[test]
fn determinant_row() {
    // the determinant irrep [1,1,1] of U(3) holds a single l=0 level
    let mut gen = UnToSo3::with_settings(So3::new(1), SERIAL);
    let map = gen.reduce(GelfandRow::new(0, 0, 0, 3, 0)).unwrap();
    assert_eq!(map.total(), 1);
    assert_eq!(map.get(&0), 1);
    assert_eq!(gen.level_dimensionality(0), 1);
}

#[test]
fn fundamental_row() {
    // one particle in the l=1 shell: every projection once, one l=1 level
    let mut gen = UnToSo3::with_settings(So3::new(1), SERIAL);
    let map = gen.reduce(GelfandRow::new(0, 0, 0, 1, 2)).unwrap();
    assert_eq!(map.total(), 3);
    for m in [-1, 0, 1] {
        assert_eq!(map.get(&m), 1);
    }
    assert_eq!(gen.level_dimensionality(1), 1);
    assert_eq!(gen.level_dimensionality(0), 0);
    assert_eq!(gen.level_dimensionality(-1), 0);
}

#[test_case(1, GelfandRow::new(0, 0, 1, 1, 1); "l1 mixed")]
#[test_case(2, GelfandRow::new(0, 0, 2, 2, 1); "l2 twos")]
#[test_case(2, GelfandRow::new(1, 1, 1, 1, 1); "l2 full alphabet")]
#[test_case(2, GelfandRow::new(0, 0, 0, 2, 3); "l2 ones")]
#[test_case(3, GelfandRow::new(0, 2, 2, 2, 1); "l3 threes")]
#[test_case(3, GelfandRow::new(2, 1, 0, 3, 1); "l3 fours")]
#[test_case(4, GelfandRow::new(0, 0, 3, 2, 4); "l4 twos")]
fn dimension_sum(l: u32, row: GelfandRow) {
    check_so3(l, row, SERIAL);
}

#[test]
fn parallel_matches_serial() {
    let row = GelfandRow::new(0, 0, 2, 3, 2);
    let mut serial = UnToSo3::with_settings(So3::new(3), SERIAL);
    serial.reduce(row).unwrap();
    for spawn_threshold in [0, 2, 8] {
        let mut par = UnToSo3::with_settings(
            So3::new(3),
            Settings { parallel: true, spawn_threshold, ..SERIAL },
        );
        par.reduce(row).unwrap();
        assert_eq!(par.mult_map(), serial.mult_map());
        // a second run over the same row reproduces the map exactly
        par.reduce(row).unwrap();
        assert_eq!(par.mult_map(), serial.mult_map());
    }
}

#[test]
fn precalc_matches_direct() {
    let rows = [
        GelfandRow::new(0, 0, 2, 2, 3),
        GelfandRow::new(0, 0, 0, 4, 3),
        GelfandRow::new(0, 0, 3, 0, 4),
    ];
    for row in rows {
        let mut with = UnToSo3::with_settings(So3::new(3), SERIAL);
        with.reduce(row).unwrap();
        let mut without = UnToSo3::with_settings(
            So3::new(3),
            Settings { precalc: false, ..SERIAL },
        );
        without.reduce(row).unwrap();
        assert_eq!(with.mult_map(), without.mult_map(), "{row}");
    }
}

#[test]
fn rejects_mismatched_total() {
    let mut gen = UnToSo3::with_settings(So3::new(1), SERIAL);
    gen.reduce(GelfandRow::new(0, 0, 0, 1, 2)).unwrap();
    let err = gen.reduce(GelfandRow::new(0, 0, 0, 1, 1)).unwrap_err();
    assert_eq!(err, ReduceError::DimensionMismatch { want: 3, got: 2 });
    // a rejected row leaves the previous result in place
    assert_eq!(gen.mult_map().total(), 3);
}

#[test]
#[ignore = "enumerates 2.2 billion patterns; run in release"]
fn stress() {
    // the [2,2,2,2,2,2,1,0,...,0] irrep of U(21)
    let gen = check_so3(10, GelfandRow::new(0, 0, 6, 1, 14), Settings::default());
    assert_eq!(gen.mult_map().total(), 2_168_999_910);
}
