//! analytic irrep dimensions for the drivers and the dimension-sum checks.
//! The enumerator itself never needs these

use num_bigint::BigInt;
use num_rational::BigRational;

/// the dimension of the U(N) irrep with row lengths `f` (weakly decreasing),
/// by the Weyl dimension formula evaluated in exact rational arithmetic.
///
/// Panics if `f` is not weakly decreasing or the dimension exceeds `u64`
pub fn weyl_dim(f: &[u32]) -> u64 {
    let n = f.len();
    let mut result = BigRational::from_integer(BigInt::from(1));
    for l in 2..=n {
        for k in 1..l {
            let num = f[k - 1] as i64 - f[l - 1] as i64 + (l - k) as i64;
            result *= BigRational::new(
                BigInt::from(num),
                BigInt::from((l - k) as i64),
            );
        }
    }
    assert!(result.is_integer());
    u64::try_from(result.to_integer()).unwrap()
}

/// the dimension of the SO(3) irrep with angular momentum `l`
pub fn so3_dim(l: i32) -> u64 {
    (2 * l + 1) as u64
}
