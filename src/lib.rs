pub use gelfand::GelfandRow;
pub use multmap::MultMap;
pub use reduce::{ReduceError, Reducer, Settings, UnToSo3, UnToU3};
pub use so3::So3;
pub use subgroup::{Subgroup, Weight};
pub use u3::{U3Weight, U3};

pub mod dim;
mod gelfand;
mod multmap;
mod precalc;
mod reduce;
mod so3;
mod subgroup;
mod u3;

#[cfg(test)]
mod tests;

/// call `rayon::ThreadPoolBuilder` to set `num_threads` to `n`. Discards the
/// error returned by `build_global` if the thread pool has already been
/// initialized
pub fn max_threads(n: usize) {
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build_global();
}
