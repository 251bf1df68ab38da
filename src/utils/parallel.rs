//! Parallel iteration shim.
//!
//! With the `parallel` feature the Rayon traits are re-exported directly. Without it, a
//! serial stand-in exposes the same method names over plain iterators, so the bond scan
//! in `ops::hbond` is written once for both builds.

#[cfg(feature = "parallel")]
pub use rayon::prelude::{IntoParallelIterator, ParallelIterator};

#[cfg(not(feature = "parallel"))]
pub use self::serial::*;

#[cfg(not(feature = "parallel"))]
mod serial {
    pub use std::iter::Iterator as ParallelIterator;

    /// Serial `into_par_iter()` for anything that implements `IntoIterator`.
    pub trait IntoParallelIterator {
        type Item;
        type Iter: Iterator<Item = Self::Item>;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Item = I::Item;
        type Iter = I::IntoIter;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_scan_preserves_order_after_collect() {
        let squares: Vec<i32> = (1..=5).into_par_iter().map(|i| i * i).collect();

        assert_eq!(squares, vec![1, 4, 9, 16, 25]);
    }
}
