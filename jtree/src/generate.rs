//! Permutation generators used by this crate's own property tests (component: test tooling).
//!
//! Gated behind the `generate` feature since it pulls in `rand`; downstream crates that want
//! the same permutation families for their own tests against this library can enable the
//! feature too instead of re-implementing them.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// The seven permutation families exercised by the end-to-end property tests.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Permutation {
    /// `0, 1, 2, ..., n-1`.
    Ascending,
    /// `n-1, ..., 2, 1, 0`.
    Descending,
    /// Recursively halved midpoint-first order, yielding a maximally balanced insertion order.
    Balanced,
    /// Alternating low/high: `0, n-1, 1, n-2, ...`.
    ZigZag,
    /// Ascending, rotated so it starts at the midpoint: `n/2, n/2+1, ..., n-1, 0, ..., n/2-1`.
    Shifted,
    /// Ascending run up to the midpoint followed by a descending run back down.
    Bitonic,
    /// A fixed-seed (3141) uniformly shuffled permutation.
    Random,
}

impl Permutation {
    /// Every family, in the fixed order the 7x7 test matrix iterates over.
    pub const ALL: [Permutation; 7] = [
        Permutation::Ascending,
        Permutation::Descending,
        Permutation::Balanced,
        Permutation::ZigZag,
        Permutation::Shifted,
        Permutation::Bitonic,
        Permutation::Random,
    ];

    /// Builds the permutation of `0..n` for this family.
    pub fn generate(self, n: usize) -> Vec<usize> {
        match self {
            Permutation::Ascending => (0..n).collect(),
            Permutation::Descending => (0..n).rev().collect(),
            Permutation::Balanced => balanced(0, n),
            Permutation::ZigZag => zig_zag(n),
            Permutation::Shifted => shifted(n),
            Permutation::Bitonic => bitonic(n),
            Permutation::Random => random(n, 3141),
        }
    }
}

fn balanced(lo: usize, hi: usize) -> Vec<usize> {
    if lo >= hi {
        return Vec::new();
    }
    let mid = lo + (hi - lo) / 2;
    let mut out = vec![mid];
    out.extend(balanced(lo, mid));
    out.extend(balanced(mid + 1, hi));
    out
}

fn zig_zag(n: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(n);
    let (mut lo, mut hi) = (0usize, n);
    let mut from_low = true;
    while lo < hi {
        if from_low {
            out.push(lo);
            lo += 1;
        } else {
            hi -= 1;
            out.push(hi);
        }
        from_low = !from_low;
    }
    out
}

fn shifted(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mid = n / 2;
    (mid..n).chain(0..mid).collect()
}

fn bitonic(n: usize) -> Vec<usize> {
    let mid = n / 2;
    (0..mid).chain((mid..n).rev()).collect()
}

fn random(n: usize, seed: u64) -> Vec<usize> {
    let mut values: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    values.shuffle(&mut rng);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_family_is_a_permutation_of_0_n() {
        for family in Permutation::ALL {
            let p = family.generate(100);
            assert_eq!(p.len(), 100);
            let set: HashSet<_> = p.iter().copied().collect();
            assert_eq!(set.len(), 100);
            assert_eq!(*set.iter().max().unwrap(), 99);
        }
    }

    #[test]
    fn random_is_reproducible() {
        assert_eq!(random(50, 3141), random(50, 3141));
    }
}
