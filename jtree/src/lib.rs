/*!
Joinable balanced search trees, with optional path-copying persistence.

This crate provides balanced binary search trees built around a single three-way
[`Join`](ops::join) primitive, from which insertion, deletion, ordered split, ordered
concatenation, set union/intersection/difference, indexed access (rank-select), and in-order
iteration are all derived. Two balance disciplines are provided, [`Avl`](balance::avl::Avl)
(balanced by height) and [`Wb`](balance::wb::Wb) (weight-balanced by subtree size), sharing one
generic algorithm skeleton in [`ops`].

Every tree node carries a *transient tag*: a 64-bit generation id identifying the exclusive
owner allowed to mutate it in place. Two trees sharing a generation behave like a single
ephemeral, destructively-updated collection; a tree that has been [forked](Tree::fork) away
from its generation behaves like a fully persistent, copy-on-write collection — both are the
same code path, differing only in whether writes ever observe a tag mismatch.

# Examples

```
use jtree::Tree;
use jtree::balance::avl::Avl;

let mut t : Tree<i32, Avl> = Tree::new();
for x in [5, 3, 8, 1, 4] {
    t.insert(x);
}
assert_eq!(t.iter().collect::<Vec<_>>(), vec![&1, &3, &4, &5, &8]);
assert!(t.contains(&4));
assert!(!t.contains(&100));
```

```
use jtree::Tree;
use jtree::balance::wb::Wb;

let mut t0 : Tree<i32, Wb> = Tree::new();
for x in 0..10 {
    t0.insert(x);
}

// fork() yields a second, independent handle on the same data; subsequent writes to either
// side path-copy only the nodes they touch.
let mut t1 = t0.fork();
t1.delete(&5);

assert!(t0.contains(&5));
assert!(!t1.contains(&5));
```

# Crate feature flags

* `generate`
    * Optional, requires the `rand` crate.
    * Enables [`generate`], which builds the permutation families used by this crate's own
      property tests (and usable by downstream tests that want the same coverage).
* `verbose_join`
    * Optional. WARNING: slow.
    * Print out extra information about rotation/rebalance decisions made during `join`.
* `verify_structure`
    * Optional. WARNING: very slow.
    * Re-validate every tree invariant after each structural mutation while running.

# Literature

The `Join`-centric design follows the "join-based" framework for balanced trees:

Guy E. Blelloch, Daniel Ferizovic, and Yihan Sun. Just Join for Parallel Ordered Sets.
Proceedings of the 28th ACM Symposium on Parallelism in Algorithms and Architectures, SPAA
2016, 253–264, 2016. doi:[10.1145/2935764.2935768](https://doi.org/10.1145/2935764.2935768)

The weight-balance discipline (α = 1/4) follows:

J. Nievergelt and E. M. Reingold. Binary search trees of bounded balance.
SIAM Journal on Computing, 2(1):33–43, 1973. doi:[10.1137/0202005](https://doi.org/10.1137/0202005)
*/

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::private_doc_tests)]

pub mod adapters;
pub mod balance;
pub mod error;
pub mod iter;
pub mod node;
pub mod ops;
pub mod setops;
pub mod transient;
pub mod tree;
pub mod value;
pub mod vector;

#[cfg(feature = "generate")]
pub mod generate;

pub use error::TreeError;
pub use tree::Tree;
pub use value::TreeValue;
pub use vector::Vector;

#[cfg(test)]
mod tests {
    use crate::balance::avl::Avl;
    use crate::balance::wb::Wb;
    use crate::Tree;

    #[test]
    fn smoke_avl() {
        let mut t: Tree<i32, Avl> = Tree::new();
        assert!(t.is_empty());
        for x in [5, 1, 9, 3, 7] {
            assert!(t.insert(x));
        }
        assert!(!t.insert(5));
        assert_eq!(t.len(), 5);
        t.validate_structure().unwrap();
    }

    #[test]
    fn smoke_wb() {
        let mut t: Tree<i32, Wb> = Tree::new();
        for x in [5, 1, 9, 3, 7] {
            t.insert(x);
        }
        assert_eq!(t.len(), 5);
        t.validate_structure().unwrap();
    }
}
