//! Shared helpers for the end-to-end scenarios.

use std::collections::BTreeSet;

use jtree::balance::BalanceStrategy;
use jtree::Tree;

/// Runs `perm_ins` as an insertion order and `perm_del` as a deletion order over `0..n`,
/// checking every invariant from the testable-properties matrix after each single operation.
pub fn check_permutation_matrix<B>(n: usize, perm_ins: &[usize], perm_del: &[usize])
where
    B: BalanceStrategy<i32>,
{
    let mut t: Tree<i32, B> = Tree::new();
    let mut present: BTreeSet<i32> = BTreeSet::new();

    for &k in perm_ins {
        let key = k as i32;
        let inserted = t.insert(key);
        assert!(inserted);
        present.insert(key);
        assert_invariants(&t, &present, n);
    }

    assert_eq!(t.len(), n);

    for &k in perm_del {
        let key = k as i32;
        let deleted = t.delete(&key);
        assert!(deleted);
        present.remove(&key);
        assert_invariants(&t, &present, n);
    }

    assert!(t.is_empty());
}

fn assert_invariants<B>(t: &Tree<i32, B>, present: &BTreeSet<i32>, n: usize)
where
    B: BalanceStrategy<i32>,
{
    assert_eq!(t.len(), present.len());
    t.validate_structure().unwrap();

    let seen: Vec<i32> = t.iter().copied().collect();
    let expected: Vec<i32> = present.iter().copied().collect();
    assert_eq!(seen, expected);

    for k in 0..(n as i32) {
        assert_eq!(t.contains(&k), present.contains(&k));
    }
}
