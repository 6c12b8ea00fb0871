//! Join-based set algebra (component F): `union`, `intersection`, `difference`, `set_equals`.
//!
//! All four reduce to [`crate::ops::split`]/[`crate::ops::join`]/[`crate::ops::join2`] and
//! recurse on the two children of the second operand, costing O(m · log(n/m + 1)) for operands
//! of size m ≤ n.
//!
//! When a key is present in both operands, the surviving value comes from
//! [`TreeValue::merge_duplicate`], called with `a`'s value first and `b`'s second — unaugmented
//! types and `Entry<K, V>` keep the default, which takes `b` outright (consistent with how
//! `std::collections`' own `BTreeSet::union`-style merges treat the second argument as
//! authoritative), while `Sum`/`Max` fold both sides' weight into the surviving value instead of
//! discarding one.

use std::cmp::Ordering;

use crate::balance::BalanceStrategy;
use crate::iter::TreeIter;
use crate::node::size_of;
use crate::node::Link;
use crate::ops;
use crate::transient::Transient;
use crate::value::TreeValue;

/// True iff `a` and `b` contain the same values in the same order under `T::compare`.
pub fn set_equals<T, B>(a: &Link<T, B>, b: &Link<T, B>) -> bool
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    if size_of::<T, B>(a) != size_of::<T, B>(b) {
        return false;
    }
    let mut ia = TreeIter::first(a);
    let mut ib = TreeIter::first(b);
    loop {
        match (ia.current(), ib.current()) {
            (None, None) => return true,
            (Some(x), Some(y)) => {
                if T::compare(x, y) != Ordering::Equal {
                    return false;
                }
                ia.succ();
                ib.succ();
            }
            _ => return false,
        }
    }
}

/// Set union.
pub fn union<T, B>(a: Link<T, B>, b: Link<T, B>, transient: Transient) -> Link<T, B>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    let b_node = match (&a, &b) {
        (None, _) => return b,
        (_, None) => return a,
        (_, Some(n)) => n.clone(),
    };
    let (al, m, ar) = ops::split::<T, B>(a, &b_node.value, transient);
    let left = union::<T, B>(al, b_node.left.clone(), transient);
    let right = union::<T, B>(ar, b_node.right.clone(), transient);
    let pivot = match &m {
        Some(a_value) => T::merge_duplicate(a_value, &b_node.value),
        None => T::clone_value(&b_node.value),
    };
    ops::join::<T, B>(left, pivot, right, transient)
}

/// Set intersection.
pub fn intersection<T, B>(a: Link<T, B>, b: Link<T, B>, transient: Transient) -> Link<T, B>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    let b_node = b?;
    let (al, m, ar) = ops::split::<T, B>(a, &b_node.value, transient);
    let left = intersection::<T, B>(al, b_node.left.clone(), transient);
    let right = intersection::<T, B>(ar, b_node.right.clone(), transient);
    match m {
        Some(a_value) => {
            let pivot = T::merge_duplicate(&a_value, &b_node.value);
            ops::join::<T, B>(left, pivot, right, transient)
        }
        None => ops::join2::<T, B>(left, right, transient),
    }
}

/// Set difference: every value of `a` not present in `b`.
pub fn difference<T, B>(a: Link<T, B>, b: Link<T, B>, transient: Transient) -> Link<T, B>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    let b_node = match b {
        None => return a,
        Some(n) => n,
    };
    let (al, _m, ar) = ops::split::<T, B>(a, &b_node.value, transient);
    let left = difference::<T, B>(al, b_node.left.clone(), transient);
    let right = difference::<T, B>(ar, b_node.right.clone(), transient);
    ops::join2::<T, B>(left, right, transient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::avl::Avl;
    use crate::tree::Tree;
    use crate::value::{Max, Sum};

    fn root<T: TreeValue, B: BalanceStrategy<T>>(t: &Tree<T, B>) -> Link<T, B> {
        t.root.clone()
    }

    fn collect<T: TreeValue, B: BalanceStrategy<T>>(link: &Link<T, B>) -> Vec<T> {
        let mut it = TreeIter::first(link);
        let mut out = Vec::new();
        while let Some(v) = it.current() {
            out.push(T::clone_value(v));
            it.succ();
        }
        out
    }

    #[test]
    fn union_merges_overlapping_sum_weights() {
        let mut a: Tree<Sum<&str, u32>, Avl> = Tree::new();
        a.insert(Sum::new("x", 3));
        a.insert(Sum::new("y", 1));
        let mut b: Tree<Sum<&str, u32>, Avl> = Tree::new();
        b.insert(Sum::new("x", 10));
        b.insert(Sum::new("z", 2));

        let transient = Transient::fresh().unwrap();
        let merged = union::<Sum<&str, u32>, Avl>(root(&a), root(&b), transient);
        let values = collect(&merged);
        assert_eq!(values.len(), 3);
        let x = values.iter().find(|v| v.key == "x").unwrap();
        assert_eq!(x.weight, 13);
    }

    #[test]
    fn intersection_merges_sum_weights_for_shared_keys() {
        let mut a: Tree<Sum<&str, u32>, Avl> = Tree::new();
        a.insert(Sum::new("x", 3));
        a.insert(Sum::new("y", 1));
        let mut b: Tree<Sum<&str, u32>, Avl> = Tree::new();
        b.insert(Sum::new("x", 10));
        b.insert(Sum::new("z", 2));

        let transient = Transient::fresh().unwrap();
        let both = intersection::<Sum<&str, u32>, Avl>(root(&a), root(&b), transient);
        let values = collect(&both);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].key, "x");
        assert_eq!(values[0].weight, 13);
    }

    #[test]
    fn union_takes_larger_max_weight_for_shared_keys() {
        let mut a: Tree<Max<&str, i32>, Avl> = Tree::new();
        a.insert(Max::new("x", 9));
        let mut b: Tree<Max<&str, i32>, Avl> = Tree::new();
        b.insert(Max::new("x", 4));

        let transient = Transient::fresh().unwrap();
        let merged = union::<Max<&str, i32>, Avl>(root(&a), root(&b), transient);
        let values = collect(&merged);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].weight, 9);
    }
}
