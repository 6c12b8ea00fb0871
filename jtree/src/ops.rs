//! Core algorithms (component D): `join`, `split`, `join2`, `insert`, `delete`, `find`, `nth`,
//! structural validation — everything else in this crate is expressed in terms of these.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::balance::BalanceStrategy;
use crate::error::TreeError;
use crate::node::{self, size_of, Link, NodeCell};
use crate::transient::Transient;
use crate::value::TreeValue;

/// Enable or disable join/rebalance logging.
const LOG_VERBOSE_JOIN: bool = cfg!(feature = "verbose_join");

/// The three-way join: given balanced `left`, `right` (either may be empty) and a pivot
/// `value` ordered strictly between them, produces a balanced tree with in-order sequence
/// `left, value, right`.
///
/// Cost is O(|rank(left) - rank(right)|) node visits, which is also the bound on nodes
/// allocated (untouched subtrees are shared via `Rc::clone`, not copied).
pub fn join<T, B>(left: Link<T, B>, value: T, right: Link<T, B>, transient: Transient) -> Link<T, B>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    Some(join_nonempty::<T, B>(left, value, right, transient))
}

fn join_nonempty<T, B>(
    left: Link<T, B>,
    value: T,
    right: Link<T, B>,
    transient: Transient,
) -> Rc<NodeCell<T, B>>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    if B::is_balanced(&left, &right) {
        return node::make_node::<T, B>(value, left, right, transient);
    }
    if LOG_VERBOSE_JOIN {
        println!(
            "join: rebalancing ({})",
            if B::left_is_heavier(&left, &right) { "left heavier" } else { "right heavier" }
        );
    }
    if B::left_is_heavier(&left, &right) {
        let l = left.expect("left_is_heavier implies left is non-empty");
        let new_right = join::<T, B>(l.right.clone(), value, right, transient);
        B::rebuild(l.left.clone(), T::clone_value(&l.value), new_right, transient)
    } else {
        let r = right.expect("right is heavier, so right is non-empty");
        let new_left = join::<T, B>(left, value, r.left.clone(), transient);
        B::rebuild(new_left, T::clone_value(&r.value), r.right.clone(), transient)
    }
}

/// Splits `root` around `key`: returns `(left, middle, right)` where `left` holds every value
/// less than `key`, `right` every value greater, and `middle` is `Some` iff `key` was present.
pub fn split<T, B>(
    root: Link<T, B>,
    key: &T,
    transient: Transient,
) -> (Link<T, B>, Option<T>, Link<T, B>)
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    match root {
        None => (None, None, None),
        Some(n) => match T::compare(key, &n.value) {
            Ordering::Less => {
                let (ll, mid, lr) = split::<T, B>(n.left.clone(), key, transient);
                let right_child = n.right.clone();
                let right = if B::is_balanced(&lr, &right_child) {
                    Some(node::update_children::<T, B>(n, lr, right_child, transient))
                } else {
                    let value = T::clone_value(&n.value);
                    join::<T, B>(lr, value, right_child, transient)
                };
                (ll, mid, right)
            }
            Ordering::Equal => (n.left.clone(), Some(T::clone_value(&n.value)), n.right.clone()),
            Ordering::Greater => {
                let (rl, mid, rr) = split::<T, B>(n.right.clone(), key, transient);
                let left_child = n.left.clone();
                let left = if B::is_balanced(&left_child, &rl) {
                    Some(node::update_children::<T, B>(n, left_child, rl, transient))
                } else {
                    let value = T::clone_value(&n.value);
                    join::<T, B>(left_child, value, rl, transient)
                };
                (left, mid, rr)
            }
        },
    }
}

fn split_last<T, B>(root: Link<T, B>, transient: Transient) -> (Link<T, B>, T)
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    let n = root.expect("split_last requires a non-empty tree");
    match n.right.clone() {
        None => (n.left.clone(), T::clone_value(&n.value)),
        Some(_) => {
            let (new_right, pivot) = split_last::<T, B>(n.right.clone(), transient);
            (
                join::<T, B>(n.left.clone(), T::clone_value(&n.value), new_right, transient),
                pivot,
            )
        }
    }
}

/// Concatenates two trees whose key ranges are already separated, with no pivot of their own:
/// the rightmost value of `left` becomes the pivot for a single `join`.
pub fn join2<T, B>(left: Link<T, B>, right: Link<T, B>, transient: Transient) -> Link<T, B>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    match left {
        None => right,
        Some(_) => {
            let (rest, pivot) = split_last::<T, B>(left, transient);
            join::<T, B>(rest, pivot, right, transient)
        }
    }
}

/// Inserts `value`, returning the new root and whether an equivalent value was absent. On a
/// duplicate the tree (and every subtree reference in it) is returned unchanged.
pub fn insert<T, B>(root: Link<T, B>, value: T, transient: Transient) -> (Link<T, B>, bool)
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    match root {
        None => (Some(node::make_leaf::<T, B>(value, transient)), true),
        Some(n) => match T::compare(&value, &n.value) {
            Ordering::Equal => (Some(n), false),
            Ordering::Less => {
                let (new_left, inserted) = insert::<T, B>(n.left.clone(), value, transient);
                if !inserted {
                    return (Some(n), false);
                }
                let right = n.right.clone();
                if B::is_balanced(&new_left, &right) {
                    (Some(node::update_children::<T, B>(n, new_left, right, transient)), true)
                } else {
                    let value = T::clone_value(&n.value);
                    (join::<T, B>(new_left, value, right, transient), true)
                }
            }
            Ordering::Greater => {
                let (new_right, inserted) = insert::<T, B>(n.right.clone(), value, transient);
                if !inserted {
                    return (Some(n), false);
                }
                let left = n.left.clone();
                if B::is_balanced(&left, &new_right) {
                    (Some(node::update_children::<T, B>(n, left, new_right, transient)), true)
                } else {
                    let value = T::clone_value(&n.value);
                    (join::<T, B>(left, value, new_right, transient), true)
                }
            }
        },
    }
}

/// Deletes a value equivalent to `key`, returning the new root and whether it was present.
pub fn delete<T, B>(root: Link<T, B>, key: &T, transient: Transient) -> (Link<T, B>, bool)
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    match root {
        None => (None, false),
        Some(n) => match T::compare(key, &n.value) {
            Ordering::Equal => (join2::<T, B>(n.left.clone(), n.right.clone(), transient), true),
            Ordering::Less => {
                let (new_left, deleted) = delete::<T, B>(n.left.clone(), key, transient);
                if !deleted {
                    return (Some(n), false);
                }
                let right = n.right.clone();
                if B::is_balanced(&new_left, &right) {
                    (Some(node::update_children::<T, B>(n, new_left, right, transient)), true)
                } else {
                    let value = T::clone_value(&n.value);
                    (join::<T, B>(new_left, value, right, transient), true)
                }
            }
            Ordering::Greater => {
                let (new_right, deleted) = delete::<T, B>(n.right.clone(), key, transient);
                if !deleted {
                    return (Some(n), false);
                }
                let left = n.left.clone();
                if B::is_balanced(&left, &new_right) {
                    (Some(node::update_children::<T, B>(n, left, new_right, transient)), true)
                } else {
                    let value = T::clone_value(&n.value);
                    (join::<T, B>(left, value, new_right, transient), true)
                }
            }
        },
    }
}

/// Plain BST descent; no path recording.
pub fn find<'a, T, B>(root: &'a Link<T, B>, key: &T) -> Option<&'a T>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    let mut cur = root;
    loop {
        match cur {
            None => return None,
            Some(n) => match T::compare(key, &n.value) {
                Ordering::Equal => return Some(&n.value),
                Ordering::Less => cur = &n.left,
                Ordering::Greater => cur = &n.right,
            },
        }
    }
}

/// Rank-select via subtree `size`. Fails with `IndexOutOfBounds` if `i` is not in
/// `[0, size(root))`.
pub fn nth<T, B>(root: &Link<T, B>, mut i: usize) -> Result<&T, TreeError>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    let len = size_of::<T, B>(root) as usize;
    if i >= len {
        return Err(TreeError::IndexOutOfBounds { index: i, len });
    }
    let mut cur = root;
    loop {
        let n = cur.as_ref().expect("i < size_of(cur) implies cur is non-empty");
        let lsize = size_of::<T, B>(&n.left) as usize;
        match i.cmp(&lsize) {
            Ordering::Equal => return Ok(&n.value),
            Ordering::Less => cur = &n.left,
            Ordering::Greater => {
                i -= lsize + 1;
                cur = &n.right;
            }
        }
    }
}

/// Deep-clones only the nodes whose transient tag differs from `transient` (component D's
/// `copy`); see [`crate::node::copy_tree`].
pub fn copy<T, B>(root: &Link<T, B>, transient: Transient) -> Link<T, B>
where
    T: TreeValue,
    B: BalanceStrategy<T>,
{
    node::copy_tree::<T, B>(root, transient)
}

type CheckResult<T> = Option<(T, T, u32, <T as TreeValue>::Tag)>;

fn check_order_size_tag<T, B>(link: &Link<T, B>) -> Result<CheckResult<T>, TreeError>
where
    T: TreeValue,
    T::Tag: PartialEq,
    B: BalanceStrategy<T>,
{
    match link {
        None => Ok(None),
        Some(n) => {
            let left_info = check_order_size_tag::<T, B>(&n.left)?;
            let right_info = check_order_size_tag::<T, B>(&n.right)?;

            if let Some((_, lmax, _, _)) = &left_info {
                if T::compare(lmax, &n.value) != Ordering::Less {
                    return Err(TreeError::StructureViolation("bst order violated at left child"));
                }
            }
            if let Some((rmin, _, _, _)) = &right_info {
                if T::compare(&n.value, rmin) != Ordering::Less {
                    return Err(TreeError::StructureViolation("bst order violated at right child"));
                }
            }

            let lsize = left_info.as_ref().map_or(0, |(_, _, s, _)| *s);
            let rsize = right_info.as_ref().map_or(0, |(_, _, s, _)| *s);
            let size = lsize + rsize + 1;
            if size != n.size {
                return Err(TreeError::StructureViolation(
                    "stored size does not match recomputed size",
                ));
            }

            let ltag = left_info.as_ref().map_or_else(T::nil_tag, |(_, _, _, t)| t.clone());
            let rtag = right_info.as_ref().map_or_else(T::nil_tag, |(_, _, _, t)| t.clone());
            let tag = T::combine_tags(&ltag, &n.value, &rtag);
            if tag != n.tag {
                return Err(TreeError::StructureViolation(
                    "stored monoidal tag does not match recomputed tag",
                ));
            }

            let min = left_info
                .as_ref()
                .map_or_else(|| T::clone_value(&n.value), |(lmin, _, _, _)| T::clone_value(lmin));
            let max = right_info
                .as_ref()
                .map_or_else(|| T::clone_value(&n.value), |(_, rmax, _, _)| T::clone_value(rmax));

            Ok(Some((min, max, size, tag)))
        }
    }
}

/// Recomputes BST order, size, and monoidal tag bottom-up, then defers to the balance
/// strategy's own invariant check.
pub fn validate_structure<T, B>(root: &Link<T, B>) -> Result<(), TreeError>
where
    T: TreeValue,
    T::Tag: PartialEq,
    B: BalanceStrategy<T>,
{
    check_order_size_tag::<T, B>(root)?;
    B::validate(root)
}
