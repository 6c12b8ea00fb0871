//! Height-ranked balance (AVL), rank stored as a signed height.

use std::rc::Rc;

use super::BalanceStrategy;
use crate::error::TreeError;
use crate::node::{self, rank_of, Link, NodeCell};
use crate::transient::Transient;
use crate::value::TreeValue;

/// AVL balance: `rank` is the subtree height, kept within 1 of its sibling at every node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Avl;

impl<T: TreeValue> BalanceStrategy<T> for Avl {
    type Rank = i32;

    fn nil_rank() -> i32 {
        0
    }

    fn combine_ranks(left: i32, right: i32) -> i32 {
        1 + left.max(right)
    }

    fn is_balanced(left: &Link<T, Self>, right: &Link<T, Self>) -> bool {
        (rank_of::<T, Self>(left) - rank_of::<T, Self>(right)).abs() <= 1
    }

    fn left_is_heavier(left: &Link<T, Self>, right: &Link<T, Self>) -> bool {
        rank_of::<T, Self>(left) > rank_of::<T, Self>(right)
    }

    fn rebuild(
        left: Link<T, Self>,
        value: T,
        right: Link<T, Self>,
        transient: Transient,
    ) -> Rc<NodeCell<T, Self>> {
        let lrank = rank_of::<T, Self>(&left);
        let rrank = rank_of::<T, Self>(&right);

        if (lrank - rrank).abs() <= 1 {
            return node::make_node::<T, Self>(value, left, right, transient);
        }

        if lrank > rrank {
            let l = left.expect("left_is_heavier implies left is non-empty");
            let ll = l.left.clone();
            let lr = l.right.clone();
            if rank_of::<T, Self>(&ll) >= rank_of::<T, Self>(&lr) {
                // single right rotation
                let new_right = node::make_node::<T, Self>(value, lr, right, transient);
                node::make_node::<T, Self>(T::clone_value(&l.value), ll, Some(new_right), transient)
            } else {
                // double rotation: lr's root becomes the new local root
                let lr_node = lr.expect("rank_of(ll) < rank_of(lr) implies lr is non-empty");
                let new_left = node::make_node::<T, Self>(
                    T::clone_value(&l.value),
                    ll,
                    lr_node.left.clone(),
                    transient,
                );
                let new_right =
                    node::make_node::<T, Self>(value, lr_node.right.clone(), right, transient);
                node::make_node::<T, Self>(
                    T::clone_value(&lr_node.value),
                    Some(new_left),
                    Some(new_right),
                    transient,
                )
            }
        } else {
            let r = right.expect("right is heavier, so right is non-empty");
            let rl = r.left.clone();
            let rr = r.right.clone();
            if rank_of::<T, Self>(&rr) >= rank_of::<T, Self>(&rl) {
                // single left rotation
                let new_left = node::make_node::<T, Self>(value, left, rl, transient);
                node::make_node::<T, Self>(T::clone_value(&r.value), Some(new_left), rr, transient)
            } else {
                let rl_node = rl.expect("rank_of(rr) < rank_of(rl) implies rl is non-empty");
                let new_left = node::make_node::<T, Self>(
                    value,
                    left,
                    rl_node.left.clone(),
                    transient,
                );
                let new_right = node::make_node::<T, Self>(
                    T::clone_value(&r.value),
                    rl_node.right.clone(),
                    rr,
                    transient,
                );
                node::make_node::<T, Self>(
                    T::clone_value(&rl_node.value),
                    Some(new_left),
                    Some(new_right),
                    transient,
                )
            }
        }
    }

    fn validate(root: &Link<T, Self>) -> Result<(), TreeError> {
        fn check<T: TreeValue>(link: &Link<T, Avl>) -> Result<i32, TreeError> {
            match link {
                None => Ok(0),
                Some(n) => {
                    let lh = check::<T>(&n.left)?;
                    let rh = check::<T>(&n.right)?;
                    if (lh - rh).abs() > 1 {
                        return Err(TreeError::StructureViolation(
                            "avl balance factor exceeds 1",
                        ));
                    }
                    let height = 1 + lh.max(rh);
                    if height != n.rank {
                        return Err(TreeError::StructureViolation(
                            "avl stored rank does not match recomputed height",
                        ));
                    }
                    Ok(height)
                }
            }
        }
        check(root).map(|_| ())
    }
}
