//! Weight-balanced discipline (α = 1/4), ranked by subtree size.

use std::rc::Rc;

use super::BalanceStrategy;
use crate::error::TreeError;
use crate::node::{self, size_of, Link, NodeCell};
use crate::transient::Transient;
use crate::value::TreeValue;

/// Weight balance with α = 1/4: `rank` carries no information (the size already tracked on
/// every node is the balance metric), so it is a zero-sized `()`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Wb;

/// `l + 1 > 3 * (l + r + 2) / 4`, expressed without integer division.
fn left_heavy(l: u32, r: u32) -> bool {
    let l = l as u64;
    let r = r as u64;
    4 * (l + 1) > 3 * (l + r + 2)
}

/// Both children are within `[alpha, 1 - alpha]` of the combined weight.
fn like(l: u32, r: u32) -> bool {
    let l = l as u64;
    let r = r as u64;
    let total = l + r + 2;
    4 * (l + 1) >= total && 4 * (l + 1) <= 3 * total
}

/// Weight ratio of the pivot's two grandchildren falls in `[1/4, 2/3)`: single rotation
/// suffices; otherwise a double rotation is required.
fn is_single_rotation(l: u32, r: u32) -> bool {
    let l = l as u64;
    let r = r as u64;
    let total = l + r + 2;
    4 * (l + 1) >= total && 3 * (l + 1) < 2 * total
}

impl<T: TreeValue> BalanceStrategy<T> for Wb {
    type Rank = ();

    fn nil_rank() {}

    fn combine_ranks(_left: (), _right: ()) {}

    fn is_balanced(left: &Link<T, Self>, right: &Link<T, Self>) -> bool {
        like(size_of::<T, Self>(left), size_of::<T, Self>(right))
    }

    fn left_is_heavier(left: &Link<T, Self>, right: &Link<T, Self>) -> bool {
        left_heavy(size_of::<T, Self>(left), size_of::<T, Self>(right))
    }

    fn rebuild(
        left: Link<T, Self>,
        value: T,
        right: Link<T, Self>,
        transient: Transient,
    ) -> Rc<NodeCell<T, Self>> {
        let lsize = size_of::<T, Self>(&left);
        let rsize = size_of::<T, Self>(&right);

        if like(lsize, rsize) {
            return node::make_node::<T, Self>(value, left, right, transient);
        }

        if left_heavy(lsize, rsize) {
            let l = left.expect("left_heavy implies left is non-empty");
            let ll_size = size_of::<T, Self>(&l.left);
            let lr_size = size_of::<T, Self>(&l.right);
            if is_single_rotation(ll_size, lr_size) {
                let new_right = node::make_node::<T, Self>(value, l.right.clone(), right, transient);
                node::make_node::<T, Self>(T::clone_value(&l.value), l.left.clone(), Some(new_right), transient)
            } else {
                let lr_node = l
                    .right
                    .clone()
                    .expect("not is_single_rotation implies l.right is non-empty");
                let new_left = node::make_node::<T, Self>(
                    T::clone_value(&l.value),
                    l.left.clone(),
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
            let r = right.expect("right is heavy, so right is non-empty");
            let rl_size = size_of::<T, Self>(&r.left);
            let rr_size = size_of::<T, Self>(&r.right);
            if is_single_rotation(rr_size, rl_size) {
                let new_left = node::make_node::<T, Self>(value, left, r.left.clone(), transient);
                node::make_node::<T, Self>(T::clone_value(&r.value), Some(new_left), r.right.clone(), transient)
            } else {
                let rl_node = r
                    .left
                    .clone()
                    .expect("not is_single_rotation implies r.left is non-empty");
                let new_left =
                    node::make_node::<T, Self>(value, left, rl_node.left.clone(), transient);
                let new_right = node::make_node::<T, Self>(
                    T::clone_value(&r.value),
                    rl_node.right.clone(),
                    r.right.clone(),
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
        fn check<T: TreeValue>(link: &Link<T, Wb>) -> Result<u32, TreeError> {
            match link {
                None => Ok(0),
                Some(n) => {
                    let lsize = check::<T>(&n.left)?;
                    let rsize = check::<T>(&n.right)?;
                    if lsize + rsize + 1 > 1 && !like(lsize, rsize) {
                        return Err(TreeError::StructureViolation(
                            "weight-balance ratio outside [1/4, 3/4]",
                        ));
                    }
                    Ok(lsize + rsize + 1)
                }
            }
        }
        check(root).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_holds_for_equal_sizes() {
        assert!(like(10, 10));
    }

    #[test]
    fn left_heavy_trips_at_three_to_one() {
        assert!(!left_heavy(3, 1));
        assert!(left_heavy(10, 1));
    }
}
