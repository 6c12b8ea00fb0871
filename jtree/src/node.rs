//! The tagged tree cell (component A).
//!
//! A [`NodeCell`] is reached only through [`Link`], an `Option<Rc<_>>`: the `Rc` is what lets a
//! node be shared between two trees after a [`fork`](crate::tree::Tree::fork), and the
//! transient tag stored alongside it is what decides whether the current holder may mutate it
//! through [`make_mut`] or must clone it first.

use std::rc::Rc;

use crate::balance::BalanceStrategy;
use crate::transient::Transient;
use crate::value::TreeValue;

/// An owning link to a child subtree, or `None` for an absent child.
pub type Link<T, B> = Option<Rc<NodeCell<T, B>>>;

/// One node of a joinable tree.
///
/// Children are reached through [`Link`], never back-pointers: the iterator (`iter`) recovers
/// ancestry with an explicit path stack instead, since a node may simultaneously be an ancestor
/// of many live paths across forked trees.
pub struct NodeCell<T: TreeValue, B: BalanceStrategy<T>> {
    pub(crate) value: T,
    pub(crate) left: Link<T, B>,
    pub(crate) right: Link<T, B>,
    pub(crate) size: u32,
    pub(crate) rank: B::Rank,
    pub(crate) tag: T::Tag,
    pub(crate) transient: u64,
}

/// Subtree size of a link, treating `None` as size 0.
pub fn size_of<T: TreeValue, B: BalanceStrategy<T>>(link: &Link<T, B>) -> u32 {
    link.as_ref().map_or(0, |n| n.size)
}

/// Subtree rank of a link, treating `None` as [`BalanceStrategy::nil_rank`].
pub fn rank_of<T: TreeValue, B: BalanceStrategy<T>>(link: &Link<T, B>) -> B::Rank {
    link.as_ref().map_or_else(B::nil_rank, |n| n.rank)
}

/// Subtree tag of a link, treating `None` as [`TreeValue::nil_tag`].
pub fn tag_of<T: TreeValue, B: BalanceStrategy<T>>(link: &Link<T, B>) -> T::Tag {
    link.as_ref().map_or_else(T::nil_tag, |n| n.tag.clone())
}

/// Recomputes `size`, `rank`, and `tag` of `node` from its current children and value.
///
/// Must be called after every change to `node.left`, `node.right`, or `node.value` before the
/// node is considered structurally valid; every constructive operation in `ops` ends each
/// touched node with a call to this.
pub fn update<T: TreeValue, B: BalanceStrategy<T>>(node: &mut NodeCell<T, B>) {
    node.size = size_of::<T, B>(&node.left) + size_of::<T, B>(&node.right) + 1;
    node.rank = B::combine_ranks(rank_of::<T, B>(&node.left), rank_of::<T, B>(&node.right));
    let ltag = tag_of::<T, B>(&node.left);
    let rtag = tag_of::<T, B>(&node.right);
    node.tag = T::combine_tags(&ltag, &node.value, &rtag);
}

/// Builds a fresh node from a value and two already-balanced children, under `transient`.
pub fn make_node<T: TreeValue, B: BalanceStrategy<T>>(
    value: T,
    left: Link<T, B>,
    right: Link<T, B>,
    transient: Transient,
) -> Rc<NodeCell<T, B>> {
    let mut node = NodeCell {
        value,
        left,
        right,
        size: 0,
        rank: B::nil_rank(),
        tag: T::nil_tag(),
        transient: transient.raw(),
    };
    update::<T, B>(&mut node);
    Rc::new(node)
}

/// Builds a singleton leaf node under `transient`.
pub fn make_leaf<T: TreeValue, B: BalanceStrategy<T>>(
    value: T,
    transient: Transient,
) -> Rc<NodeCell<T, B>> {
    make_node(value, None, None, transient)
}

/// Returns a mutable view of the node behind `link`, cloning it first (and re-tagging the clone
/// with `transient`) unless `link` is both already tagged with `transient` and uniquely held.
///
/// This is the only place in the crate that implements the transient-tag discipline's rule 2:
/// a write under a mismatched tag, or under a tag that is shared with another live reference,
/// always clones first rather than mutating a node some other holder can still observe.
pub fn make_mut<'a, T: TreeValue, B: BalanceStrategy<T>>(
    link: &'a mut Rc<NodeCell<T, B>>,
    transient: Transient,
) -> &'a mut NodeCell<T, B> {
    let reusable = link.transient == transient.raw() && Rc::get_mut(link).is_some();
    if !reusable {
        let cloned = NodeCell {
            value: T::clone_value(&link.value),
            left: link.left.clone(),
            right: link.right.clone(),
            size: link.size,
            rank: link.rank,
            tag: link.tag.clone(),
            transient: transient.raw(),
        };
        *link = Rc::new(cloned);
    }
    Rc::get_mut(link).expect("node was just uniquely (re)created")
}

/// Replaces `node`'s children with `new_left`/`new_right` and recomputes size/rank/tag, reusing
/// `node` in place when its transient tag matches `transient` and it is uniquely held (rule 2),
/// cloning it first otherwise. Callers must already know the replacement children keep the
/// balance invariant locally — this never rotates, only [`crate::balance::BalanceStrategy::rebuild`]
/// does that.
pub fn update_children<T: TreeValue, B: BalanceStrategy<T>>(
    mut node: Rc<NodeCell<T, B>>,
    new_left: Link<T, B>,
    new_right: Link<T, B>,
    transient: Transient,
) -> Rc<NodeCell<T, B>> {
    let n = make_mut::<T, B>(&mut node, transient);
    n.left = new_left;
    n.right = new_right;
    update::<T, B>(n);
    node
}

/// Deep-clones every node reachable from `link` whose transient tag differs from `transient`;
/// subtrees already carrying `transient` are returned unchanged, sharing structure with the
/// source (component D's `copy`).
pub fn copy_tree<T: TreeValue, B: BalanceStrategy<T>>(
    link: &Link<T, B>,
    transient: Transient,
) -> Link<T, B> {
    match link {
        None => None,
        Some(node) if node.transient == transient.raw() => Some(Rc::clone(node)),
        Some(node) => {
            let left = copy_tree::<T, B>(&node.left, transient);
            let right = copy_tree::<T, B>(&node.right, transient);
            Some(make_node::<T, B>(
                T::clone_value(&node.value),
                left,
                right,
                transient,
            ))
        }
    }
}
