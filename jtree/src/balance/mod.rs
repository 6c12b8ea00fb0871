//! Balance strategies (component B, balance half): [`avl`] and [`wb`].
//!
//! Both disciplines share one generic join skeleton in [`crate::ops`]; this trait is the set of
//! local decisions the skeleton defers to the strategy in use.

pub mod avl;
pub mod wb;

use std::rc::Rc;

use crate::error::TreeError;
use crate::node::{Link, NodeCell};
use crate::transient::Transient;
use crate::value::TreeValue;

/// The balance-specific hooks the join-based algorithm skeleton in [`crate::ops`] calls into.
///
/// Implementations never need to touch `left`/`right`/`transient` links except through the
/// free functions in [`crate::node`] (`size_of`, `rank_of`, `make_node`, ...).
pub trait BalanceStrategy<T: TreeValue>: Sized {
    /// The balance metric stored per node: height for [`avl::Avl`], unused for [`wb::Wb`].
    type Rank: Copy;

    /// Rank assigned to an absent child.
    fn nil_rank() -> Self::Rank;

    /// Local rank recomputation rule, called by [`crate::node::update`] after every structural
    /// change.
    fn combine_ranks(left: Self::Rank, right: Self::Rank) -> Self::Rank;

    /// True when a node built directly from `left` and `right` (with no rotation) already
    /// satisfies the balance invariant — the join recursion's base case.
    fn is_balanced(left: &Link<T, Self>, right: &Link<T, Self>) -> bool;

    /// True when `left` is too tall/heavy relative to `right`. Only consulted when
    /// `!is_balanced(left, right)`; selects which spine the 3-way join descends.
    fn left_is_heavier(left: &Link<T, Self>, right: &Link<T, Self>) -> bool;

    /// Builds the local node from two children that are each individually balanced, rotating
    /// first if combining them as-is would violate the invariant by more than the join
    /// recursion already guarantees (at most one level of slack).
    fn rebuild(
        left: Link<T, Self>,
        value: T,
        right: Link<T, Self>,
        transient: Transient,
    ) -> Rc<NodeCell<T, Self>>;

    /// Recomputes every balance-specific invariant bottom-up, returning the first violation
    /// found as a [`TreeError::StructureViolation`].
    fn validate(root: &Link<T, Self>) -> Result<(), TreeError>;
}
