//! The public tree handle: a root link plus the owning generation's transient tag.

use crate::balance::BalanceStrategy;
use crate::error::TreeError;
use crate::iter::{Iter, TreeIter};
use crate::node::{size_of, Link};
use crate::ops;
use crate::transient::Transient;
use crate::value::TreeValue;

/// A balanced search tree over `T`, using balance discipline `B` (typically
/// [`Avl`](crate::balance::avl::Avl) or [`Wb`](crate::balance::wb::Wb)).
///
/// A fresh `Tree` owns its nodes exclusively; [`fork`](Tree::fork) hands out a second handle on
/// the same data that becomes copy-on-write the moment either side writes.
pub struct Tree<T: TreeValue, B: BalanceStrategy<T>> {
    pub(crate) root: Link<T, B>,
    pub(crate) transient: Transient,
}

/// Enable or disable re-validating every tree invariant after each structural mutation.
const VERIFY_STRUCTURE: bool = cfg!(feature = "verify_structure");

impl<T: TreeValue, B: BalanceStrategy<T>> Tree<T, B> {
    /// Builds an empty tree holding a freshly issued generation.
    ///
    /// Panics only if the process-wide transient counter has been exhausted; use
    /// [`Tree::try_new`] to handle that instead.
    pub fn new() -> Self {
        Self::try_new().expect("transient generation counter exhausted")
    }

    /// Builds an empty tree, reporting [`TreeError::TransientOverflow`] instead of panicking if
    /// the process-wide generation counter is exhausted.
    pub fn try_new() -> Result<Self, TreeError> {
        Ok(Tree {
            root: None,
            transient: Transient::fresh()?,
        })
    }

    /// Number of values currently stored.
    pub fn len(&self) -> usize {
        size_of::<T, B>(&self.root) as usize
    }

    /// True iff the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// True iff a value equivalent to `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// A reference to the stored value equivalent to `key`, if present.
    pub fn find(&self, key: &T) -> Option<&T> {
        ops::find::<T, B>(&self.root, key)
    }

    /// The value at ascending index `i`, via rank-select over subtree sizes.
    pub fn nth(&self, i: usize) -> Result<&T, TreeError> {
        ops::nth::<T, B>(&self.root, i)
    }

    /// An ascending in-order iterator.
    pub fn iter(&self) -> Iter<'_, T, B> {
        Iter {
            inner: TreeIter::first(&self.root),
        }
    }

    /// Ends this tree's current generation and returns a second handle sharing the same nodes:
    /// both this tree and the returned fork get fresh generation tags, so the first write on
    /// either side path-copies only the nodes it touches.
    pub fn fork(&mut self) -> Self {
        let fresh_self = Transient::fresh().expect("transient generation counter exhausted");
        let fresh_fork = Transient::fresh().expect("transient generation counter exhausted");
        let shared_root = self.root.clone();
        self.transient = fresh_self;
        Tree {
            root: shared_root,
            transient: fresh_fork,
        }
    }

    /// Like [`Tree::fork`], but eagerly deep-copies the fork's nodes instead of deferring the
    /// copy to the first write.
    pub fn fork_immediate(&mut self) -> Self {
        let mut forked = self.fork();
        forked.root = ops::copy::<T, B>(&forked.root, forked.transient);
        forked
    }
}

impl<T: TreeValue, B: BalanceStrategy<T>> Tree<T, B>
where
    T::Tag: PartialEq,
{
    /// Inserts `value`, returning `true` iff no equivalent value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = ops::insert::<T, B>(self.root.take(), value, self.transient);
        self.root = root;
        if VERIFY_STRUCTURE {
            self.validate_structure().expect("structure invariant violated after insert");
        }
        inserted
    }

    /// Deletes a value equivalent to `key`, returning `true` iff it was present.
    pub fn delete(&mut self, key: &T) -> bool {
        let (root, deleted) = ops::delete::<T, B>(self.root.take(), key, self.transient);
        self.root = root;
        if VERIFY_STRUCTURE {
            self.validate_structure().expect("structure invariant violated after delete");
        }
        deleted
    }

    /// Re-validates BST order, size, monoidal tags, and every balance-specific invariant,
    /// reporting the first violation found.
    pub fn validate_structure(&self) -> Result<(), TreeError> {
        ops::validate_structure::<T, B>(&self.root)
    }
}

impl<T: TreeValue, B: BalanceStrategy<T>> Default for Tree<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: TreeValue, B: BalanceStrategy<T>> IntoIterator for &'a Tree<T, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, B>;

    fn into_iter(self) -> Iter<'a, T, B> {
        self.iter()
    }
}
