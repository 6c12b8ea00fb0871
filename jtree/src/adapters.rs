//! Collection adapters (component G): thin outward-facing views over [`Tree`].
//!
//! Each adapter owns no core logic beyond translating its vocabulary (sequence, indexed list,
//! set, dictionary) into calls on the core algorithms in [`crate::ops`] and [`crate::setops`].

use std::cmp::Ordering;

use crate::balance::BalanceStrategy;
use crate::error::TreeError;
use crate::iter::Iter;
use crate::setops;
use crate::transient::Transient;
use crate::tree::Tree;
use crate::value::TreeValue;

/// An add/remove/contains/iterate view with no positional access.
pub struct Sequence<T: TreeValue, B: BalanceStrategy<T>> {
    tree: Tree<T, B>,
}

impl<T: TreeValue, B: BalanceStrategy<T>> Sequence<T, B>
where
    T::Tag: PartialEq,
{
    /// An empty sequence.
    pub fn new() -> Self {
        Sequence { tree: Tree::new() }
    }

    /// Adds `value`, reporting whether it was absent.
    pub fn add(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// Removes a value equivalent to `key`, reporting whether it was present.
    pub fn remove(&mut self, key: &T) -> bool {
        self.tree.delete(key)
    }

    /// True iff a value equivalent to `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        self.tree.contains(key)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True iff empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Ascending in-order iteration.
    pub fn iter(&self) -> Iter<'_, T, B> {
        self.tree.iter()
    }

    /// Forks the backing tree; see [`Tree::fork`].
    pub fn fork(&mut self) -> Self {
        Sequence {
            tree: self.tree.fork(),
        }
    }
}

impl<T: TreeValue, B: BalanceStrategy<T>> Default for Sequence<T, B>
where
    T::Tag: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A read-only, constant-time-`len` / O(log n)-indexed view, forwarding every query straight
/// to the backing [`Tree`].
///
/// The forwarding impl is generated by `portrait`, in the same style used elsewhere in this
/// codebase's ancestry to wrap one structure's read surface with another's vocabulary — the
/// wrapper contributes no logic of its own.
pub struct IndexedList<T: TreeValue, B: BalanceStrategy<T>> {
    tree: Tree<T, B>,
}

/// The read-only surface [`IndexedList`] forwards to its backing [`Tree`].
pub trait TreeRead<T: TreeValue, B: BalanceStrategy<T>> {
    /// Number of values.
    fn len(&self) -> usize;
    /// True iff empty.
    fn is_empty(&self) -> bool;
    /// True iff a value equivalent to `key` is present.
    fn contains(&self, key: &T) -> bool;
    /// The value at ascending index `i`.
    fn nth(&self, i: usize) -> Result<&T, TreeError>;
    /// Ascending in-order iteration.
    fn iter(&self) -> Iter<'_, T, B>;
}

impl<T: TreeValue, B: BalanceStrategy<T>> TreeRead<T, B> for Tree<T, B> {
    fn len(&self) -> usize {
        Tree::len(self)
    }

    fn is_empty(&self) -> bool {
        Tree::is_empty(self)
    }

    fn contains(&self, key: &T) -> bool {
        Tree::contains(self, key)
    }

    fn nth(&self, i: usize) -> Result<&T, TreeError> {
        Tree::nth(self, i)
    }

    fn iter(&self) -> Iter<'_, T, B> {
        Tree::iter(self)
    }
}

#[portrait::fill(portrait::delegate(Tree<T, B>; self.tree))]
impl<T: TreeValue, B: BalanceStrategy<T>> TreeRead<T, B> for IndexedList<T, B> {}

impl<T: TreeValue, B: BalanceStrategy<T>> IndexedList<T, B> {
    /// Wraps an existing tree as a read-only indexed view.
    pub fn new(tree: Tree<T, B>) -> Self {
        IndexedList { tree }
    }

    /// Unwraps back into the backing tree.
    pub fn into_inner(self) -> Tree<T, B> {
        self.tree
    }
}

/// A set view: the set algebra of `setops` plus the usual subset/superset/disjoint predicates.
pub struct TreeSet<T: TreeValue, B: BalanceStrategy<T>> {
    tree: Tree<T, B>,
}

impl<T: TreeValue, B: BalanceStrategy<T>> TreeSet<T, B>
where
    T::Tag: PartialEq,
{
    /// An empty set.
    pub fn new() -> Self {
        TreeSet { tree: Tree::new() }
    }

    /// Inserts `value`, reporting whether it was absent.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// Removes a value equivalent to `key`, reporting whether it was present.
    pub fn remove(&mut self, key: &T) -> bool {
        self.tree.delete(key)
    }

    /// True iff a value equivalent to `key` is a member.
    pub fn contains(&self, key: &T) -> bool {
        self.tree.contains(key)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True iff empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Ascending in-order iteration.
    pub fn iter(&self) -> Iter<'_, T, B> {
        self.tree.iter()
    }

    /// Forks the backing tree; see [`Tree::fork`].
    pub fn fork(&mut self) -> Self {
        TreeSet {
            tree: self.tree.fork(),
        }
    }

    /// Non-destructive union: neither operand is modified.
    ///
    /// The result gets its own freshly issued generation — `setops::union` can hand back a
    /// subtree of either operand unchanged via `Rc::clone`, so reusing either operand's tag here
    /// would let two handles both claim exclusive ownership of the same nodes.
    pub fn union(&mut self, other: &Self) -> Self {
        let transient = Transient::fresh().expect("transient generation counter exhausted");
        let root = setops::union::<T, B>(self.tree.root.clone(), other.tree.root.clone(), transient);
        TreeSet {
            tree: Tree { root, transient },
        }
    }

    /// Non-destructive intersection. See [`TreeSet::union`] for why the result gets a fresh tag.
    pub fn intersection(&mut self, other: &Self) -> Self {
        let transient = Transient::fresh().expect("transient generation counter exhausted");
        let root =
            setops::intersection::<T, B>(self.tree.root.clone(), other.tree.root.clone(), transient);
        TreeSet {
            tree: Tree { root, transient },
        }
    }

    /// Non-destructive difference: members of `self` absent from `other`. See [`TreeSet::union`]
    /// for why the result gets a fresh tag.
    pub fn difference(&mut self, other: &Self) -> Self {
        let transient = Transient::fresh().expect("transient generation counter exhausted");
        let root =
            setops::difference::<T, B>(self.tree.root.clone(), other.tree.root.clone(), transient);
        TreeSet {
            tree: Tree { root, transient },
        }
    }

    /// True iff `self` and `other` hold exactly the same members.
    pub fn set_equals(&self, other: &Self) -> bool {
        setops::set_equals::<T, B>(&self.tree.root, &other.tree.root)
    }

    /// True iff every member of `self` is a member of `other`.
    pub fn is_subset(&mut self, other: &Self) -> bool {
        self.difference(other).is_empty()
    }

    /// True iff every member of `other` is a member of `self`.
    pub fn is_superset(&mut self, other: &Self) -> bool {
        other.difference(self).is_empty()
    }

    /// True iff `self` and `other` share no members.
    pub fn is_disjoint(&mut self, other: &Self) -> bool {
        self.intersection(other).is_empty()
    }
}

impl<T: TreeValue, B: BalanceStrategy<T>> Default for TreeSet<T, B>
where
    T::Tag: PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A key-value pair ordered and compared by `key` alone; the element type of [`TreeMap`].
#[derive(Clone)]
pub struct Entry<K, V> {
    /// The ordering key.
    pub key: K,
    /// The value associated with `key`, never consulted by `compare`.
    pub value: V,
}

impl<K: Clone + Ord, V: Clone> TreeValue for Entry<K, V> {
    type Tag = ();

    fn compare(a: &Self, b: &Self) -> Ordering {
        Ord::cmp(&a.key, &b.key)
    }

    fn nil_tag() -> Self::Tag {}

    fn combine_tags(_left: &(), _value: &Self, _right: &()) -> Self::Tag {}
}

/// A dictionary view: element type `Entry<K, V>`, ordering and monoidal combination ignore `V`.
pub struct TreeMap<K: Clone + Ord, V: Clone, B: BalanceStrategy<Entry<K, V>>> {
    tree: Tree<Entry<K, V>, B>,
}

impl<K: Clone + Ord, V: Clone, B: BalanceStrategy<Entry<K, V>>> TreeMap<K, V, B> {
    /// An empty map.
    pub fn new() -> Self {
        TreeMap { tree: Tree::new() }
    }

    /// Inserts or overwrites the value stored for `key`, returning the previous value if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = self.get(&key).cloned();
        if let Some(old_value) = &old {
            self.tree.delete(&Entry {
                key: key.clone(),
                value: old_value.clone(),
            });
        }
        self.tree.insert(Entry { key, value });
        old
    }

    /// Inserts a value for `key`, rejecting the call if `key` is already present.
    pub fn add(&mut self, key: K, value: V) -> Result<(), TreeError> {
        if self.contains_key(&key) {
            return Err(TreeError::DuplicateKey);
        }
        self.tree.insert(Entry { key, value });
        Ok(())
    }

    /// A reference to the value stored for `key`, if any.
    ///
    /// Descends by `key` alone rather than going through a constructed `Entry` probe, since
    /// `Entry::compare` ignores `V` but building one would still require a `V` to hand it.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = &self.tree.root;
        loop {
            match cur {
                None => return None,
                Some(n) => match key.cmp(&n.value.key) {
                    Ordering::Equal => return Some(&n.value.value),
                    Ordering::Less => cur = &n.left,
                    Ordering::Greater => cur = &n.right,
                },
            }
        }
    }

    /// A reference to the value stored for `key`, reporting `KeyNotFound` if absent.
    pub fn get_or_err(&self, key: &K) -> Result<&V, TreeError> {
        self.get(key).ok_or(TreeError::KeyNotFound)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let old = self.get(key).cloned()?;
        self.tree.delete(&Entry {
            key: key.clone(),
            value: old.clone(),
        });
        Some(old)
    }

    /// True iff `key` has a stored value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True iff empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Ascending (by key) iteration over entries.
    pub fn iter(&self) -> Iter<'_, Entry<K, V>, B> {
        self.tree.iter()
    }
}

impl<K: Clone + Ord, V: Clone, B: BalanceStrategy<Entry<K, V>>> Default for TreeMap<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}
