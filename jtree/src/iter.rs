//! Bounded-depth path-stack iteration (component E).
//!
//! The stack never allocates: it is sized for any tree this crate can actually build, since a
//! balanced tree's height is O(log n) and 48 levels comfortably covers every size representable
//! by the 32-bit subtree `size` field.

use std::cmp::Ordering;

use crate::balance::BalanceStrategy;
use crate::node::{size_of, Link, NodeCell};
use crate::value::TreeValue;

/// Stack depth used by [`TreeIter`]. Sufficient for any balanced tree up to ~2^32 elements.
pub const MAX_DEPTH: usize = 48;

/// The path from the tree root to the iterator's current node, top of stack last.
///
/// Positioned with [`TreeIter::first`], [`TreeIter::last`], [`TreeIter::find`], or
/// [`TreeIter::nth`], then advanced with [`TreeIter::succ`]/[`TreeIter::pred`]. Mutating the
/// tree while a `TreeIter` over it is alive yields unspecified results.
pub struct TreeIter<'a, T: TreeValue, B: BalanceStrategy<T>> {
    stack: [Option<&'a NodeCell<T, B>>; MAX_DEPTH],
    len: usize,
}

impl<'a, T: TreeValue, B: BalanceStrategy<T>> TreeIter<'a, T, B> {
    fn empty() -> Self {
        TreeIter {
            stack: [None; MAX_DEPTH],
            len: 0,
        }
    }

    fn push(&mut self, n: &'a NodeCell<T, B>) {
        assert!(self.len < MAX_DEPTH, "tree depth exceeds iterator stack capacity");
        self.stack[self.len] = Some(n);
        self.len += 1;
    }

    fn pop(&mut self) -> Option<&'a NodeCell<T, B>> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.stack[self.len].take()
    }

    fn top(&self) -> Option<&'a NodeCell<T, B>> {
        if self.len == 0 {
            None
        } else {
            self.stack[self.len - 1]
        }
    }

    /// Positions at the smallest value in `root`, or at nothing if `root` is empty.
    pub fn first(root: &'a Link<T, B>) -> Self {
        let mut it = Self::empty();
        let mut cur = root.as_deref();
        while let Some(n) = cur {
            it.push(n);
            cur = n.left.as_deref();
        }
        it
    }

    /// Positions at the largest value in `root`, or at nothing if `root` is empty.
    pub fn last(root: &'a Link<T, B>) -> Self {
        let mut it = Self::empty();
        let mut cur = root.as_deref();
        while let Some(n) = cur {
            it.push(n);
            cur = n.right.as_deref();
        }
        it
    }

    /// Positions at a value equivalent to `key`, or at nothing if absent.
    pub fn find(root: &'a Link<T, B>, key: &T) -> Self {
        let mut it = Self::empty();
        let mut cur = root.as_deref();
        while let Some(n) = cur {
            it.push(n);
            match T::compare(key, &n.value) {
                Ordering::Equal => return it,
                Ordering::Less => cur = n.left.as_deref(),
                Ordering::Greater => {
                    it.pop();
                    cur = n.right.as_deref();
                }
            }
        }
        Self::empty()
    }

    /// Positions at the `i`-th value in ascending order, or `None` if `i` is out of bounds.
    pub fn nth(root: &'a Link<T, B>, mut i: usize) -> Option<Self> {
        if i >= size_of::<T, B>(root) as usize {
            return None;
        }
        let mut it = Self::empty();
        let mut cur = root.as_deref();
        loop {
            let n = cur.expect("bounds already checked above");
            it.push(n);
            let lsize = size_of::<T, B>(&n.left) as usize;
            match i.cmp(&lsize) {
                Ordering::Equal => return Some(it),
                Ordering::Less => cur = n.left.as_deref(),
                Ordering::Greater => {
                    it.pop();
                    i -= lsize + 1;
                    cur = n.right.as_deref();
                }
            }
        }
    }

    /// The value at the current position, or `None` if the iterator is exhausted / unpositioned.
    pub fn current(&self) -> Option<&'a T> {
        self.top().map(|n| &n.value)
    }

    /// Advances to the next value in ascending order.
    pub fn succ(&mut self) -> Option<&'a T> {
        let cur = self.pop()?;
        if let Some(right) = cur.right.as_deref() {
            let mut node = Some(right);
            while let Some(c) = node {
                self.push(c);
                node = c.left.as_deref();
            }
        } else {
            let mut child = cur;
            while let Some(parent) = self.top() {
                if parent.right.as_deref().is_some_and(|r| std::ptr::eq(r, child)) {
                    child = self.pop().expect("top() just returned Some");
                } else {
                    break;
                }
            }
        }
        self.current()
    }

    /// Advances to the previous value in ascending order.
    pub fn pred(&mut self) -> Option<&'a T> {
        let cur = self.pop()?;
        if let Some(left) = cur.left.as_deref() {
            let mut node = Some(left);
            while let Some(c) = node {
                self.push(c);
                node = c.right.as_deref();
            }
        } else {
            let mut child = cur;
            while let Some(parent) = self.top() {
                if parent.left.as_deref().is_some_and(|l| std::ptr::eq(l, child)) {
                    child = self.pop().expect("top() just returned Some");
                } else {
                    break;
                }
            }
        }
        self.current()
    }
}

/// An ascending in-order iterator over a tree's values, built on [`TreeIter`].
pub struct Iter<'a, T: TreeValue, B: BalanceStrategy<T>> {
    pub(crate) inner: TreeIter<'a, T, B>,
}

impl<'a, T: TreeValue, B: BalanceStrategy<T>> Iterator for Iter<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let result = self.inner.current()?;
        self.inner.succ();
        Some(result)
    }
}
