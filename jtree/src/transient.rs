//! Process-wide transient generation tags (component C).
//!
//! A transient tag identifies the "generation" that exclusively owns a node: a node may be
//! mutated in place only by the holder of the matching tag, and any other holder must clone it
//! first (see [`crate::node`]). This module owns the single counter that hands out fresh tags.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::TreeError;

/// Tag `0` is never issued by [`Transient::fresh`]; it is reserved so that code which wants to
/// represent "no generation, always clone" (e.g. a strictly read-only view over borrowed data)
/// has a tag value guaranteed never to compare equal to a live owner's tag.
pub const NONE: u64 = 0;

static NEXT_TRANSIENT: AtomicU64 = AtomicU64::new(1);

/// A 64-bit generation tag.
///
/// Two transients are interchangeable only by equality: there is no ordering between them, and
/// no meaning to their numeric value beyond "same generation" or "different generation".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Transient(u64);

impl Transient {
    /// Issues a brand-new, never-before-seen transient tag.
    ///
    /// Fails with [`TreeError::TransientOverflow`] if the process-wide counter has been
    /// exhausted. This is treated as fatal by callers; there is no way to safely continue
    /// issuing unique tags at that point.
    pub fn fresh() -> Result<Self, TreeError> {
        let mut current = NEXT_TRANSIENT.load(Ordering::Relaxed);
        loop {
            let next = current.checked_add(1).ok_or(TreeError::TransientOverflow)?;
            match NEXT_TRANSIENT.compare_exchange_weak(
                current,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(issued) => return Ok(Transient(issued)),
                Err(observed) => current = observed,
            }
        }
    }

    /// The reserved "no generation" tag. A node carrying this tag is never considered
    /// in-place-mutable by any holder.
    pub const fn none() -> Self {
        Transient(NONE)
    }

    pub(crate) fn raw(self) -> u64 {
        self.0
    }
}

impl Default for Transient {
    /// Returns the reserved "no generation" tag, *not* a fresh one — use [`Transient::fresh`]
    /// to actually obtain exclusive ownership of a generation.
    fn default() -> Self {
        Transient::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tags_are_distinct() {
        let a = Transient::fresh().unwrap();
        let b = Transient::fresh().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn none_is_reserved() {
        assert_eq!(Transient::none().raw(), NONE);
    }
}
