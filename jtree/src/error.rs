//! The error kinds surfaced at the crate's boundary.
//!
//! Every error is produced synchronously at its origin; none is ever silently swallowed. The
//! core algorithms (`ops`) otherwise report "not found"/"duplicate" in-band, via `Option` or
//! `bool`, exactly as specified — only the cases below ever become an `Err`.

use thiserror::Error;

/// Errors that can be produced by this crate's public operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TreeError {
    /// `nth`, or a vector `get`/`set`/`pop`, was called with an index outside the valid range.
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The number of elements actually present.
        len: usize,
    },

    /// A dictionary `add` (or a set `insert` on a view that rejects duplicates) was called
    /// with a key that already exists.
    #[error("duplicate key")]
    DuplicateKey,

    /// A dictionary subscript read was attempted for a key that is not present.
    #[error("key not found")]
    KeyNotFound,

    /// `validate_structure` found a node whose invariants do not hold. This indicates a bug in
    /// the `TreeValue`/`BalanceStrategy` implementation in use, or a regression in this crate,
    /// never a data-dependent runtime condition.
    #[error("tree structure invariant violated: {0}")]
    StructureViolation(&'static str),

    /// The process-wide 64-bit transient generation counter wrapped around. Treated as fatal:
    /// there is no way to recover a safe-to-use tag at that point.
    #[error("transient generation counter overflowed")]
    TransientOverflow,

    /// A [`Vector`](crate::vector::Vector) was constructed with widths outside
    /// `2 <= ES <= IS <= 7`.
    #[error("invalid vector configuration: internal shift {internal_shift}, external shift {external_shift}")]
    InvalidConfiguration {
        /// The requested internal-node shift (`IS`).
        internal_shift: u32,
        /// The requested external-leaf shift (`ES`).
        external_shift: u32,
    },
}
