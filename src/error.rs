use thiserror::Error;

/// Errors reported by the fallible map operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested key is not in the map.
    #[error("key not found")]
    NotFound,
}

/// A broken tree invariant found by [`AvlTreeMap::validate`].
///
/// Depths count from the root, which is at depth 0.
///
/// [`AvlTreeMap::validate`]: crate::AvlTreeMap::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("node at depth {depth} is out of balance (bias {bias})")]
    Unbalanced { depth: usize, bias: isize },

    #[error("node at depth {depth} caches height {cached}, but its children give {computed}")]
    HeightMismatch {
        depth: usize,
        cached: usize,
        computed: usize,
    },

    #[error("key at depth {depth} is outside the range allowed by its ancestors")]
    OutOfOrder { depth: usize },

    #[error("tree holds {counted} nodes, but the map records {recorded}")]
    LengthMismatch { counted: usize, recorded: usize },
}
