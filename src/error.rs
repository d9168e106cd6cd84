/// Simulation error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// Frame capacity must be at least one.
    #[error("Invalid frame capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Reference string contains no valid page numbers.
    #[error("Reference string contains no valid page numbers")]
    EmptyReferenceString,

    /// Reference string is longer than the allowed maximum.
    #[error("Reference string too long: {len} pages (at most {max} allowed)")]
    TooManyReferences {
        /// Number of parsed pages.
        len: usize,
        /// Maximum allowed number of pages.
        max: usize,
    },

    /// Unknown replacement policy name.
    #[error("Unknown replacement policy: {0} (expected FIFO, LRU or OPT)")]
    UnknownPolicy(String),

    /// Policy failed to pick a resident page while frames are full.
    #[error("No eviction candidate among resident pages at position {0}")]
    NoEvictionCandidate(usize),
}

/// Simulation result type.
pub type SimResult<T> = Result<T, SimError>;
