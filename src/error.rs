use thiserror::Error;

/// Error types for `U8Ring` operations
///
/// Short bulk transfers are not errors: `write`, `read` and `peek` report
/// truncation through the returned byte count.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum U8RingError {
    /// Zero-size buffer provided where at least one slot is required
    #[error("Zero-size buffer: a ring needs at least one byte of storage")]
    ZeroSizeBuffer,
    /// A restored cursor does not point into the backing storage
    #[error("Cursor out of bounds: {cursor} position {position} is not below capacity {capacity}")]
    CursorOutOfBounds {
        /// Which cursor was rejected (`"write_pos"` or `"read_pos"`)
        cursor: &'static str,
        /// Rejected position
        position: usize,
        /// Length of the backing storage
        capacity: usize,
    },
    /// No free slot is left for the requested write
    #[error("Buffer full: no free slot for writing")]
    BufferFull,
    /// No unread byte is available
    #[error("Buffer empty: no byte to read")]
    BufferEmpty,
}
