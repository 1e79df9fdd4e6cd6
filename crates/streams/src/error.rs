//! Stream error types.

use thiserror::Error;

/// Error type for coder stream read operations.
///
/// Failed reads never advance the stream cursor and never produce a
/// partial or substituted value; a malformed buffer is reported to the
/// caller rather than decoded best-effort.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// A read requested more bytes than remain in the backing sequence.
    #[error("read past the end of the backing data")]
    OutOfBounds,
    /// The stream was exhausted where at least one byte was required.
    #[error("unexpected end of stream")]
    EndOfStream,
    /// A varint continuation chain does not terminate within ten bytes,
    /// or the decoded value does not fit in 64 bits.
    #[error("malformed varint")]
    MalformedVarint,
}
