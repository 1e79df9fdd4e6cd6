//! Coder stream primitives for flowcoder.
//!
//! This crate provides the byte-level streams that coders drive to encode
//! and decode values against a contiguous byte buffer:
//!
//! - [`OutputStream`] - appends raw bytes, single bytes, varints, and
//!   length-prefixed nested blocks to an owned growable buffer
//! - [`InputStream`] - a bounds-checked cursor that decodes the same wire
//!   format from an immutable byte sequence
//! - [`ByteCountingOutputStream`] - measures encoded size without
//!   materializing any bytes
//!
//! A producer drives [`OutputStream`] calls in program order; a consumer
//! drives [`InputStream`] calls in the same order and shape to reconstruct
//! the original values. The two sides share only the wire format.
//!
//! # Example
//!
//! ```
//! use flowcoder_streams::{InputStream, OutputStream};
//!
//! let mut out = OutputStream::new();
//! out.write_byte(0x41);
//! out.write_var_int64(300);
//! out.write(b"hi", true);
//! let data = out.get();
//!
//! let mut input = InputStream::new(&data);
//! assert_eq!(input.read_byte().unwrap(), 0x41);
//! assert_eq!(input.read_var_int64().unwrap(), 300);
//! assert_eq!(input.read_all(true).unwrap(), b"hi");
//! assert_eq!(input.position(), input.size());
//! ```

mod count;
mod error;
mod input;
mod output;
pub mod varint;

pub use count::ByteCountingOutputStream;
pub use error::StreamError;
pub use input::InputStream;
pub use output::OutputStream;
