//! Output stream that counts bytes without retaining them.

use crate::varint;

/// A writer with the same encoding surface as
/// [`OutputStream`](crate::OutputStream) that keeps only a running byte
/// count.
///
/// Used to compute the encoded size of a value without materializing a
/// buffer. Every operation advances the count by exactly the number of
/// bytes the real stream would have appended.
pub struct ByteCountingOutputStream {
    count: usize,
}

impl Default for ByteCountingOutputStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteCountingOutputStream {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Total number of bytes counted so far.
    pub fn get_count(&self) -> usize {
        self.count
    }

    /// Counts raw bytes, plus the varint length prefix in `nested` mode.
    pub fn write(&mut self, data: &[u8], nested: bool) {
        if nested {
            self.count += varint::encoded_len_i64(data.len() as i64);
        }
        self.count += data.len();
    }

    /// Counts a single byte.
    pub fn write_byte(&mut self, _value: u8) {
        self.count += 1;
    }

    /// Counts the varint encoding of `value`.
    pub fn write_var_int64(&mut self, value: i64) {
        self.count += varint::encoded_len_i64(value);
    }

    /// Counts 8 big-endian bytes.
    pub fn write_bigendian_int64(&mut self, _value: i64) {
        self.count += 8;
    }

    /// Counts 8 big-endian bytes.
    pub fn write_bigendian_uint64(&mut self, _value: u64) {
        self.count += 8;
    }

    /// Counts 4 big-endian bytes.
    pub fn write_bigendian_int32(&mut self, _value: i32) {
        self.count += 4;
    }

    /// Counts 8 big-endian bytes.
    pub fn write_bigendian_double(&mut self, _value: f64) {
        self.count += 8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputStream;

    #[test]
    fn starts_at_zero() {
        assert_eq!(ByteCountingOutputStream::new().get_count(), 0);
    }

    #[test]
    fn matches_output_stream_sizes() {
        let mut out = OutputStream::new();
        let mut counter = ByteCountingOutputStream::new();

        out.write_byte(65);
        counter.write_byte(65);

        out.write_var_int64(-1);
        counter.write_var_int64(-1);

        out.write(b"payload", true);
        counter.write(b"payload", true);

        out.write_bigendian_double(2.5);
        counter.write_bigendian_double(2.5);

        assert_eq!(counter.get_count(), out.size());
    }

    #[test]
    fn nested_empty_block_counts_its_prefix() {
        let mut counter = ByteCountingOutputStream::new();
        counter.write(&[], true);
        assert_eq!(counter.get_count(), 1);
    }
}
