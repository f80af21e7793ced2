use serde::{Serialize, Deserialize};

/// A finished bitstream: bytes packed most-significant-bit first, plus the number of
/// meaningful bits. Pad bits in the last byte are always zero.
#[derive(Clone, Default, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub struct BinaryWriter {
    pub os: Box<[u8]>,
    pub written_bits: u64,
}

pub struct BinaryWriterBuilder {
    os: Vec<u8>,
    pub written_bits: u64,
    current: u64,
    free: usize,
}

impl Default for BinaryWriterBuilder {
    fn default() -> Self {
        BinaryWriterBuilder {
            os: Vec::default(),
            written_bits: 0,
            current: 0,
            free: 8,
        }
    }
}

impl BinaryWriterBuilder {
    pub fn build(mut self) -> BinaryWriter {
        // Flush the partial byte, if any
        if self.free != 8 {
            self.write(self.current);
        }

        BinaryWriter {
            os: self.os.into_boxed_slice(),
            written_bits: self.written_bits,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    fn write(&mut self, b: u64) {
        self.os.push(b as u8);
    }

    /// Appends the `len` lowest bits of `b` to the current byte. `len` must fit in the
    /// free bits of the current byte.
    #[inline(always)]
    fn write_in_current(&mut self, b: u64, len: u64) -> u64 {
        debug_assert!(len as usize <= self.free);

        self.free -= len as usize;
        self.current |= (b & ((1 << len) - 1)) << self.free;

        if self.free == 0 {
            self.write(self.current);
            self.free = 8;
            self.current = 0;
        }

        self.written_bits += len;
        len
    }

    #[inline(always)]
    pub fn push_bit(&mut self, bit: bool) -> u64 {
        self.write_in_current(bit as u64, 1)
    }

    /// Appends the `len` lowest bits of `x`, most significant first.
    #[inline(always)]
    pub fn push_bits(&mut self, x: u64, len: u64) -> u64 {
        assert!(len <= 64, "Cannot write {} bits from an integer", len);

        let mut left = len;
        while left != 0 {
            let chunk = left.min(self.free as u64);
            left -= chunk;
            self.write_in_current(x >> left, chunk);
        }

        len
    }
}

/// Reads back a [`BinaryWriter`]-style stream, refusing to go past its meaningful bits.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BinaryReader<'a> {
    is: &'a [u8],
    limit: u64,
    pub position: usize,
    pub read_bits: u64,
    current: u64,
    fill: usize,
}

impl<'a> BinaryReader<'a> {
    /// Creates a reader over the first `limit` bits of `input_stream`.
    ///
    /// Returns `None` if the buffer holds fewer than `limit` bits.
    pub fn new(input_stream: &'a [u8], limit: u64) -> Option<Self> {
        if limit > (input_stream.len() as u64) * 8 {
            return None;
        }

        Some(BinaryReader {
            is: input_stream,
            limit,
            position: 0,
            read_bits: 0,
            current: 0,
            fill: 0,
        })
    }

    /// Number of meaningful bits not yet consumed.
    #[inline(always)]
    pub fn remaining(&self) -> u64 {
        self.limit - self.read_bits
    }

    #[inline(always)]
    fn read(&mut self) -> Option<u64> {
        let byte = *self.is.get(self.position)?;
        self.position += 1;
        Some(byte as u64)
    }

    /// Reads at most the bits left in the current byte, loading a new one if it is
    /// exhausted.
    #[inline(always)]
    fn read_from_current(&mut self, len: u64) -> Option<u64> {
        if self.fill == 0 {
            self.current = self.read()?;
            self.fill = 8;
        }

        let len = len.min(self.fill as u64);

        self.read_bits += len;
        self.fill -= len as usize;

        Some(self.current >> self.fill & ((1 << len) - 1))
    }

    #[inline(always)]
    pub fn read_bit(&mut self) -> Option<bool> {
        self.read_int(1).map(|bit| bit == 1)
    }

    /// Reads `len` bits as an integer, most significant first. Returns `None` without
    /// consuming anything if fewer than `len` meaningful bits are left.
    #[inline(always)]
    pub fn read_int(&mut self, len: u64) -> Option<u64> {
        assert!(len <= 64, "Cannot read {} bits into an integer", len);

        if len > self.remaining() {
            return None;
        }

        let mut x = 0;
        let mut left = len;

        while left != 0 {
            let chunk = left.min(if self.fill == 0 { 8 } else { self.fill as u64 });
            let bits = self.read_from_current(chunk)?;
            x = (x << chunk) | bits;
            left -= chunk;
        }

        Some(x)
    }
}

#[cfg(test)]
mod tests;
