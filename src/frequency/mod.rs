use std::{collections::BTreeMap, io::{self, Read}};

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Occurrence count of every byte value appearing in an input.
///
/// Only symbols that occur at least once are stored; iteration goes by ascending
/// symbol value.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.update(data);
        table
    }

    /// Counts every byte of `reader` until end of stream. I/O errors are returned
    /// unchanged.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut table = Self::new();
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => return Ok(table),
                Ok(n) => table.update(&buffer[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Adds the bytes of `data` to the counts, as if it followed everything counted so far.
    pub fn update(&mut self, data: &[u8]) {
        let mut histo = [0u64; 256];
        for &byte in data {
            histo[byte as usize] += 1;
        }

        for (symbol, &count) in histo.iter().enumerate() {
            if count != 0 {
                *self.counts.entry(symbol as u8).or_insert(0) += count;
            }
        }
    }

    /// Folds in a table counted over another shard of the same input.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (&symbol, &count) in other.counts.iter() {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }

    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted bytes.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(u8, u64)> for FrequencyTable {
    /// Builds a table from explicit counts; zero counts are dropped and repeated symbols add up.
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in iter {
            if count != 0 {
                *counts.entry(symbol).or_insert(0) += count;
            }
        }
        FrequencyTable { counts }
    }
}
