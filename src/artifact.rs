use std::io::{Read, Write};

use bincode::Options;
use serde::{Serialize, Deserialize};

use crate::{bitstreams::BinaryWriter, error::{HuffmanError, Result}};

pub const MAGIC: [u8; 4] = *b"HUF1";

/// A self-describing compressed input: the serialized code tree followed by the
/// packed content, each with its count of meaningful bits.
///
/// On disk the fields are laid out in declaration order with bincode's fixed-width
/// little-endian encoding; byte buffers carry a `u64` length prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedArtifact {
    magic: [u8; 4],
    pub original_length: u64,
    pub tree_bits: u64,
    pub tree: Box<[u8]>,
    pub content_bits: u64,
    pub content: Box<[u8]>,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

impl Default for CompressedArtifact {
    fn default() -> Self {
        Self::empty()
    }
}

impl CompressedArtifact {
    /// The artifact of an empty input: no tree, no content.
    pub fn empty() -> Self {
        Self::new(0, BinaryWriter::default(), BinaryWriter::default())
    }

    pub fn new(original_length: u64, tree: BinaryWriter, content: BinaryWriter) -> Self {
        Self {
            magic: MAGIC,
            original_length,
            tree_bits: tree.written_bits,
            tree: tree.os,
            content_bits: content.written_bits,
            content: content.os,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.original_length == 0 && self.tree_bits == 0 && self.content_bits == 0
    }

    /// Size in bytes of the serialized artifact.
    pub fn serialized_size(&self) -> u64 {
        // Magic, then five u64: original length, two bit counts, two length prefixes
        4 + 5 * 8 +self.tree.len() as u64 + self.content.len() as u64
    }

    fn validate(self) -> Result<Self> {
        if self.magic != MAGIC {
            return Err(HuffmanError::CorruptHeader(format!("unknown format tag {:?}", self.magic)));
        }
        Ok(self)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        options().serialize(self).map_err(HuffmanError::from_stream)
    }

    /// Parses an artifact that must span the whole of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let artifact: Self = options()
            .reject_trailing_bytes()
            .deserialize(bytes)
            .map_err(HuffmanError::from_buffer)?;
        artifact.validate()
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        options().serialize_into(writer, self).map_err(HuffmanError::from_stream)
    }

    /// Reads one artifact from `reader`. I/O errors, including an early end of
    /// stream, are returned unchanged.
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let artifact: Self = options()
            .deserialize_from(reader)
            .map_err(HuffmanError::from_stream)?;
        artifact.validate()
    }
}
