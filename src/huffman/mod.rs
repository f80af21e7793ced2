//! Whole-input compression and decompression.

use std::io::{Read, Write};

use crate::{
    artifact::CompressedArtifact,
    codes::CodeTable,
    error::{HuffmanError, Result},
    frequency::FrequencyTable,
    tree::HuffmanTree,
};

pub mod huffman_encoder;
pub mod huffman_decoder;

use huffman_decoder::HuffmanDecoder;
use huffman_encoder::HuffmanEncoder;

/// A code tree together with the code table derived from it.
#[derive(Clone, Debug)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    code_table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(tree: HuffmanTree) -> Self {
        let code_table = CodeTable::from_tree(&tree);
        Self { tree, code_table }
    }

    /// Returns `None` for an empty table, which has no tree.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<Self> {
        HuffmanTree::build(frequencies).map(Self::new)
    }

    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        Self::from_frequencies(&FrequencyTable::from_bytes(data))
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    /// Encodes `data` together with the serialized tree.
    ///
    /// # Panics
    ///
    /// If `data` holds a byte that has no code in this codec.
    pub fn encode(&self, data: &[u8]) -> CompressedArtifact {
        let content = HuffmanEncoder::new(&self.code_table).encode(data);
        CompressedArtifact::new(data.len() as u64, self.tree.to_header(), content)
    }
}

pub fn compress(data: &[u8]) -> CompressedArtifact {
    match HuffmanCodec::from_bytes(data) {
        Some(codec) => codec.encode(data),
        None => CompressedArtifact::empty(),
    }
}

/// Reads `reader` to its end and compresses what it yielded.
pub fn compress_from<R: Read>(mut reader: R) -> Result<CompressedArtifact> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(compress(&data))
}

/// Rebuilds the tree from the artifact header and decodes the content with it.
pub fn decompress(artifact: &CompressedArtifact) -> Result<Vec<u8>> {
    if artifact.tree_bits == 0 {
        if artifact.is_empty() {
            return Ok(Vec::new());
        }
        return Err(HuffmanError::CorruptHeader("artifact declares content but carries no code tree".into()));
    }

    let tree = HuffmanTree::from_header(&artifact.tree, artifact.tree_bits)?;

    // Every symbol takes at least one bit
    let capacity = artifact.original_length.min(artifact.content_bits) as usize;
    let data = HuffmanDecoder::new(&tree).decode_body(&artifact.content, artifact.content_bits, capacity)?;

    if data.len() as u64 != artifact.original_length {
        return Err(HuffmanError::LengthMismatch {
            expected: artifact.original_length,
            actual: data.len() as u64,
        });
    }

    Ok(data)
}

/// Decompresses `artifact` and writes the whole result to `writer`; nothing is
/// written if decoding fails.
pub fn decompress_into<W: Write>(artifact: &CompressedArtifact, mut writer: W) -> Result<()> {
    let data = decompress(artifact)?;
    writer.write_all(&data)?;
    Ok(())
}
