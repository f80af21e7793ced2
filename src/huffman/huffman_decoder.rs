use crate::{bitstreams::BinaryReader, error::{HuffmanError, Result}, tree::{HuffmanTree, HuffNode}};

/// Recovers symbols by walking the code tree one bit at a time.
pub struct HuffmanDecoder<'a> {
    root: &'a HuffNode,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { root: &tree.root }
    }

    /// Decodes the next symbol, or returns `None` once every meaningful bit has been
    /// consumed on a symbol boundary.
    ///
    /// A single-leaf tree spends exactly one bit per symbol, whatever its value.
    #[inline(always)]
    pub fn read_next(&self, reader: &mut BinaryReader) -> Result<Option<u8>> {
        if reader.remaining() == 0 {
            return Ok(None);
        }

        if let HuffNode::Leaf { symbol, .. } = self.root {
            return Ok(reader.read_bit().map(|_| *symbol));
        }

        let mut curr_node = self.root;
        loop {
            match curr_node {
                HuffNode::Leaf { symbol, .. } => return Ok(Some(*symbol)),
                HuffNode::Internal { left, right, .. } => {
                    let bit = reader.read_bit().ok_or_else(|| {
                        HuffmanError::TruncatedContent("content ends in the middle of a code".into())
                    })?;

                    curr_node = if bit { &**right } else { &**left };
                }
            }
        }
    }

    /// Decodes the first `content_bits` bits of `content`, which must end on a symbol
    /// boundary.
    pub fn decode_body(&self, content: &[u8], content_bits: u64, capacity: usize) -> Result<Vec<u8>> {
        let mut reader = BinaryReader::new(content, content_bits).ok_or_else(|| {
            HuffmanError::TruncatedContent(format!(
                "content declares {} bits but holds {} bytes", content_bits, content.len()
            ))
        })?;

        let mut output_vec = Vec::with_capacity(capacity);
        while let Some(symbol) = self.read_next(&mut reader)? {
            output_vec.push(symbol);
        }

        Ok(output_vec)
    }
}
