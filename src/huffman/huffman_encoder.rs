use crate::{bitstreams::{BinaryWriter, BinaryWriterBuilder}, codes::CodeTable};

/// Packs symbols into a bitstream according to a code table.
pub struct HuffmanEncoder<'a> {
    table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(table: &'a CodeTable) -> Self {
        Self { table }
    }

    /// Writes the code of `symbol` and returns its length.
    ///
    /// # Panics
    ///
    /// If `symbol` has no code: the table must come from the frequencies of the data
    /// being encoded.
    #[inline(always)]
    pub fn write_next(&self, symbol: u8, writer: &mut BinaryWriterBuilder) -> usize {
        let code = self.table.get(symbol).unwrap_or_else(|| panic!("Symbol {} has no code", symbol));

        for &bit in code.bits() {
            writer.push_bit(bit);
        }

        code.len()
    }

    /// Writes the codes of all of `data` and returns the number of bits written.
    pub fn write_body(&self, data: &[u8], writer: &mut BinaryWriterBuilder) -> u64 {
        let start = writer.written_bits;

        for &symbol in data {
            self.write_next(symbol, writer);
        }

        writer.written_bits - start
    }

    pub fn encode(&self, data: &[u8]) -> BinaryWriter {
        let mut writer = BinaryWriterBuilder::new();
        self.write_body(data, &mut writer);
        writer.build()
    }
}
