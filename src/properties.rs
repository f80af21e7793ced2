use std::{collections::HashMap, fs::File, io::{BufReader, BufWriter, Write}, path::Path, str::FromStr};

use java_properties::PropertiesWriter;
use serde::{Serialize, Deserialize};

use crate::{artifact::CompressedArtifact, error::{HuffmanError, Result}, huffman::HuffmanCodec};

/// Summary of a compressed file, stored next to it as a Java properties file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub source_name: String,
    pub original_length: u64,
    pub compressed_length: u64,
    pub distinct_symbols: usize,
    pub tree_bits: u64,
    pub content_bits: u64,
    pub min_code_length: usize,
    pub max_code_length: usize,
}

impl Properties {
    /// `codec` is `None` for an empty input.
    pub fn new(source_name: &str, codec: Option<&HuffmanCodec>, artifact: &CompressedArtifact) -> Self {
        let mut props = Properties {
            source_name: source_name.to_owned(),
            original_length: artifact.original_length,
            compressed_length: artifact.serialized_size(),
            tree_bits: artifact.tree_bits,
            content_bits: artifact.content_bits,
            ..Default::default()
        };

        if let Some(codec) = codec {
            props.distinct_symbols = codec.code_table().len();
            props.min_code_length = codec.code_table().min_len();
            props.max_code_length = codec.code_table().max_len();
        }

        props
    }

    /// Compressed size over original size; 0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.compressed_length as f64 / self.original_length as f64
    }

    /// Average number of content bits per input byte.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.content_bits as f64 / self.original_length as f64
    }

    fn entries(&self) -> [(&'static str, String); 8] {
        [
            ("source", self.source_name.clone()),
            ("originallength", self.original_length.to_string()),
            ("compressedlength", self.compressed_length.to_string()),
            ("symbols", self.distinct_symbols.to_string()),
            ("treebits", self.tree_bits.to_string()),
            ("contentbits", self.content_bits.to_string()),
            ("mincodelength", self.min_code_length.to_string()),
            ("maxcodelength", self.max_code_length.to_string()),
        ]
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut props_writer = PropertiesWriter::new(writer);

        props_writer.write_comment("Huffman artifact properties").map_err(invalid)?;
        for (key, value) in self.entries().iter() {
            props_writer.write(key, value).map_err(invalid)?;
        }
        props_writer.finish().map_err(invalid)
    }

    pub fn store(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let map = java_properties::read(BufReader::new(file)).map_err(invalid)?;
        Properties::try_from(map)
    }
}

fn invalid(err: java_properties::PropertiesError) -> HuffmanError {
    HuffmanError::InvalidProperties(err.to_string())
}

fn parse<T: FromStr>(value: &HashMap<String, String>, key: &str) -> Result<T> {
    let raw = value.get(key)
        .ok_or_else(|| HuffmanError::InvalidProperties(format!("missing key {}", key)))?;

    raw.trim().parse()
        .map_err(|_| HuffmanError::InvalidProperties(format!("cannot parse {}={}", key, raw)))
}

impl TryFrom<HashMap<String, String>> for Properties {
    type Error = HuffmanError;

    fn try_from(value: HashMap<String, String>) -> Result<Self> {
        Ok(Properties {
            source_name: value.get("source").cloned().unwrap_or_default(),
            original_length: parse(&value, "originallength")?,
            compressed_length: parse(&value, "compressedlength")?,
            distinct_symbols: parse(&value, "symbols")?,
            tree_bits: parse(&value, "treebits")?,
            content_bits: parse(&value, "contentbits")?,
            min_code_length: parse(&value, "mincodelength")?,
            max_code_length: parse(&value, "maxcodelength")?,
        })
    }
}

impl From<&Properties> for HashMap<String, String> {
    fn from(val: &Properties) -> Self {
        val.entries().into_iter().map(|(key, value)| (key.to_owned(), value)).collect()
    }
}
