//! # huffman_rust
//!
//! Lossless compression of byte streams with Huffman codes.
//!
//! ```rust
//! use huffman_rust::{compress, decompress, CompressedArtifact};
//!
//! let artifact = compress(b"aaabbc");
//! let bytes = artifact.to_bytes()?;
//!
//! // Decompression only needs the serialized artifact
//! let restored = decompress(&CompressedArtifact::from_bytes(&bytes)?)?;
//! assert_eq!(restored, b"aaabbc");
//! # Ok::<(), huffman_rust::HuffmanError>(())
//! ```

pub mod artifact;
pub mod bitstreams;
pub mod cli;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod properties;
pub mod tree;
pub mod utils;

pub use artifact::CompressedArtifact;
pub use codes::{Code, CodeTable};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman::{compress, compress_from, decompress, decompress_into, HuffmanCodec};
pub use properties::Properties;
pub use tree::{HuffmanTree, HuffNode};
