use crate::{bitstreams::BinaryWriterBuilder, codes::CodeTable, error::HuffmanError, frequency::FrequencyTable};

use super::{HuffmanTree, HuffNode};

fn leaf(symbol: u8, weight: u64) -> HuffNode {
    HuffNode::leaf(symbol, weight)
}

#[test]
fn test_empty_table_has_no_tree() {
    assert_eq!(HuffmanTree::build(&FrequencyTable::new()), None);
    assert_eq!(HuffmanTree::from_bytes(&[]), None);
}

#[test]
fn test_single_symbol_is_a_leaf() {
    let tree = HuffmanTree::from_bytes(&[b'A'; 1000]).unwrap();

    assert_eq!(tree.root, leaf(b'A', 1000));
    assert!(tree.is_degenerate());
    assert_eq!(tree.depth(), 0);
}

#[test]
fn test_aaabbc_shape() {
    let tree = HuffmanTree::from_bytes(b"aaabbc").unwrap();

    // c and b merge first; 'a' is older than their parent, so it is extracted first
    let expected = HuffNode::merge(leaf(b'a', 3), HuffNode::merge(leaf(b'c', 1), leaf(b'b', 2)));

    assert_eq!(tree.root, expected);
    assert_eq!(tree.root.weight(), 6);
    assert_eq!(tree.leaves(), 3);
}

#[test]
fn test_equal_weights_extracted_in_insertion_order() {
    let tree = HuffmanTree::from_bytes(b"dcba").unwrap();

    let expected = HuffNode::merge(
        HuffNode::merge(leaf(b'a', 1), leaf(b'b', 1)),
        HuffNode::merge(leaf(b'c', 1), leaf(b'd', 1)),
    );

    assert_eq!(tree.root, expected);
}

#[test]
fn test_leaf_beats_younger_merged_node_of_equal_weight() {
    let frequencies: FrequencyTable = vec![(b'a', 1), (b'b', 1), (b'c', 2)].into_iter().collect();
    let tree = HuffmanTree::build(&frequencies).unwrap();

    let expected = HuffNode::merge(leaf(b'c', 2), HuffNode::merge(leaf(b'a', 1), leaf(b'b', 1)));

    assert_eq!(tree.root, expected);
}

#[test]
fn test_older_merged_node_beats_younger_one() {
    // a+b and c+d both weigh 2 and a+b was built first; their parent then ties with e,
    // which was queued before it
    let frequencies: FrequencyTable = vec![(b'a', 1), (b'b', 1), (b'c', 1), (b'd', 1), (b'e', 4)]
        .into_iter()
        .collect();
    let tree = HuffmanTree::build(&frequencies).unwrap();

    let ab = HuffNode::merge(leaf(b'a', 1), leaf(b'b', 1));
    let cd = HuffNode::merge(leaf(b'c', 1), leaf(b'd', 1));
    let expected = HuffNode::merge(leaf(b'e', 4), HuffNode::merge(ab, cd));

    assert_eq!(tree.root, expected);
}

#[test]
fn test_root_weight_is_total() {
    let data: Vec<u8> = (0..5000u32).map(|i| (i * i % 97) as u8).collect();
    let tree = HuffmanTree::from_bytes(&data).unwrap();

    assert_eq!(tree.root.weight(), data.len() as u64);
}

#[test]
fn test_depth_bounded_by_distinct_symbols() {
    // Fibonacci weights produce the deepest possible tree
    let fib = [1u64, 1, 2, 3, 5, 8, 13, 21, 34, 55];
    let frequencies: FrequencyTable = fib.iter().enumerate().map(|(i, &w)| (i as u8, w)).collect();
    let tree = HuffmanTree::build(&frequencies).unwrap();

    assert_eq!(tree.depth(), fib.len() - 1);
    assert_eq!(tree.leaves(), fib.len());
}

#[test]
fn test_build_is_deterministic() {
    let data = b"it was the best of times, it was the worst of times";

    assert_eq!(HuffmanTree::from_bytes(data), HuffmanTree::from_bytes(data));
}

#[test]
fn test_display() {
    let tree = HuffmanTree::from_bytes(b"aaabbc").unwrap();
    let printed = tree.to_string();

    assert!(printed.starts_with("root-> Internal [weight: 6]\n"));
    assert!(printed.contains("  L-> Leaf: 'a' (97) [weight: 3]\n"));
    assert!(printed.contains("    R-> Leaf: 'b' (98) [weight: 2]\n"));
}

#[test]
fn test_header_layout() {
    let tree = HuffmanTree::from_bytes(b"aaabbc").unwrap();
    let header = tree.to_header();

    // 0 | 1 'a' | 0 | 1 'c' | 1 'b'
    assert_eq!(header.written_bits, 5 + 3 * 8);
    assert_eq!(header.os[0], 0b0101_1000);
}

#[test]
fn test_header_roundtrip() {
    let data: Vec<u8> = (0..=255u8).flat_map(|b| std::iter::repeat(b).take(b as usize % 7 + 1)).collect();
    let tree = HuffmanTree::from_bytes(&data).unwrap();
    let header = tree.to_header();

    let restored = HuffmanTree::from_header(&header.os, header.written_bits).unwrap();

    assert_eq!(restored.leaves(), 256);
    assert_eq!(CodeTable::from_tree(&restored), CodeTable::from_tree(&tree));
    assert_eq!(restored.root.weight(), 0);
}

#[test]
fn test_single_leaf_header_roundtrip() {
    let tree = HuffmanTree::from_bytes(b"zzz").unwrap();
    let header = tree.to_header();

    assert_eq!(header.written_bits, 9);

    let restored = HuffmanTree::from_header(&header.os, header.written_bits).unwrap();
    assert_eq!(restored.root, leaf(b'z', 0));
}

fn assert_corrupt(header: &[u8], bits: u64) {
    match HuffmanTree::from_header(header, bits) {
        Err(HuffmanError::CorruptHeader(_)) => {},
        other => panic!("expected a corrupt header, got {other:?}"),
    }
}

#[test]
fn test_truncated_header() {
    let header = HuffmanTree::from_bytes(b"aaabbc").unwrap().to_header();

    assert_corrupt(&header.os, header.written_bits - 1);
    assert_corrupt(&header.os, 4);
    assert_corrupt(&header.os, 0);
}

#[test]
fn test_header_with_trailing_bits() {
    let tree = HuffmanTree::from_bytes(b"aaabbc").unwrap();
    let mut writer = BinaryWriterBuilder::new();
    tree.serialize(&mut writer);
    writer.push_bit(false);
    let header = writer.build();

    assert_corrupt(&header.os, header.written_bits);
}

#[test]
fn test_header_longer_than_buffer() {
    let header = HuffmanTree::from_bytes(b"aaabbc").unwrap().to_header();

    assert_corrupt(&header.os, header.os.len() as u64 * 8 + 1);
}

#[test]
fn test_duplicate_symbol() {
    let mut writer = BinaryWriterBuilder::new();
    writer.push_bit(false);
    writer.push_bit(true);
    writer.push_bits(b'a' as u64, 8);
    writer.push_bit(true);
    writer.push_bits(b'a' as u64, 8);
    let header = writer.build();

    assert_corrupt(&header.os, header.written_bits);
}

#[test]
fn test_too_deep() {
    let header = [0u8; 64];

    assert_corrupt(&header, 512);
}
