use super::{BinaryWriterBuilder, BinaryReader};

#[test]
fn test_simple_integer_writing() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bits(5, 3);
    writer_builder.push_bits(10, 4);
    writer_builder.push_bits(5, 3);

    let written = writer_builder.build();
    let mut binary_reader = BinaryReader::new(&written.os, written.written_bits).unwrap();

    assert_eq!(binary_reader.read_int(3), Some(5));
    assert_eq!(binary_reader.read_int(4), Some(10));
    assert_eq!(binary_reader.read_int(3), Some(5));
    assert_eq!(binary_reader.remaining(), 0);
}

#[test]
fn test_written_bits_number_correctness() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bits(0, 11);
    writer_builder.push_bit(true);
    writer_builder.push_bits(3, 11);

    assert_eq!(writer_builder.written_bits, 23);
    assert_eq!(writer_builder.build().os.len(), 3);
}

#[test]
fn test_msb_first_packing() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bit(true);
    writer_builder.push_bit(false);
    writer_builder.push_bit(true);

    let written = writer_builder.build();

    // 101 followed by five zero pad bits
    assert_eq!(&*written.os, &[0b1010_0000]);
    assert_eq!(written.written_bits, 3);
}

#[test]
fn test_byte_aligned_stream_has_no_pad_byte() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bits(0xAB, 8);
    writer_builder.push_bits(0xCD, 8);

    let written = writer_builder.build();

    assert_eq!(&*written.os, &[0xAB, 0xCD]);
    assert_eq!(written.written_bits, 16);
}

#[test]
fn test_empty_stream() {
    let written = BinaryWriterBuilder::new().build();

    assert!(written.os.is_empty());
    assert_eq!(written.written_bits, 0);

    let mut binary_reader = BinaryReader::new(&written.os, 0).unwrap();
    assert_eq!(binary_reader.read_bit(), None);
}

#[test]
fn test_wide_integers_across_bytes() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bits(1, 3);
    writer_builder.push_bits(u64::MAX, 64);
    writer_builder.push_bits(0x0123_4567_89AB_CDEF, 64);
    writer_builder.push_bits(2, 2);

    let written = writer_builder.build();
    assert_eq!(written.written_bits, 133);

    let mut binary_reader = BinaryReader::new(&written.os, written.written_bits).unwrap();

    assert_eq!(binary_reader.read_int(3), Some(1));
    assert_eq!(binary_reader.read_int(64), Some(u64::MAX));
    assert_eq!(binary_reader.read_int(64), Some(0x0123_4567_89AB_CDEF));
    assert_eq!(binary_reader.read_int(2), Some(2));
}

#[test]
fn test_read_stops_at_meaningful_bits() {
    let mut writer_builder = BinaryWriterBuilder::new();

    writer_builder.push_bits(0b11, 2);

    let written = writer_builder.build();
    let mut binary_reader = BinaryReader::new(&written.os, written.written_bits).unwrap();

    assert_eq!(binary_reader.read_int(3), None);
    // A refused read consumes nothing
    assert_eq!(binary_reader.remaining(), 2);
    assert_eq!(binary_reader.read_bit(), Some(true));
    assert_eq!(binary_reader.read_bit(), Some(true));
    assert_eq!(binary_reader.read_bit(), None);
}

#[test]
fn test_limit_larger_than_buffer() {
    let bytes = [0u8; 2];

    assert!(BinaryReader::new(&bytes, 16).is_some());
    assert!(BinaryReader::new(&bytes, 17).is_none());
}

#[test]
fn test_single_bits_roundtrip() {
    let pattern: Vec<bool> = (0..1000).map(|i| i % 3 == 0 || i % 7 == 0).collect();

    let mut writer_builder = BinaryWriterBuilder::new();
    for &bit in pattern.iter() {
        writer_builder.push_bit(bit);
    }

    let written = writer_builder.build();
    let mut binary_reader = BinaryReader::new(&written.os, written.written_bits).unwrap();

    for &bit in pattern.iter() {
        assert_eq!(binary_reader.read_bit(), Some(bit));
    }
    assert_eq!(binary_reader.read_bit(), None);
}
