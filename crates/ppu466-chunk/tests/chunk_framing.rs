// crates/ppu466-chunk/tests/chunk_framing.rs

use std::io::Cursor;

use ppu466_chunk::{encode_chunk, read_chunk, split_chunk, write_chunk, ChunkError, HEADER_LEN};

const MAGIC: &[u8; 4] = b"test";

#[test]
fn header_is_magic_then_le_length() {
    let bytes = encode_chunk(MAGIC, &[1, 2, 3]).expect("encode");
    assert_eq!(bytes.len(), HEADER_LEN + 3);
    assert_eq!(&bytes[0..4], MAGIC);
    assert_eq!(&bytes[4..8], &[3, 0, 0, 0]);
    assert_eq!(&bytes[8..], &[1, 2, 3]);
}

#[test]
fn read_consumes_exactly_one_chunk() {
    let mut stream = Vec::new();
    write_chunk(MAGIC, b"first", &mut stream).unwrap();
    write_chunk(MAGIC, b"second!", &mut stream).unwrap();

    let mut cur = Cursor::new(stream);
    assert_eq!(read_chunk(&mut cur, MAGIC).unwrap(), b"first");
    assert_eq!(read_chunk(&mut cur, MAGIC).unwrap(), b"second!");

    let err = read_chunk(&mut cur, MAGIC).unwrap_err();
    assert!(matches!(err, ChunkError::Truncated(_)), "{err:?}");
}

#[test]
fn empty_payload_is_allowed() {
    let bytes = encode_chunk(MAGIC, &[]).unwrap();
    let payload = read_chunk(&mut Cursor::new(bytes), MAGIC).unwrap();
    assert!(payload.is_empty());
}

#[test]
fn wrong_magic_is_rejected() {
    let bytes = encode_chunk(b"abcd", &[9; 4]).unwrap();
    let err = read_chunk(&mut Cursor::new(&bytes), MAGIC).unwrap_err();
    match err {
        ChunkError::BadMagic { expected, found } => {
            assert_eq!(&expected, MAGIC);
            assert_eq!(&found, b"abcd");
        }
        other => panic!("expected BadMagic, got {other:?}"),
    }
    assert!(format!("{}", split_chunk(&bytes, MAGIC).unwrap_err()).contains("abcd"));
}

#[test]
fn short_payload_is_truncated() {
    let mut bytes = encode_chunk(MAGIC, &[0; 32]).unwrap();
    bytes.truncate(HEADER_LEN + 10);

    assert!(matches!(
        read_chunk(&mut Cursor::new(&bytes), MAGIC),
        Err(ChunkError::Truncated(_))
    ));
    assert!(matches!(split_chunk(&bytes, MAGIC), Err(ChunkError::Truncated(_))));
    assert!(matches!(split_chunk(&bytes[..5], MAGIC), Err(ChunkError::Truncated(_))));
}

#[test]
fn split_returns_trailing_bytes() {
    let mut bytes = encode_chunk(MAGIC, &[7, 7]).unwrap();
    bytes.extend_from_slice(b"tail");
    let (payload, rest) = split_chunk(&bytes, MAGIC).unwrap();
    assert_eq!(payload, &[7, 7]);
    assert_eq!(rest, b"tail");
}
