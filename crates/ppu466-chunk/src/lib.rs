// crates/ppu466-chunk/src/lib.rs
//
// Tagged, length-prefixed block reader/writer.
//
// Layout (little-endian):
// magic[4]
// len:u32
// payload[len]
//
// Several chunks may follow each other in one stream; `read_chunk` consumes
// exactly one and leaves the rest of the stream unread.

use std::io::{self, Read, Write};

use thiserror::Error;

pub const HEADER_LEN: usize = 8;

pub type Result<T> = std::result::Result<T, ChunkError>;

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("bad magic: expected {}, found {}", show_magic(.expected), show_magic(.found))]
    BadMagic { expected: [u8; 4], found: [u8; 4] },

    #[error("truncated chunk: {0}")]
    Truncated(String),

    #[error("chunk payload too large: {0} bytes")]
    TooLarge(usize),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Write one chunk: magic, payload length, payload.
pub fn write_chunk<W: Write>(magic: &[u8; 4], payload: &[u8], out: &mut W) -> Result<()> {
    let len: u32 = payload
        .len()
        .try_into()
        .map_err(|_| ChunkError::TooLarge(payload.len()))?;
    if len == u32::MAX {
        return Err(ChunkError::TooLarge(payload.len()));
    }

    out.write_all(magic)?;
    out.write_all(&len.to_le_bytes())?;
    out.write_all(payload)?;
    Ok(())
}

/// Encode one chunk into a fresh buffer.
pub fn encode_chunk(magic: &[u8; 4], payload: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    write_chunk(magic, payload, &mut out)?;
    Ok(out)
}

/// Read one chunk and return its payload. The tag must equal `magic`.
pub fn read_chunk<R: Read>(input: &mut R, magic: &[u8; 4]) -> Result<Vec<u8>> {
    let mut header = [0u8; HEADER_LEN];
    read_full(input, &mut header, "header")?;

    let found: [u8; 4] = [header[0], header[1], header[2], header[3]];
    if &found != magic {
        return Err(ChunkError::BadMagic {
            expected: *magic,
            found,
        });
    }

    let len = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;
    let mut payload = vec![0u8; len];
    read_full(input, &mut payload, "payload")?;
    Ok(payload)
}

/// Slice form of `read_chunk`: returns the payload and the bytes after the chunk.
pub fn split_chunk<'a>(bytes: &'a [u8], magic: &[u8; 4]) -> Result<(&'a [u8], &'a [u8])> {
    if bytes.len() < HEADER_LEN {
        return Err(ChunkError::Truncated(format!(
            "header needs {} bytes, got {}",
            HEADER_LEN,
            bytes.len()
        )));
    }

    let found: [u8; 4] = [bytes[0], bytes[1], bytes[2], bytes[3]];
    if &found != magic {
        return Err(ChunkError::BadMagic {
            expected: *magic,
            found,
        });
    }

    let len = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
    let rest = &bytes[HEADER_LEN..];
    if rest.len() < len {
        return Err(ChunkError::Truncated(format!(
            "payload needs {} bytes, got {}",
            len,
            rest.len()
        )));
    }
    Ok(rest.split_at(len))
}

fn read_full<R: Read>(input: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    let mut filled = 0usize;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(ChunkError::Truncated(format!(
                    "{what} needs {} bytes, got {}",
                    buf.len(),
                    filled
                )))
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(ChunkError::Io(e)),
        }
    }
    Ok(())
}

fn show_magic(m: &[u8; 4]) -> String {
    m.iter()
        .map(|&b| {
            if b.is_ascii_graphic() {
                (b as char).to_string()
            } else {
                format!("\\x{b:02x}")
            }
        })
        .collect()
}
