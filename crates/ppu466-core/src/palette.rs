// crates/ppu466-core/src/palette.rs

use std::fmt;

use crate::error::{AssetError, Result};
use crate::layout::{PALETTE_BYTES, PALETTE_LEN};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self::new(b[0], b[1], b[2], b[3])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        Self::from_bytes(px.0)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba(c.to_bytes())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Four palette entries. Slot order is first-seen order from the encoder;
/// slot 0 has no special meaning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette(pub [Color; PALETTE_LEN]);

impl Palette {
    #[inline]
    pub fn color(&self, index: u8) -> Color {
        self.0[(index & 0x03) as usize]
    }

    pub fn to_bytes(&self) -> [u8; PALETTE_BYTES] {
        let mut out = [0u8; PALETTE_BYTES];
        for (dst, c) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            dst.copy_from_slice(&c.to_bytes());
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PALETTE_BYTES {
            return Err(AssetError::TruncatedAsset(format!(
                "palette needs {PALETTE_BYTES} bytes, got {}",
                bytes.len()
            )));
        }
        let mut colors = [Color::default(); PALETTE_LEN];
        for (c, src) in colors.iter_mut().zip(bytes.chunks_exact(4)) {
            *c = Color::new(src[0], src[1], src[2], src[3]);
        }
        Ok(Palette(colors))
    }
}

/// Fixed-capacity palette accumulator: linear search, first-seen insertion.
#[derive(Clone, Debug, Default)]
pub struct PaletteBuilder {
    colors: [Color; PALETTE_LEN],
    len: usize,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors[..self.len]
    }

    pub fn find(&self, color: Color) -> Option<u8> {
        self.colors().iter().position(|&c| c == color).map(|i| i as u8)
    }

    /// Slot for `color`, assigning the next free slot if it is new.
    /// Returns `None` when the color is new and all slots are taken.
    pub fn slot_for(&mut self, color: Color) -> Option<u8> {
        if let Some(i) = self.find(color) {
            return Some(i);
        }
        if self.len == PALETTE_LEN {
            return None;
        }
        self.colors[self.len] = color;
        self.len += 1;
        Some((self.len - 1) as u8)
    }

    /// Unused slots stay zeroed.
    pub fn finish(self) -> Palette {
        Palette(self.colors)
    }
}
