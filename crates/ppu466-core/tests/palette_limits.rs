// crates/ppu466-core/tests/palette_limits.rs

use image::{Rgba, RgbaImage};
use ppu466_core::encode::{convert_file, encode_image, output_path_for};
use ppu466_core::{AssetError, Color};

fn stripes(w: u32, h: u32, colors: &[[u8; 4]]) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, _| Rgba(colors[(x as usize) % colors.len()]))
}

const FIVE: [[u8; 4]; 5] = [
    [0, 0, 0, 255],
    [1, 0, 0, 255],
    [2, 0, 0, 255],
    [3, 0, 0, 255],
    [4, 0, 0, 255],
];

#[test]
fn exactly_four_colors_encode() {
    let asset = encode_image(&stripes(8, 8, &FIVE[..4])).expect("four colors fit");
    let want: Vec<Color> = FIVE[..4].iter().map(|&c| Color::from_bytes(c)).collect();
    assert_eq!(asset.palette.0.to_vec(), want);
}

#[test]
fn fifth_color_overflows() {
    let err = encode_image(&stripes(8, 8, &FIVE)).unwrap_err();
    match err {
        AssetError::PaletteOverflow { color, x, y } => {
            assert_eq!(color, Color::new(4, 0, 0, 255));
            assert_eq!((x, y), (4, 0));
        }
        other => panic!("expected PaletteOverflow, got {other:?}"),
    }
}

#[test]
fn palette_is_shared_across_tiles() {
    // each tile is a single color; four tiles, four slots
    let img = RgbaImage::from_fn(16, 16, |x, y| Rgba(FIVE[((x / 8) * 2 + y / 8) as usize]));
    let asset = encode_image(&img).unwrap();
    assert_eq!(asset.tile_count(), 4);
    for (i, t) in asset.tiles.iter().enumerate() {
        assert!(t.indices().iter().flatten().all(|&p| p as usize == i), "tile {i}");
    }

    // a fifth single-color tile overflows even though each tile alone is fine
    let img = RgbaImage::from_fn(40, 8, |x, _| Rgba(FIVE[(x / 8) as usize]));
    assert!(matches!(encode_image(&img), Err(AssetError::PaletteOverflow { .. })));
}

#[test]
fn overflow_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("too_many.png");
    stripes(8, 8, &FIVE).save(&src).unwrap();

    let err = convert_file(&src).unwrap_err();
    assert!(matches!(err, AssetError::PaletteOverflow { .. }), "{err:?}");
    assert!(!output_path_for(&src).exists());
}

#[test]
fn unreadable_image_is_image_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("garbage.png");
    std::fs::write(&src, b"definitely not a png").unwrap();

    assert!(matches!(convert_file(&src), Err(AssetError::ImageLoad { .. })));
    assert!(matches!(
        convert_file(&dir.path().join("missing.png")),
        Err(AssetError::ImageLoad { .. })
    ));
}
