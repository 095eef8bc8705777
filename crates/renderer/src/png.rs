//! PNG output for the finished canvas.
//!
//! Encodes RGBA (color type 6) directly with flate2 and writes the file
//! atomically: bytes go to a temporary file next to the target, which is
//! then renamed over it. A failed run never leaves a partial image behind.

use std::io::Write;
use std::path::Path;

use flate2::Compression;
use image::RgbaImage;
use tracing::info;

use crate::error::{RenderError, RenderResult};

/// Default quality hint for the output image.
pub const DEFAULT_QUALITY: u8 = 95;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Map a 0-100 quality hint onto a zlib level (0-9).
///
/// PNG is lossless, so this trades file size for encode time only.
pub fn compression_for_quality(quality: u8) -> Compression {
    Compression::new(u32::from(quality.min(100)) * 9 / 100)
}

/// Encode a canvas as an RGBA PNG.
pub fn encode_png(image: &RgbaImage, quality: u8) -> RenderResult<Vec<u8>> {
    create_png(
        image.as_raw(),
        image.width() as usize,
        image.height() as usize,
        compression_for_quality(quality),
    )
    .map_err(RenderError::Encode)
}

/// Encode `image` and atomically replace `path` with it.
///
/// The destination directory must already exist.
pub fn write_png(image: &RgbaImage, path: impl AsRef<Path>, quality: u8) -> RenderResult<()> {
    let path = path.as_ref();
    let bytes = encode_png(image, quality)?;

    let io_err = |source: std::io::Error| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        bytes = bytes.len(),
        "Wrote PNG"
    );
    Ok(())
}

/// Create a PNG image from RGBA pixel data (color type 6).
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
/// - `level`: zlib compression level for the IDAT stream
pub fn create_png(
    pixels: &[u8],
    width: usize,
    height: usize,
    level: Compression,
) -> Result<Vec<u8>, String> {
    if pixels.len() != width * height * 4 {
        return Err(format!(
            "Pixel buffer has {} bytes, expected {} for {}x{} RGBA",
            pixels.len(),
            width * height * 4,
            width,
            height
        ));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    let idat_data = deflate_idat_rgba(pixels, width, height, level)
        .map_err(|e| format!("IDAT compression failed: {}", e))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk: length, type, data, CRC over type + data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate RGBA image data for IDAT chunk.
fn deflate_idat_rgba(
    pixels: &[u8],
    width: usize,
    height: usize,
    level: Compression,
) -> std::io::Result<Vec<u8>> {
    // Filter byte 0 (none) before each scanline
    let row_bytes = width * 4;
    let mut uncompressed = Vec::with_capacity(height * (1 + row_bytes));
    for row in pixels.chunks_exact(row_bytes.max(1)).take(height) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), level);
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}
