//! 24-bit BMP serialization of a canvas.
//!
//! The layout is the classic uncompressed Windows bitmap: a 14-byte file
//! header, a 40-byte info header, then pixel rows stored bottom-to-top in
//! B,G,R order with each row zero-padded to a 4-byte boundary. All multi-byte
//! fields are little-endian. Alpha is not representable at 24 bpp and is
//! dropped.

use std::fs;
use std::path::Path;

use rasterpad_core::PixelGrid;

use crate::error::SessionError;

/// BITMAPFILEHEADER size in bytes.
const FILE_HEADER_SIZE: u32 = 14;
/// BITMAPINFOHEADER size in bytes.
const INFO_HEADER_SIZE: u32 = 40;
/// Bits per pixel for the uncompressed RGB format written here.
const BITS_PER_PIXEL: u16 = 24;

/// Encodes the canvas as a complete BMP file image.
pub fn encode(canvas: &PixelGrid) -> Vec<u8> {
    let width = canvas.width();
    let height = canvas.height();
    let row_bytes = width * 3;
    let padding = (4 - row_bytes % 4) % 4;
    let image_size = (row_bytes + padding) * height;
    let header_size = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize;

    let mut out = Vec::with_capacity(header_size + image_size);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((header_size + image_size) as u32).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved1
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved2
    out.extend_from_slice(&(header_size as u32).to_le_bytes()); // pixel data offset

    // BITMAPINFOHEADER
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&(width as u32).to_le_bytes());
    out.extend_from_slice(&(height as u32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // x pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // y pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    // Pixel rows, bottom-to-top.
    let data = canvas.data();
    for y in (0..height).rev() {
        let row = &data[y * width..(y + 1) * width];
        for p in row {
            out.push(p.b);
            out.push(p.g);
            out.push(p.r);
        }
        out.resize(out.len() + padding, 0);
    }
    out
}

/// Encodes the canvas and writes it to `path`.
pub fn export(canvas: &PixelGrid, path: &Path) -> Result<(), SessionError> {
    fs::write(path, encode(canvas)).map_err(|e| SessionError::io(path, e))
}
