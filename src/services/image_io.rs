//! PNG files to and from RGBA8 pixel buffers.

use std::io::Cursor;
use std::path::Path;

use cielab_ops::PixelBuffer;

use crate::error::ImageIoError;

/// Decode a PNG of any color type and bit depth into RGBA8.
///
/// Palette and 16-bit images are normalized to 8-bit color by the decoder;
/// gray and RGB images are widened here with opaque alpha.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, ImageIoError> {
    decode_png_limited(bytes, u64::MAX)
}

/// Like [`decode_png`], but rejects images with more than `max_pixels`
/// pixels before any pixel memory is allocated.
pub fn decode_png_limited(bytes: &[u8], max_pixels: u64) -> Result<PixelBuffer, ImageIoError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let (width, height) = (reader.info().width, reader.info().height);
    if u64::from(width) * u64::from(height) > max_pixels {
        return Err(ImageIoError::TooLarge {
            width,
            height,
            max: max_pixels,
        });
    }

    let mut raw = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut raw)?;
    raw.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => raw,
        png::ColorType::Rgb => raw
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => raw
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => raw.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => return Err(ImageIoError::UnsupportedColorType(other)),
    };

    Ok(PixelBuffer::new(info.width, info.height, rgba)?)
}

/// Encode a buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ImageIoError> {
    let mut out = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(buffer.as_bytes())?;
    }
    Ok(out.into_inner())
}

pub fn read_png(path: &Path) -> Result<PixelBuffer, ImageIoError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

pub fn read_png_limited(path: &Path, max_pixels: u64) -> Result<PixelBuffer, ImageIoError> {
    let bytes = std::fs::read(path)?;
    decode_png_limited(&bytes, max_pixels)
}

pub fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<(), ImageIoError> {
    std::fs::write(path, encode_png(buffer)?)?;
    Ok(())
}
