//! Owned RGBA8 pixel buffer
//!
//! [`PixelBuffer`] is not `Clone`: handing a buffer to an operation moves it,
//! and the operation hands the same allocation back.

use std::fmt;

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Error returned when raw bytes do not describe a `width x height` RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Byte length differs from `width * height * 4`
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    /// `width * height * 4` does not fit in memory addressing
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::SizeMismatch {
                width,
                height,
                expected,
                actual,
            } => write!(
                f,
                "buffer of {} bytes does not match {}x{} RGBA8 (expected {} bytes)",
                actual, width, height, expected
            ),
            BufferError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// A row-major RGBA8 image: 4 bytes per pixel (R, G, B, A).
///
/// The length invariant `data.len() == width * height * 4` is checked once at
/// construction, so per-pixel loops never index out of bounds.
///
/// # Example
///
/// ```
/// use cielab_ops::PixelBuffer;
///
/// let buffer = PixelBuffer::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
/// assert_eq!(buffer.pixel_count(), 2);
///
/// // Wrong length is rejected up front
/// assert!(PixelBuffer::new(2, 2, vec![0; 8]).is_err());
/// ```
#[derive(PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA8 bytes, validating the length against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = expected_len(width, height)?;
        if data.len() != expected {
            return Err(BufferError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BufferError> {
        let expected = expected_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(expected).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA8 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes. The length cannot change through this slice.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Iterate over pixels as 4-byte slices.
    #[inline]
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }

    /// Iterate mutably over pixels as 4-byte slices.
    #[inline]
    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// The RGBA bytes of pixel `index`, if in range.
    pub fn pixel(&self, index: usize) -> Option<[u8; 4]> {
        let start = index.checked_mul(CHANNELS)?;
        let end = start.checked_add(CHANNELS)?;
        let px = self.data.get(start..end)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Give up the buffer and return `(width, height, bytes)`.
    pub fn into_parts(self) -> (u32, u32, Vec<u8>) {
        (self.width, self.height, self.data)
    }
}

// Image bytes are not useful in debug output.
impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

fn expected_len(width: u32, height: u32) -> Result<usize, BufferError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(BufferError::TooLarge { width, height })
}
