use crate::core::types::Bgra;
use crate::error::{ProfileError, ProfileResult};

/// Bytes per pixel of the packed B,G,R,A layout.
pub const BYTES_PER_PIXEL: usize = 4;

/// Read-only view over a packed, interleaved 8-bit B,G,R,A pixel buffer.
///
/// Rows start every `stride_bytes` bytes. The stride may exceed
/// `width * 4` because of row padding, and all offset arithmetic in the crate
/// goes through [`PixelBuffer::offset`].
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride_bytes: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wraps `data`, failing fast when the geometry cannot address every pixel.
    pub fn new(data: &'a [u8], width: u32, height: u32, stride_bytes: usize) -> ProfileResult<Self> {
        let invalid = || ProfileError::InvalidGeometry {
            width,
            height,
            stride_bytes,
            len: data.len(),
        };

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        let row_bytes = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(invalid)?;
        if stride_bytes < row_bytes {
            return Err(invalid());
        }

        // The last row only needs its pixel bytes, not its trailing padding.
        let required = stride_bytes
            .checked_mul(height as usize - 1)
            .and_then(|bytes| bytes.checked_add(row_bytes))
            .ok_or_else(invalid)?;
        if data.len() < required {
            return Err(invalid());
        }

        Ok(Self {
            data,
            width,
            height,
            stride_bytes,
        })
    }

    /// Wraps a tightly packed buffer whose stride is exactly `width * 4`.
    pub fn packed(data: &'a [u8], width: u32, height: u32) -> ProfileResult<Self> {
        Self::new(data, width, height, width as usize * BYTES_PER_PIXEL)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn stride_bytes(&self) -> usize {
        self.stride_bytes
    }

    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[must_use]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// Byte offset of the first (blue) channel of pixel `(row, col)`.
    pub fn offset(&self, row: u32, col: u32) -> ProfileResult<usize> {
        if !self.contains(row, col) {
            return Err(ProfileError::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row as usize * self.stride_bytes + col as usize * BYTES_PER_PIXEL)
    }

    /// Reads the B,G,R,A channels of pixel `(row, col)`.
    pub fn sample(&self, row: u32, col: u32) -> ProfileResult<Bgra> {
        let offset = self.offset(row, col)?;
        let bytes = &self.data[offset..offset + BYTES_PER_PIXEL];
        Ok(Bgra::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }
}
