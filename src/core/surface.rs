use thiserror::Error;

use super::color::PackedColor;

/// Bytes occupied by one pixel: a 32-bit packed color with an unused
/// high byte.
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors from surface creation and pixel addressing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// Coordinates fall outside the surface extent
    #[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} surface")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The row stride cannot hold a full row of pixels
    #[error("stride {stride} is below the {min} bytes required for {width} pixels per row")]
    InvalidStride {
        stride: usize,
        min: usize,
        width: u32,
    },

    /// Only 4-byte packed pixels are supported
    #[error("unsupported pixel depth: {bytes_per_pixel} bytes per pixel")]
    UnsupportedDepth { bytes_per_pixel: usize },

    /// Surfaces must have a non-zero extent
    #[error("surface dimensions must be positive, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
}

/// Endianness used when a packed color is written into the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

/// Addressing metadata for a surface backing buffer
///
/// Supplied by the presenting side when it decides how the buffer it will
/// consume is laid out; `stride` may exceed `width * bytes_per_pixel` for
/// row alignment.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceLayout {
    pub stride: usize,
    pub bytes_per_pixel: usize,
    pub byte_order: ByteOrder,
}

impl SurfaceLayout {
    /// Tightly packed little-endian layout for the given width
    pub fn tight(width: u32) -> Self {
        Self {
            stride: width as usize * BYTES_PER_PIXEL,
            bytes_per_pixel: BYTES_PER_PIXEL,
            byte_order: ByteOrder::LittleEndian,
        }
    }
}

/// An in-memory pixel buffer with its addressing metadata
///
/// The surface exclusively owns its byte storage; all writes go through
/// bounds-checked pixel addressing. Drawing routines live in
/// [`super::raster`]; this type only knows how to locate and store a
/// packed color.
#[derive(Debug)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    stride: usize,
    bytes_per_pixel: usize,
    byte_order: ByteOrder,
    buffer: Vec<u8>,
}

impl PixelSurface {
    /// Create a surface with a tightly packed little-endian layout
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Self::with_layout(width, height, SurfaceLayout::tight(width))
    }

    /// Create a surface with an externally supplied layout
    pub fn with_layout(
        width: u32,
        height: u32,
        layout: SurfaceLayout,
    ) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::EmptySurface { width, height });
        }
        if layout.bytes_per_pixel != BYTES_PER_PIXEL {
            return Err(SurfaceError::UnsupportedDepth {
                bytes_per_pixel: layout.bytes_per_pixel,
            });
        }
        let min = width as usize * layout.bytes_per_pixel;
        if layout.stride < min {
            return Err(SurfaceError::InvalidStride {
                stride: layout.stride,
                min,
                width,
            });
        }

        Ok(Self {
            width,
            height,
            stride: layout.stride,
            bytes_per_pixel: layout.bytes_per_pixel,
            byte_order: layout.byte_order,
            buffer: vec![0; layout.stride * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, including any alignment padding
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Raw byte storage, `stride * height` bytes
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Byte offset of pixel (x, y): `y * stride + x * bytes_per_pixel`
    pub fn address(&self, x: u32, y: u32) -> Result<usize, SurfaceError> {
        if x >= self.width || y >= self.height {
            return Err(SurfaceError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.stride + x as usize * self.bytes_per_pixel)
    }

    /// Write a packed color at (x, y) in the surface's byte order
    pub fn set(&mut self, x: u32, y: u32, color: PackedColor) -> Result<(), SurfaceError> {
        let offset = self.address(x, y)?;
        let bytes = match self.byte_order {
            ByteOrder::LittleEndian => color.value().to_le_bytes(),
            ByteOrder::BigEndian => color.value().to_be_bytes(),
        };
        self.buffer[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&bytes);
        Ok(())
    }

    /// Read the packed color stored at (x, y)
    pub fn get(&self, x: u32, y: u32) -> Result<PackedColor, SurfaceError> {
        let offset = self.address(x, y)?;
        Ok(self.read_packed(offset))
    }

    /// Expand the whole surface to tightly packed R,G,B,A bytes
    /// (alpha 255) for texture upload
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                let offset = y * self.stride + x * self.bytes_per_pixel;
                let color = self.read_packed(offset);
                out.extend_from_slice(&[color.red(), color.green(), color.blue(), 0xFF]);
            }
        }
        out
    }

    fn read_packed(&self, offset: usize) -> PackedColor {
        let raw: [u8; BYTES_PER_PIXEL] = [
            self.buffer[offset],
            self.buffer[offset + 1],
            self.buffer[offset + 2],
            self.buffer[offset + 3],
        ];
        let value = match self.byte_order {
            ByteOrder::LittleEndian => u32::from_le_bytes(raw),
            ByteOrder::BigEndian => u32::from_be_bytes(raw),
        };
        PackedColor::from_raw(value)
    }
}
