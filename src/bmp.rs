//! Uncompressed 24-bit bitmap encoding.

use std::io::{self, Seek, SeekFrom, Write};

use log::{debug, trace};

use crate::{
    colour::ColourSample,
    error::{ParameterError, RenderError},
    row_buffer::RowBuffer,
    screen,
};

/// Written as the bytes `B`, `M`. The original generator declared this as the
/// 16-bit value `0x4D42`, which is the same two bytes once stored little-endian.
pub const SIGNATURE: [u8; 2] = *b"BM";
pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
/// Offset of the first pixel row.
pub const HEADER_SIZE: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
pub const PLANES: u16 = 1;
pub const BITS_PER_PIXEL: u16 = 24;
pub const COMPRESSION_NONE: u32 = 0;
/// Both resolution fields carry this value in every file of this lineage.
pub const PIXELS_PER_METRE: i32 = 0x130B;

const HEADER_LEN: usize = HEADER_SIZE as usize;

/// Bytes per row on disk: enough for `width` packed pixels, rounded up to a
/// multiple of 4.
pub fn row_stride(width: u32) -> usize {
    ((BITS_PER_PIXEL as u64 * width as u64 + 31) / 32 * 4) as usize
}

/**
The combined file and info headers.

Build with [`Header::for_size`], or [`Header::default`] followed by
[`Header::set_dimensions`] and then [`Header::set_sizes`]. The size fields are
only meaningful after the second step.

Serialisation goes field by field through [`Header::to_bytes`]; the in-memory
layout of this struct is irrelevant to the file format.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: [u16; 2],
    pub data_offset: u32,
    pub info_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub horizontal_resolution: i32,
    pub vertical_resolution: i32,
    pub palette_colours: u32,
    pub important_colours: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            signature: SIGNATURE,
            file_size: 0,
            reserved: [0, 0],
            data_offset: HEADER_SIZE,
            info_size: INFO_HEADER_SIZE,
            width: 0,
            height: 0,
            planes: PLANES,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size: 0,
            horizontal_resolution: PIXELS_PER_METRE,
            vertical_resolution: PIXELS_PER_METRE,
            palette_colours: 0,
            important_colours: 0,
        }
    }
}

impl Header {
    pub fn for_size(size: screen::Size) -> Result<Self, ParameterError> {
        let mut header = Header::default();
        header.set_dimensions(size)?;
        header.set_sizes(row_stride(size.width))?;
        Ok(header)
    }

    pub fn set_dimensions(&mut self, size: screen::Size) -> Result<(), ParameterError> {
        if size.width == 0 {
            return Err(ParameterError::ZeroWidth);
        }
        if size.height == 0 {
            return Err(ParameterError::ZeroHeight);
        }

        let too_large = || ParameterError::TooLarge {
            width: size.width,
            height: size.height,
        };
        self.width = i32::try_from(size.width).map_err(|_| too_large())?;
        self.height = i32::try_from(size.height).map_err(|_| too_large())?;

        Ok(())
    }

    pub fn set_sizes(&mut self, row_stride: usize) -> Result<(), ParameterError> {
        debug_assert!(row_stride % 4 == 0);

        let too_large = || ParameterError::TooLarge {
            width: self.width.unsigned_abs(),
            height: self.height.unsigned_abs(),
        };
        let image_size = (row_stride as u64)
            .checked_mul(self.height.unsigned_abs() as u64)
            .ok_or_else(too_large)?;
        let file_size = image_size + HEADER_SIZE as u64;

        self.image_size = u32::try_from(image_size).map_err(|_| too_large())?;
        self.file_size = u32::try_from(file_size).map_err(|_| too_large())?;

        Ok(())
    }

    pub fn size(&self) -> screen::Size {
        screen::Size {
            width: self.width.unsigned_abs(),
            height: self.height.unsigned_abs(),
        }
    }

    pub fn row_stride(&self) -> usize {
        row_stride(self.width.unsigned_abs())
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0; HEADER_LEN];
        let mut offset = 0;
        let mut put = |field: &[u8]| {
            bytes[offset..offset + field.len()].copy_from_slice(field);
            offset += field.len();
        };

        put(&self.signature);
        put(&self.file_size.to_le_bytes());
        put(&self.reserved[0].to_le_bytes());
        put(&self.reserved[1].to_le_bytes());
        put(&self.data_offset.to_le_bytes());

        put(&self.info_size.to_le_bytes());
        put(&self.width.to_le_bytes());
        put(&self.height.to_le_bytes());
        put(&self.planes.to_le_bytes());
        put(&self.bits_per_pixel.to_le_bytes());
        put(&self.compression.to_le_bytes());
        put(&self.image_size.to_le_bytes());
        put(&self.horizontal_resolution.to_le_bytes());
        put(&self.vertical_resolution.to_le_bytes());
        put(&self.palette_colours.to_le_bytes());
        put(&self.important_colours.to_le_bytes());

        debug_assert_eq!(offset, HEADER_LEN);
        bytes
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Read a header back from the start of a bitmap file.
    pub fn parse(bytes: &[u8]) -> io::Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("bitmap header needs {} bytes, got {}", HEADER_LEN, bytes.len()),
            ));
        }
        if bytes[0..2] != SIGNATURE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("bad bitmap signature {:02x?}", &bytes[0..2]),
            ));
        }

        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let u32_at = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        let i32_at = |at: usize| u32_at(at) as i32;

        Ok(Self {
            signature: SIGNATURE,
            file_size: u32_at(2),
            reserved: [u16_at(6), u16_at(8)],
            data_offset: u32_at(10),
            info_size: u32_at(14),
            width: i32_at(18),
            height: i32_at(22),
            planes: u16_at(26),
            bits_per_pixel: u16_at(28),
            compression: u32_at(30),
            image_size: u32_at(34),
            horizontal_resolution: i32_at(38),
            vertical_resolution: i32_at(42),
            palette_colours: u32_at(46),
            important_colours: u32_at(50),
        })
    }
}

/**
Streams a bitmap into a seekable sink.

The header goes out as soon as the encoder is created, at offset 0. Rows follow
in the order [`Encoder::write_row`] is called; the format has no row index, so
that order is the image. [`Encoder::finish`] checks every row arrived and
flushes.

A failed write is not retried. The file is left in whatever state the sink
reached.
*/
pub struct Encoder<W: Write + Seek> {
    sink: W,
    header: Header,
    row: RowBuffer,
    rows_written: u32,
}

impl<W: Write + Seek> Encoder<W> {
    pub fn new(mut sink: W, size: screen::Size) -> Result<Self, RenderError> {
        let header = Header::for_size(size)?;
        debug!("bitmap header: {:?}", header);

        sink.seek(SeekFrom::Start(0))?;
        header.write_to(&mut sink)?;

        Ok(Self {
            sink,
            header,
            row: RowBuffer::new(size.width),
            rows_written: 0,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows_written(&self) -> u32 {
        self.rows_written
    }

    pub fn write_row(&mut self, samples: &[ColourSample]) -> Result<(), RenderError> {
        let height = self.header.size().height;
        if self.rows_written == height {
            return Err(ParameterError::ExtraRow { height }.into());
        }

        trace!("begin write_row {}", self.rows_written);
        self.row.fill(samples)?;
        self.sink.write_all(&self.row)?;
        self.rows_written += 1;
        trace!("end write_row");

        Ok(())
    }

    pub fn finish(mut self) -> Result<W, RenderError> {
        let height = self.header.size().height;
        if self.rows_written != height {
            return Err(ParameterError::MissingRows {
                written: self.rows_written,
                height,
            }
            .into());
        }

        self.sink.flush()?;
        Ok(self.sink)
    }
}
