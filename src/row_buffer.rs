/*!
Typed bitmap scanlines.

A row on disk is `row_stride(width)` bytes: `width` packed [`ColourSample`]s
followed by up to three zero bytes so every row starts on a 4-byte boundary.

Building that by hand means index arithmetic like `row[i * 3 + 1] = ...` and
remembering to clear the tail. [`bytemuck`](https://docs.rs/bytemuck/latest/bytemuck/)
lets the samples be copied in as a slice instead, and this module keeps the
padding zeroed no matter what was in the buffer before.
*/

use std::ops::Deref;

use crate::{bmp, colour::ColourSample, error::ParameterError};

const SAMPLE_SIZE: usize = std::mem::size_of::<ColourSample>();

pub struct RowBuffer {
    bytes: Vec<u8>,
    width: usize,
}

impl RowBuffer {
    pub fn new(width: u32) -> Self {
        Self {
            bytes: vec![0; bmp::row_stride(width)],
            width: width as usize,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn stride(&self) -> usize {
        self.bytes.len()
    }

    /// Overwrite the row with `samples`, which must hold exactly one sample per column.
    pub fn fill(&mut self, samples: &[ColourSample]) -> Result<(), ParameterError> {
        if samples.len() != self.width {
            return Err(ParameterError::RowLength {
                expected: self.width,
                actual: samples.len(),
            });
        }

        let (packed, padding) = self.bytes.split_at_mut(self.width * SAMPLE_SIZE);
        packed.copy_from_slice(bytemuck::cast_slice(samples));
        padding.fill(0);

        Ok(())
    }

    pub fn samples(&self) -> &[ColourSample] {
        bytemuck::cast_slice(&self.bytes[..self.width * SAMPLE_SIZE])
    }

    pub fn padding(&self) -> &[u8] {
        &self.bytes[self.width * SAMPLE_SIZE..]
    }
}

impl Deref for RowBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}
