/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};
use std::io::Write;

use sobel_core::log::trace;
use sobel_core::raster::RasterBuffer;

use crate::errors::PPMEncodeErrors;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PPMVersions {
    P5,
    P6
}

impl Display for PPMVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P6 => write!(f, "P6"),
            Self::P5 => write!(f, "P5")
        }
    }
}

impl PPMVersions {
    /// Samples stored per pixel
    pub const fn num_components(self) -> usize {
        match self {
            Self::P5 => 1,
            Self::P6 => 3
        }
    }
}

/// A PPM encoder
///
/// # Example
/// - Encode a grayscale raster to a writer
/// ```
/// use sobel_core::raster::RasterBuffer;
/// use sobel_ppm::PPMEncoder;
///
/// let image = RasterBuffer::fill(0, 4, 4).unwrap();
/// let mut sink = vec![];
/// let written = PPMEncoder::new(&image).encode(&mut sink).unwrap();
/// assert_eq!(written, sink.len());
/// ```
pub struct PPMEncoder<'a> {
    data:       &'a [u8],
    width:      usize,
    height:     usize,
    chroma:     u8,
    version:    PPMVersions
}

impl<'a> PPMEncoder<'a> {
    /// Create an encoder that writes `image` as P5
    pub fn new(image: &'a RasterBuffer) -> PPMEncoder<'a> {
        PPMEncoder {
            data:       image.pixels(),
            width:      image.width(),
            height:     image.height(),
            chroma:     image.chroma(),
            version:    PPMVersions::P5
        }
    }

    /// Create an encoder that writes interleaved RGB samples as P6
    pub fn new_rgb(data: &'a [u8], width: usize, height: usize, chroma: u8) -> PPMEncoder<'a> {
        PPMEncoder {
            data,
            width,
            height,
            chroma,
            version:    PPMVersions::P6
        }
    }

    fn header(&self) -> String {
        format!(
            "{}\n{} {}\n{}\n",
            self.version, self.width, self.height, self.chroma
        )
    }

    /// Check the sample count matches the dimensions
    fn validate(&self) -> Result<(), PPMEncodeErrors> {
        if self.data.is_empty() {
            return Err(PPMEncodeErrors::EmptyImage);
        }
        let expected = self
            .width
            .saturating_mul(self.height)
            .saturating_mul(self.version.num_components());

        if expected != self.data.len() {
            return Err(PPMEncodeErrors::DimensionMismatch(
                expected,
                self.data.len()
            ));
        }
        Ok(())
    }

    /// Write the header followed by the samples to `sink`
    ///
    /// Returns the number of bytes written
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<usize, PPMEncodeErrors> {
        self.validate()?;
        let header = self.header();

        sink.write_all(header.as_bytes())?;
        sink.write_all(self.data)?;
        sink.flush()?;

        trace!("Wrote {} header and {} samples", self.version, self.data.len());

        Ok(header.len() + self.data.len())
    }

    /// Encode into a newly allocated vector
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, PPMEncodeErrors> {
        let mut out = Vec::with_capacity(self.data.len() + 32);
        self.encode(&mut out)?;
        Ok(out)
    }
}

/// Encode a grayscale raster as P5
pub fn encode(image: &RasterBuffer) -> Result<Vec<u8>, PPMEncodeErrors> {
    PPMEncoder::new(image).encode_to_vec()
}
