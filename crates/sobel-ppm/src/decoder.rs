/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sobel_core::bytestream::{ZByteReader, MAX_HEADER_LINE};
use sobel_core::colorspace::ColorSpace;
use sobel_core::log::{info, warn};
use sobel_core::options::DecoderOptions;
use sobel_core::raster::RasterBuffer;

use crate::errors::PPMDecodeErrors;

/// An instance of a PPM decoder
///
/// The decoder can decode P5 (grayscale) and P6 (RGB) formats
/// with 8 bit samples.
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    chroma:          u8,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    colorspace:      ColorSpace,
    options:         DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data:PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use sobel_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            chroma: 0,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            colorspace: ColorSpace::Unknown,
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling it again after a successful call does nothing.
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = self
            .reader
            .read_line(MAX_HEADER_LINE)
            .map_err(|e| PPMDecodeErrors::MalformedHeaderLine("magic", e))?;

        self.colorspace = match magic {
            b"P5" => ColorSpace::Luma,
            b"P6" => ColorSpace::RGB,
            _ => {
                return Err(PPMDecodeErrors::WrongMagic(
                    String::from_utf8_lossy(magic).into_owned()
                ))
            }
        };
        info!("Colorspace: {:?}", self.colorspace);

        let size = self
            .reader
            .read_line(MAX_HEADER_LINE)
            .map_err(|e| PPMDecodeErrors::MalformedHeaderLine("size", e))?;

        let (width, height) = parse_dimensions(size)?;

        if width == 0 || height == 0 {
            return Err(PPMDecodeErrors::ZeroDimensions(width, height));
        }
        if width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        info!("Width: {}, height: {}", width, height);

        let chroma_line = self
            .reader
            .read_line(MAX_HEADER_LINE)
            .map_err(|e| PPMDecodeErrors::MalformedHeaderLine("chroma", e))?;

        let chroma = parse_decimal(chroma_line, "chroma")?;

        let chroma = u8::try_from(chroma).map_err(|_| {
            PPMDecodeErrors::InvalidHeader(format!("chroma {chroma} does not fit in 8 bits"))
        })?;
        info!("Chroma: {}", chroma);

        self.width = width;
        self.height = height;
        self.chroma = chroma;
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub const fn get_colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the declared maximum sample value or none if headers
    /// aren't decoded
    pub const fn get_chroma(&self) -> Option<u8> {
        if self.decoded_headers {
            Some(self.chroma)
        } else {
            None
        }
    }

    /// Number of bytes the pixel section must hold
    fn expected_size(&self) -> Result<usize, PPMDecodeErrors> {
        self.width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(self.colorspace.num_components()))
            .ok_or_else(|| {
                PPMDecodeErrors::Generic(format!(
                    "Image dimensions {}x{} overflow",
                    self.width, self.height
                ))
            })
    }

    /// Decode a P5 or P6 stream and return the raw samples
    ///
    /// RGB samples are returned interleaved, use [`get_colorspace`](Self::get_colorspace)
    /// to tell the two apart.
    pub fn decode_raw(&mut self) -> Result<Vec<u8>, PPMDecodeErrors> {
        self.read_headers()?;

        let size = self.expected_size()?;
        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(PPMDecodeErrors::InsufficientData(size, remaining));
        }
        if remaining > size {
            if self.options.get_strict_mode() {
                return Err(PPMDecodeErrors::TrailingData(size, remaining));
            }
            warn!(
                "Ignoring {} bytes found after the pixel data",
                remaining - size
            );
        }
        let pixels = self
            .reader
            .get_as_ref(size)
            .ok_or(PPMDecodeErrors::InsufficientData(size, remaining))?;

        Ok(pixels.to_vec())
    }

    /// Decode a grayscale (P5) stream into a raster
    ///
    /// # Errors
    /// A P6 stream is reported as [`PPMDecodeErrors::WrongMagic`], along with every
    /// other header and truncation error.
    pub fn decode(&mut self) -> Result<RasterBuffer, PPMDecodeErrors> {
        self.read_headers()?;

        if self.colorspace != ColorSpace::Luma {
            return Err(PPMDecodeErrors::WrongMagic("P6".to_string()));
        }
        let pixels = self.decode_raw()?;

        RasterBuffer::from_raw(pixels, self.width, self.height, self.chroma)
            .map_err(|e| PPMDecodeErrors::Generic(format!("{e:?}")))
    }
}

/// Decode a grayscale (P5) image
///
/// No width or height limit is applied, so anything [`encode`](crate::encode)
/// produced decodes back. Use [`PPMDecoder::new_with_options`] to bound them.
pub fn decode(data: &[u8]) -> Result<RasterBuffer, PPMDecodeErrors> {
    PPMDecoder::new_with_options(DecoderOptions::new_unbounded(), data).decode()
}

/// Parse a non empty run of ASCII digits
fn parse_decimal(bytes: &[u8], field: &'static str) -> Result<usize, PPMDecodeErrors> {
    if bytes.is_empty() {
        return Err(PPMDecodeErrors::InvalidHeader(format!("missing {field}")));
    }
    let mut value = 0_usize;

    for byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(PPMDecodeErrors::InvalidHeader(format!(
                "unexpected byte {:?} in {field} `{}`",
                *byte as char,
                String::from_utf8_lossy(bytes)
            )));
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(byte - b'0')))
            .ok_or_else(|| PPMDecodeErrors::InvalidHeader(format!("{field} overflows")))?;
    }
    Ok(value)
}

/// Parse `<width> <height>`, separated by exactly one space
fn parse_dimensions(line: &[u8]) -> Result<(usize, usize), PPMDecodeErrors> {
    let split = line.iter().position(|x| *x == b' ').ok_or_else(|| {
        PPMDecodeErrors::InvalidHeader(format!(
            "size line `{}` is not `<width> <height>`",
            String::from_utf8_lossy(line)
        ))
    })?;
    let width = parse_decimal(&line[..split], "width")?;
    let height = parse_decimal(&line[split + 1..], "height")?;

    Ok((width, height))
}
