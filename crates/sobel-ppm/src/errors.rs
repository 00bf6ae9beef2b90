/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use sobel_core::bytestream::LineError;
use sobel_core::errors::ErrorKind;

/// Possible errors that may occur during decoding
///
/// All of them mean the stream is not a well formed image
pub enum PPMDecodeErrors {
    /// The first line is not a supported magic token
    WrongMagic(String),
    /// A header line was read but its contents are not valid
    InvalidHeader(String),
    /// A header line could not be read
    ///
    /// The first argument names the line
    MalformedHeaderLine(&'static str, LineError),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// Too large dimensions, first argument is the limit
    /// and the second is what was found
    LargeDimensions(usize, usize),
    /// The stream doesn't have enough pixel bytes
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually left
    InsufficientData(usize, usize),
    /// Bytes follow the pixel data and strict mode is on
    TrailingData(usize, usize),
    Generic(String)
}

impl PPMDecodeErrors {
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Format
    }
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongMagic(found) => {
                writeln!(f, "Wrong magic token `{found}`, expected P5 or P6")
            }
            Self::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            Self::MalformedHeaderLine(line, err) => match err {
                LineError::UnexpectedEof => {
                    writeln!(f, "Stream ended while reading the {line} line")
                }
                LineError::NulByte => {
                    writeln!(f, "NUL byte found in the {line} line")
                }
                LineError::TooLong(limit) => {
                    writeln!(f, "The {line} line is not terminated within {limit} bytes")
                }
            },
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Image dimensions {width}x{height} contain a zero")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data required {expected} but remaining stream has {found}"
                )
            }
            Self::TrailingData(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} pixel bytes but stream has {found}, strict mode rejects trailing data"
                )
            }
            Self::Generic(val) => writeln!(f, "{val}")
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PPMDecodeErrors {}

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    /// The image has no pixel data
    EmptyImage,
    /// Data length does not match image dimensions
    ///
    /// First argument is the expected length, the second the length found
    DimensionMismatch(usize, usize),
    IoErrors(io::Error)
}

impl PPMEncodeErrors {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyImage => ErrorKind::InvalidState,
            Self::DimensionMismatch(..) => ErrorKind::InvalidInput,
            Self::IoErrors(_) => ErrorKind::Io
        }
    }
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IoErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyImage => writeln!(f, "Image for writing contains no data"),
            Self::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Data length does not match image dimensions, expected {expected} but found {found}"
                )
            }
            Self::IoErrors(err) => writeln!(f, "I/O error {err}")
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PPMEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}
