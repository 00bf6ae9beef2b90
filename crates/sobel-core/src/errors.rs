/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors shared by the sobel crates
use std::fmt::{Debug, Display, Formatter};

/// The family an error belongs to.
///
/// Every error type in the sobel crates can report one of these,
/// which lets callers (e.g. the command line) react to a failure
/// without matching on each crate's variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A path could not be read or written
    Io,
    /// Malformed header, wrong magic or truncated pixel data
    Format,
    /// The input cannot be processed, e.g. an image smaller than 3x3
    InvalidInput,
    /// The operation is not valid for the current state, e.g. encoding an empty buffer
    InvalidState,
    /// A worker thread could not be spawned or joined
    Concurrency
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Io => "I/O error",
            ErrorKind::Format => "format error",
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::InvalidState => "invalid state",
            ErrorKind::Concurrency => "concurrency error"
        };
        write!(f, "{name}")
    }
}

/// Errors raised when constructing a raster buffer
pub enum RasterErrors {
    /// The pixel buffer length does not match the dimensions
    ///
    /// # Arguments
    /// - 1st argument is the expected length (width*height)
    /// - 2nd argument is the length found
    DimensionMismatch(usize, usize),
    /// width*height does not fit in a usize
    TooLargeDimensions(usize, usize)
}

impl RasterErrors {
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

impl Debug for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterErrors::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Pixel buffer length mismatch, expected {expected} but found {found}"
                )
            }
            RasterErrors::TooLargeDimensions(width, height) => {
                writeln!(f, "Dimensions {width}x{height} overflow the address space")
            }
        }
    }
}

impl Display for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for RasterErrors {}
