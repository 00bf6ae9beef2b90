/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised by the filter engine
use std::fmt::{Debug, Display, Formatter};
use std::io;

use sobel_core::errors::{ErrorKind, RasterErrors};

pub enum SobelErrors {
    /// The source is smaller than 3x3, so no pixel has a full neighborhood
    ///
    /// Arguments are the source width and height
    TooSmallImage(usize, usize),
    /// Zero worker threads were requested
    ZeroWorkers,
    /// A worker thread could not be created
    ThreadSpawn(io::Error),
    /// A worker thread panicked before reporting its maximum
    ///
    /// The argument is the worker index
    WorkerPanicked(usize),
    Raster(RasterErrors)
}

impl SobelErrors {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TooSmallImage(..) | Self::ZeroWorkers => ErrorKind::InvalidInput,
            Self::ThreadSpawn(_) | Self::WorkerPanicked(_) => ErrorKind::Concurrency,
            Self::Raster(err) => err.kind()
        }
    }
}

impl Debug for SobelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooSmallImage(width, height) => {
                writeln!(
                    f,
                    "Source image {width}x{height} is too small, minimum size is 3x3"
                )
            }
            Self::ZeroWorkers => writeln!(f, "At least one worker thread is required"),
            Self::ThreadSpawn(err) => writeln!(f, "Could not spawn worker thread: {err}"),
            Self::WorkerPanicked(index) => writeln!(f, "Worker thread #{index} panicked"),
            Self::Raster(err) => writeln!(f, "{err:?}")
        }
    }
}

impl Display for SobelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for SobelErrors {}

impl From<RasterErrors> for SobelErrors {
    fn from(value: RasterErrors) -> Self {
        SobelErrors::Raster(value)
    }
}
