/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use sobel_core::errors::{ErrorKind, RasterErrors};
use sobel_imageprocs::errors::SobelErrors;
use sobel_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// Everything that can stop the command line from completing
pub enum SobelBinErrors {
    ReadInput(PathBuf, io::Error),
    WriteOutput(PathBuf, io::Error),
    Decode(PPMDecodeErrors),
    /// Color input could not be converted to grayscale
    Raster(RasterErrors),
    Filter(SobelErrors),
    Encode(PPMEncodeErrors),
    GenericString(String)
}

impl SobelBinErrors {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ReadInput(..) | Self::WriteOutput(..) => ErrorKind::Io,
            Self::Decode(err) => err.kind(),
            Self::Raster(err) => err.kind(),
            Self::Filter(err) => err.kind(),
            Self::Encode(err) => err.kind(),
            Self::GenericString(_) => ErrorKind::InvalidInput
        }
    }

    /// Process exit code for the stage that failed
    ///
    /// - 1: reading or decoding the input
    /// - 2: the filter
    /// - 3: encoding or writing the output
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ReadInput(..)
            | Self::Decode(_)
            | Self::Raster(_)
            | Self::GenericString(_) => 1,
            Self::Filter(_) => 2,
            Self::Encode(_) | Self::WriteOutput(..) => 3
        }
    }
}

impl Debug for SobelBinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadInput(path, err) => write!(f, "Could not read {path:?}: {err}"),
            Self::WriteOutput(path, err) => write!(f, "Could not write {path:?}: {err}"),
            Self::Decode(err) => write!(f, "{err:?}"),
            Self::Raster(err) => write!(f, "{err:?}"),
            Self::Filter(err) => write!(f, "{err:?}"),
            Self::Encode(err) => write!(f, "{err:?}"),
            Self::GenericString(err) => write!(f, "{err}")
        }
    }
}

impl Display for SobelBinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for SobelBinErrors {}

impl From<PPMDecodeErrors> for SobelBinErrors {
    fn from(value: PPMDecodeErrors) -> Self {
        SobelBinErrors::Decode(value)
    }
}

impl From<RasterErrors> for SobelBinErrors {
    fn from(value: RasterErrors) -> Self {
        SobelBinErrors::Raster(value)
    }
}

impl From<SobelErrors> for SobelBinErrors {
    fn from(value: SobelErrors) -> Self {
        SobelBinErrors::Filter(value)
    }
}

impl From<PPMEncodeErrors> for SobelBinErrors {
    fn from(value: PPMEncodeErrors) -> Self {
        SobelBinErrors::Encode(value)
    }
}

impl From<String> for SobelBinErrors {
    fn from(value: String) -> Self {
        SobelBinErrors::GenericString(value)
    }
}
