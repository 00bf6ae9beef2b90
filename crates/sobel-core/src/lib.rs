/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all sobel crates
//!
//! It currently contains
//!
//! - An owned grayscale raster buffer with bounds checked 2D access
//! - A byte reader used by header parsers, with bounded line scanning
//! - Colorspace information and decoder options
//! - Error kinds shared by the codec, the filter engine and the command line
//!
//! # Features
//!  - `log`: Route the internal logging macros to the [log](https://docs.rs/log) crate,
//!     otherwise they compile to nothing.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![macro_use]

pub mod bytestream;
pub mod colorspace;
pub mod errors;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod raster;
pub mod serde;

#[cfg(feature = "log")]
pub use log;
