/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sobel edge detection for 8-bit grayscale rasters
//!
//! The interior rows of the source are split into contiguous ranges,
//! one scoped worker thread computes each range and the per worker
//! maxima are reduced into the result's chroma once every worker joined.
//!
//! # Example
//! - Detect edges of a uniform image using two threads
//! ```
//! use sobel_core::raster::RasterBuffer;
//! use sobel_imageprocs::sobel::apply;
//!
//! let image = RasterBuffer::fill(100, 5, 5).unwrap();
//! let edges = apply(&image, 2).unwrap();
//!
//! assert_eq!(edges.dimensions(), (3, 3));
//! assert!(edges.pixels().iter().all(|x| *x == 0));
//! assert_eq!(edges.chroma(), 0);
//! ```

// Benchmark support needs nightly
#![cfg_attr(feature = "benchmarks", feature(test))]
#![forbid(unsafe_code)]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod errors;
pub mod grayscale;
pub mod kernel;
pub mod partition;
pub mod sobel;
