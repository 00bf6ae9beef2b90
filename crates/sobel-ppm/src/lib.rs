/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decoder and encoder for binary PGM (`P5`) and PPM (`P6`) images.
//!
//! The layout handled is the strict one below, every header line ends
//! with a single `\n` and there are no comments.
//!
//! ```text
//! ╔═══════════════════╤═══════════════════════════════════════════════╗
//! ║ Line              │ Description                                   ║
//! ╠═══════════════════╪═══════════════════════════════════════════════╣
//! ║ P5 or P6          │ magic, P5 is grayscale and P6 is RGB          ║
//! ╟───────────────────┼───────────────────────────────────────────────╢
//! ║ <width> <height>  │ decimal dimensions separated by one space     ║
//! ╟───────────────────┼───────────────────────────────────────────────╢
//! ║ <chroma>          │ decimal maximum sample value, at most 255     ║
//! ╟───────────────────┼───────────────────────────────────────────────╢
//! ║ pixels            │ width*height*channels raw bytes, row-major    ║
//! ╚═══════════════════╧═══════════════════════════════════════════════╝
//! ```
//!
//! # Example
//! ```
//! use sobel_core::raster::RasterBuffer;
//!
//! let image = RasterBuffer::fill(42, 3, 2).unwrap();
//! let bytes = sobel_ppm::encode(&image).unwrap();
//! assert!(bytes.starts_with(b"P5\n3 2\n42\n"));
//!
//! let decoded = sobel_ppm::decode(&bytes).unwrap();
//! assert_eq!(decoded, image);
//! ```
#![forbid(unsafe_code)]

pub extern crate sobel_core;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;

mod decoder;
mod encoder;
mod errors;
