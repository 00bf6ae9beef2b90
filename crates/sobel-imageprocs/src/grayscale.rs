/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert interleaved RGB samples to luma
//!
//! Uses Rec.601 weights in 15 bit fixed point
use sobel_core::errors::RasterErrors;
use sobel_core::raster::{checked_area, RasterBuffer};

/// Convert interleaved `RGBRGB..` samples into luma.
///
/// Each output value is clamped to `max_value`.
/// Stops at whichever of `rgb.len() / 3` and `out.len()` is shorter.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn rgb_to_luma(rgb: &[u8], out: &mut [u8], max_value: u8) {
    let max_value = u32::from(max_value);

    let r_coef = (0.2989 * 32768.0 + 0.5) as u32;
    let g_coef = (0.5870 * 32768.0 + 0.5) as u32;
    let b_coef = (0.1140 * 32768.0 + 0.5) as u32;

    for (pixel, luma) in rgb.chunks_exact(3).zip(out.iter_mut()) {
        // scale up by 64 to keep some fractional precision
        let r = u32::from(pixel[0]) * 64;
        let g = u32::from(pixel[1]) * 64;
        let b = u32::from(pixel[2]) * 64;

        let g1 = ((r * r_coef) + (1 << 14)) >> 15;
        let g2 = ((g * g_coef) + (1 << 14)) >> 15;
        let g3 = ((b * b_coef) + (1 << 14)) >> 15;

        let value = (g1 + g2 + g3) / 64;

        *luma = value.min(max_value) as u8;
    }
}

/// Build a grayscale raster from interleaved RGB pixels
///
/// The raster keeps `max_value` as its chroma.
///
/// # Errors
/// If `rgb.len()` is not `width * height * 3`
pub fn luma_raster(
    rgb: &[u8], width: usize, height: usize, max_value: u8
) -> Result<RasterBuffer, RasterErrors> {
    let area = checked_area(width, height)?;
    let expected = area
        .checked_mul(3)
        .ok_or(RasterErrors::TooLargeDimensions(width, height))?;

    if rgb.len() != expected {
        return Err(RasterErrors::DimensionMismatch(expected, rgb.len()));
    }
    let mut luma = vec![0; area];
    rgb_to_luma(rgb, &mut luma, max_value);

    RasterBuffer::from_raw(luma, width, height, max_value)
}
